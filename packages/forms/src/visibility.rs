//! Published/hidden switch for a saved page.
//!
//! The shown value only changes once the backend has accepted it. A failed request
//! leaves the previous value in place.

use api::{ApiError, LinkFreeApi, VisibilityUpdate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityToggle {
    page_id: String,
    visible: bool,
}

impl VisibilityToggle {
    pub fn new(page_id: impl Into<String>, visible: bool) -> Self {
        Self {
            page_id: page_id.into(),
            visible,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    /// Ask for `visible`. Returns whether the state changed; asking for the current
    /// value sends nothing.
    pub async fn set<A: LinkFreeApi>(&mut self, api: &A, visible: bool) -> Result<bool, ApiError> {
        if visible == self.visible {
            return Ok(false);
        }

        let update = VisibilityUpdate {
            id: self.page_id.clone(),
            visibility: visible,
        };
        if let Err(e) = api.set_visibility(update).await {
            tracing::error!("visibility update for page {} failed: {e}", self.page_id);
            return Err(e);
        }

        self.visible = visible;
        Ok(true)
    }

    pub async fn toggle<A: LinkFreeApi>(&mut self, api: &A) -> Result<bool, ApiError> {
        self.set(api, !self.visible).await
    }

    /// Toast title for the state just reached.
    pub fn status_message(&self) -> &'static str {
        if self.visible {
            "Page is now visible"
        } else {
            "Page is now hidden"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_hide_sends_one_request_then_updates() {
        let api = FakeApi::new().reply("set_visibility", json!(null));
        let mut toggle = VisibilityToggle::new("p1", true);

        assert!(toggle.toggle(&api).await.unwrap());

        assert!(!toggle.is_visible());
        let calls = api.calls_to("set_visibility");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].body, json!({"id": "p1", "visibility": false}));
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_value() {
        let api = FakeApi::new().fail("set_visibility", 500, r#"{"error": "db down"}"#);
        let mut toggle = VisibilityToggle::new("p1", true);

        assert!(toggle.set(&api, false).await.is_err());
        assert!(toggle.is_visible());
    }

    #[tokio::test]
    async fn test_same_value_sends_nothing() {
        let api = FakeApi::new();
        let mut toggle = VisibilityToggle::new("p1", false);

        assert!(!toggle.set(&api, false).await.unwrap());
        assert!(api.calls().is_empty());
    }
}
