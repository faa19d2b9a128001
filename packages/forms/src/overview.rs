//! Headline numbers on the dashboard overview.

use api::{ApiError, LinkFreeApi, OverviewStat, PageSummary};

pub const TOTAL_VIEWS: &str = "Total Profile Views";
pub const TOTAL_CLICKS: &str = "Total Link Clicks";
pub const ENGAGEMENT_RATE: &str = "Engagement Rate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Views,
    Clicks,
    Engagement,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub kind: StatKind,
    pub title: &'static str,
    pub value: String,
}

impl Stat {
    /// The value as displayed; the engagement rate is a percentage.
    pub fn display(&self) -> String {
        match self.kind {
            StatKind::Engagement => format!("{}%", self.value),
            StatKind::Views | StatKind::Clicks => self.value.clone(),
        }
    }
}

/// The three fixed stats. Each starts at "0" and only changes when the backend
/// reports a row with the same title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    stats: [Stat; 3],
}

impl Default for Overview {
    fn default() -> Self {
        let stat = |kind, title| Stat {
            kind,
            title,
            value: "0".to_string(),
        };
        Self {
            stats: [
                stat(StatKind::Views, TOTAL_VIEWS),
                stat(StatKind::Clicks, TOTAL_CLICKS),
                stat(StatKind::Engagement, ENGAGEMENT_RATE),
            ],
        }
    }
}

impl Overview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&mut self, rows: &[OverviewStat]) {
        for stat in &mut self.stats {
            if let Some(row) = rows.iter().find(|r| r.title == stat.title) {
                stat.value = row.value.clone();
            }
        }
    }

    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    /// Fetch and merge. A failed request leaves every stat at "0".
    pub async fn load<A: LinkFreeApi>(api: &A) -> Result<Self, (Self, ApiError)> {
        let mut overview = Self::new();
        match api.analytics_overview().await {
            Ok(rows) => {
                overview.merge(&rows);
                Ok(overview)
            }
            Err(e) => {
                tracing::error!("failed to fetch stats: {e}");
                Err((overview, e))
            }
        }
    }
}

/// The user's pages. Any failure shows as an empty list.
pub async fn load_pages<A: LinkFreeApi>(api: &A) -> Vec<PageSummary> {
    match api.list_pages().await {
        Ok(pages) => pages,
        Err(e) => {
            tracing::error!("failed to fetch pages: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeApi;
    use serde_json::json;

    #[test]
    fn test_merge_by_title() {
        let mut overview = Overview::new();
        overview.merge(&[
            OverviewStat { title: ENGAGEMENT_RATE.to_string(), value: "12.5".to_string() },
            OverviewStat { title: "Unrelated".to_string(), value: "9".to_string() },
        ]);

        let stats = overview.stats();
        assert_eq!(stats[0].display(), "0");
        assert_eq!(stats[2].display(), "12.5%");
    }

    #[tokio::test]
    async fn test_load() {
        let api = FakeApi::new().reply(
            "analytics_overview",
            json!([{"title": "Total Profile Views", "value": 42}]),
        );
        let overview = Overview::load(&api).await.unwrap();
        assert_eq!(overview.stats()[0].value, "42");
    }

    #[tokio::test]
    async fn test_pages_empty_on_failure() {
        let api = FakeApi::new().fail("list_pages", 401, "");
        assert!(load_pages(&api).await.is_empty());

        let api = FakeApi::new().reply("list_pages", json!([{"id": "p1", "slug": "", "isDefault": true}]));
        let pages = load_pages(&api).await;
        assert!(pages[0].is_default);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_zeroes() {
        let api = FakeApi::new().fail("analytics_overview", 500, "");
        let (overview, _) = Overview::load(&api).await.unwrap_err();
        assert_eq!(overview, Overview::new());
    }
}
