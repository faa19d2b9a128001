//! # User model mirrored from the LinkFree backend
//!
//! [`User`] is the client-side copy of the account record the backend returns from
//! `GET /api/user/isAuthenticated`, `POST /api/user/login` and the profile endpoints.
//! The client never mutates it directly; new values arrive only in API responses.
//!
//! - `id`, `name`, `email` identify the account. Ids arrive as strings or numbers
//!   depending on the endpoint and are normalised to `String`.
//! - `username`, `display_name`, `profile_pic`, `bio` are filled in by the setup wizard
//!   and stay `None` until then.
//! - `is_setup_complete` gates the redirect to `/setup`.
//!
//! [`PageOwner`] is the narrower projection embedded in page responses.

use serde::{Deserialize, Serialize};

use super::de;

/// Account record as the backend reports it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, alias = "_id", deserialize_with = "de::id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub is_setup_complete: bool,
}

impl User {
    /// Display name, falling back to the account name and then the email.
    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or_else(|| Some(self.name.as_str()).filter(|name| !name.is_empty()))
            .unwrap_or(&self.email)
    }
}

/// Owner fields embedded in `GET /api/pages/:id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageOwner {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_backend_json() {
        let user: User = serde_json::from_str(
            r#"{"_id": 42, "name": "Jane", "email": "jane@example.com",
                "displayName": "Jane Doe", "isSetupComplete": true}"#,
        )
        .unwrap();

        assert_eq!(user.id, "42");
        assert_eq!(user.display_name(), "Jane Doe");
        assert!(user.is_setup_complete);
        assert!(user.username.is_none());
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut user = User {
            email: "jane@example.com".to_string(),
            ..User::default()
        };
        assert_eq!(user.display_name(), "jane@example.com");

        user.name = "Jane".to_string();
        assert_eq!(user.display_name(), "Jane");

        user.display_name = Some(String::new());
        assert_eq!(user.display_name(), "Jane");
    }
}
