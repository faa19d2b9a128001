//! # Pages, links and the public portfolio
//!
//! | Type | Endpoint |
//! |------|----------|
//! | [`Page`] | `GET /api/pages/:id` |
//! | [`PageSummary`] | `GET /api/pages` (one row per page) |
//! | [`CreatePageInfo`] | `GET /api/pages/createpageinfo` |
//! | [`Portfolio`] | `GET /api/portfolio/:username[/:slug]` (inside `{data}`) |
//! | [`PageUpdate`] | body of `PUT /api/pages/:id` |
//! | [`NewPage`] | body of `POST /api/pages` |
//! | [`VisibilityUpdate`] | body of `PUT /api/pages/visibility` |
//! | [`TrackLink`] | body of `POST .../track-link` |

use serde::{Deserialize, Serialize};

use super::de;
use super::social::SocialLink;
use super::user::PageOwner;

/// A titled outbound link on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub clicks: u64,
}

/// A full page as returned for editing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default, alias = "_id", deserialize_with = "de::id")]
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub visibility: bool,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default, deserialize_with = "de::social_links")]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub total_views: u64,
    #[serde(default)]
    pub link_clicks: u64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user: Option<PageOwner>,
}

/// One row of the pages list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    #[serde(default, alias = "_id", deserialize_with = "de::id")]
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub visibility: bool,
    #[serde(default)]
    pub total_views: u64,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Prefill for the create-page form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageInfo {
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub user: Option<PageOwner>,
}

/// The public profile rendered at `/:username[/:slug]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub user_bio: Option<String>,
    #[serde(default)]
    pub page_bio: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default, deserialize_with = "de::social_links")]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub visibility: bool,
}

impl Portfolio {
    /// Page bio, or the user's bio when the page has none.
    pub fn bio(&self) -> Option<&str> {
        self.page_bio
            .as_deref()
            .filter(|b| !b.is_empty())
            .or(self.user_bio.as_deref())
            .filter(|b| !b.is_empty())
    }

    /// Avatar fallback text: the first two characters of the display name.
    pub fn initials(&self) -> String {
        self.display_name.chars().take(2).collect()
    }
}

/// Body of `PUT /api/pages/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageUpdate {
    pub bio: String,
    pub links: Vec<Link>,
    pub social_links: Vec<SocialLink>,
    pub background: String,
}

/// Body of `POST /api/pages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPage {
    pub slug: String,
    pub bio: String,
    pub social_links: Vec<SocialLink>,
    pub background: String,
    pub visibility: bool,
    pub links: Vec<Link>,
}

/// Body of `PUT /api/pages/visibility`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityUpdate {
    pub id: String,
    pub visibility: bool,
}

/// Body of `POST /api/portfolio/.../track-link`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackLink {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Platform, SocialLink};

    #[test]
    fn test_page_from_backend_json() {
        let page: Page = serde_json::from_str(
            r#"{
                "id": 7,
                "slug": "work",
                "visibility": true,
                "links": [{"title": "Blog", "url": "https://blog.example"}],
                "socialLinks": [
                    {"platform": "github", "url": "https://github.com/jane"},
                    {"platform": "myspace", "url": "https://myspace.com/jane"},
                    {"platform": "mail", "url": null}
                ],
                "totalViews": 12,
                "user": {"username": "jane", "bio": "hi"}
            }"#,
        )
        .unwrap();

        assert_eq!(page.id, "7");
        assert_eq!(page.links[0].clicks, 0);
        assert_eq!(page.social_links.len(), 2);
        assert_eq!(page.social_links[0].platform, Platform::Github);
        assert_eq!(page.social_links[1].url, "");
        assert_eq!(page.user.unwrap().username.as_deref(), Some("jane"));
    }

    #[test]
    fn test_portfolio_social_links_as_object() {
        let portfolio: Portfolio = serde_json::from_str(
            r#"{
                "username": "jane",
                "displayName": "Jane Doe",
                "userBio": "user bio",
                "pageBio": "",
                "socialLinks": {"twitter": "https://x.com/jane", "github": 5}
            }"#,
        )
        .unwrap();

        // keeps the server's key order, not alphabetical
        assert_eq!(
            portfolio.social_links,
            vec![
                SocialLink { platform: Platform::Twitter, url: "https://x.com/jane".to_string() },
                SocialLink { platform: Platform::Github, url: String::new() },
            ]
        );
        assert_eq!(portfolio.bio(), Some("user bio"));
        assert_eq!(portfolio.initials(), "Ja");
    }

    #[test]
    fn test_new_page_wire_shape() {
        let body = NewPage {
            slug: "work".to_string(),
            bio: String::new(),
            social_links: vec![SocialLink {
                platform: Platform::Mail,
                url: "mailto:jane@example.com".to_string(),
            }],
            background: "bg-pink-100".to_string(),
            visibility: true,
            links: vec![],
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["socialLinks"][0]["platform"], "mail");
        assert_eq!(json["background"], "bg-pink-100");
        assert!(json.get("social_links").is_none());
    }
}
