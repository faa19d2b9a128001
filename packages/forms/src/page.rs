//! # Page editor state
//!
//! [`PageDraft`] backs both `/edit-page/:id` and `/dashboard/pages/create`. It holds
//! the editable fields plus the owner details the live preview needs. Everything is
//! local until [`PageDraft::save`] (edit) or [`PageDraft::publish`] (create) sends
//! the whole page in one request.

use api::{ApiError, CreatePageInfo, LinkFreeApi, NewPage, Page, PageUpdate};

use crate::background::{Background, EDIT_FALLBACK};
use crate::links::LinkList;
use crate::share::ShareLinks;
use crate::social::SocialLinks;
use crate::validation::{self, ValidationError};
use crate::visibility::VisibilityToggle;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("only a saved page can be updated")]
    NotSaved,
    #[error("an existing page cannot be published again")]
    AlreadySaved,
    /// A backend call failed; carries the text to show.
    #[error("{0}")]
    Request(String),
}

impl PageError {
    fn request(e: ApiError, fallback: &str) -> Self {
        PageError::Request(e.user_message(fallback))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftMode {
    Edit { id: String },
    Create,
}

/// Who the page belongs to, for the preview.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerPreview {
    pub username: String,
    pub display_name: String,
    pub profile_pic: Option<String>,
}

impl OwnerPreview {
    pub fn initials(&self) -> String {
        self.display_name.chars().take(2).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDraft {
    pub mode: DraftMode,
    pub slug: String,
    pub bio: String,
    pub background: String,
    pub visibility: bool,
    pub is_default: bool,
    pub links: LinkList,
    pub social: SocialLinks,
    pub total_views: u64,
    pub link_clicks: u64,
    pub owner: OwnerPreview,
}

impl PageDraft {
    pub fn from_page(page: Page) -> Self {
        let owner = page.user.unwrap_or_default();
        let bio = page
            .bio
            .filter(|b| !b.is_empty())
            .or(owner.bio)
            .unwrap_or_default();
        let background = page
            .background
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| EDIT_FALLBACK.to_string());

        Self {
            mode: DraftMode::Edit { id: page.id },
            slug: page.slug,
            bio,
            background,
            visibility: page.visibility,
            is_default: page.is_default,
            links: LinkList::from_links(page.links),
            social: SocialLinks::from_links(page.social_links),
            total_views: page.total_views,
            link_clicks: page.link_clicks,
            owner: OwnerPreview {
                username: owner.username.unwrap_or_default(),
                display_name: owner.display_name.unwrap_or_default(),
                profile_pic: owner.profile_pic,
            },
        }
    }

    pub fn from_create_info(info: CreatePageInfo) -> Self {
        let user_bio = info.user.as_ref().and_then(|u| u.bio.clone());
        let bio = info
            .bio
            .filter(|b| !b.is_empty())
            .or(user_bio)
            .unwrap_or_default();

        Self {
            mode: DraftMode::Create,
            slug: String::new(),
            bio,
            background: String::new(),
            visibility: true,
            is_default: info.is_default,
            links: LinkList::new(),
            social: SocialLinks::new(),
            total_views: 0,
            link_clicks: 0,
            owner: OwnerPreview {
                username: info.username.unwrap_or_default(),
                display_name: info.display_name.unwrap_or_default(),
                profile_pic: info.profile_pic,
            },
        }
    }

    pub async fn load<A: LinkFreeApi>(api: &A, id: &str) -> Result<Self, PageError> {
        let page = api.get_page(id).await.map_err(|e| {
            tracing::error!("failed to load page {id}: {e}");
            PageError::request(e, "Failed to load page")
        })?;
        Ok(Self::from_page(page))
    }

    pub async fn for_create<A: LinkFreeApi>(api: &A) -> Result<Self, PageError> {
        let info = api.create_page_info().await.map_err(|e| {
            tracing::error!("failed to load page defaults: {e}");
            PageError::request(e, "Failed to load page")
        })?;
        Ok(Self::from_create_info(info))
    }

    pub fn id(&self) -> Option<&str> {
        match &self.mode {
            DraftMode::Edit { id } => Some(id),
            DraftMode::Create => None,
        }
    }

    pub fn resolved_background(&self) -> Background {
        Background::parse(&self.background)
    }

    /// Sum of the clicks of the links currently in the draft.
    pub fn total_link_clicks(&self) -> u64 {
        self.links.total_clicks()
    }

    /// The visibility switch for a saved page.
    pub fn visibility_toggle(&self) -> Option<VisibilityToggle> {
        self.id()
            .map(|id| VisibilityToggle::new(id, self.visibility))
    }

    /// Public links for this page. `None` until the owner has a username.
    pub fn share_links(&self, origin: &str) -> Option<ShareLinks> {
        if self.owner.username.is_empty() {
            return None;
        }
        let slug = (!self.is_default).then_some(self.slug.as_str());
        Some(ShareLinks::new(origin, &self.owner.username, slug))
    }

    pub fn update_payload(&self) -> PageUpdate {
        PageUpdate {
            bio: self.bio.clone(),
            links: self.links.to_links(),
            social_links: self.social.to_links(),
            background: self.background.clone(),
        }
    }

    /// Body for publishing. Non-default pages need a valid slug.
    pub fn new_page_payload(&self) -> Result<NewPage, PageError> {
        let slug = if self.is_default {
            self.slug.trim().to_string()
        } else {
            validation::slug(&self.slug)?
        };
        Ok(NewPage {
            slug,
            bio: self.bio.clone(),
            social_links: self.social.to_links(),
            background: self.background.clone(),
            visibility: self.visibility,
            links: self.links.to_links(),
        })
    }

    pub async fn save<A: LinkFreeApi>(&self, api: &A) -> Result<(), PageError> {
        let id = self.id().ok_or(PageError::NotSaved)?;
        api.update_page(id, self.update_payload())
            .await
            .map_err(|e| {
                tracing::error!("saving page {id} failed: {e}");
                PageError::request(e, "There was a problem saving your changes. Please try again.")
            })?;
        tracing::info!("page {id} saved");
        Ok(())
    }

    /// Create the page. Returns the links to show on the success card.
    pub async fn publish<A: LinkFreeApi>(
        &self,
        api: &A,
        origin: &str,
    ) -> Result<Option<ShareLinks>, PageError> {
        if self.id().is_some() {
            return Err(PageError::AlreadySaved);
        }
        let body = self.new_page_payload()?;
        api.create_page(body).await.map_err(|e| {
            tracing::error!("creating page failed: {e}");
            PageError::request(e, "There was a problem saving your changes. Please try again.")
        })?;
        tracing::info!("page created for {}", self.owner.username);
        Ok(self.share_links(origin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeApi;
    use api::Platform;
    use serde_json::json;

    fn page_json() -> serde_json::Value {
        json!({
            "id": "p1",
            "slug": "work",
            "bio": "",
            "visibility": true,
            "isDefault": false,
            "links": [{"title": "Blog", "url": "https://blog.example", "clicks": 2}],
            "socialLinks": [{"platform": "github", "url": "https://github.com/jane"}],
            "totalViews": 10,
            "user": {"username": "jane", "displayName": "Jane Doe", "bio": "owner bio"}
        })
    }

    #[tokio::test]
    async fn test_load_applies_fallbacks() {
        let api = FakeApi::new().reply("get_page", page_json());

        let draft = PageDraft::load(&api, "p1").await.unwrap();

        assert_eq!(draft.id(), Some("p1"));
        assert_eq!(draft.bio, "owner bio");
        assert_eq!(draft.background, "bg-blue-100");
        assert_eq!(draft.total_link_clicks(), 2);
        assert_eq!(draft.owner.initials(), "Ja");
        assert_eq!(api.calls_to("get_page")[0].body, json!({"id": "p1"}));
    }

    #[tokio::test]
    async fn test_save_sends_whole_page() {
        let api = FakeApi::new()
            .reply("get_page", page_json())
            .reply("update_page", json!(null));
        let mut draft = PageDraft::load(&api, "p1").await.unwrap();
        draft.social.add(Platform::Mail);
        draft.links.add();

        draft.save(&api).await.unwrap();

        let body = &api.calls_to("update_page")[0].body;
        assert_eq!(body["id"], "p1");
        assert_eq!(body["links"].as_array().unwrap().len(), 2);
        assert_eq!(body["links"][1], json!({"title": "", "url": "", "clicks": 0}));
        assert_eq!(body["socialLinks"][1], json!({"platform": "mail", "url": ""}));
        assert_eq!(body["background"], "bg-blue-100");
    }

    #[tokio::test]
    async fn test_publish_requires_slug_for_extra_pages() {
        let api = FakeApi::new().reply(
            "create_page_info",
            json!({"isDefault": false, "username": "jane", "user": {"bio": "hi"}}),
        );
        let mut draft = PageDraft::for_create(&api).await.unwrap();
        assert_eq!(draft.bio, "hi");
        assert!(draft.visibility);

        let err = draft.publish(&api, "https://linkfree.tech").await.unwrap_err();
        assert_eq!(err, PageError::Invalid(ValidationError::SlugRequired));
        assert!(api.calls_to("create_page").is_empty());

        draft.slug = "work".to_string();
        let share = draft.publish(&api, "https://linkfree.tech").await.unwrap().unwrap();
        assert_eq!(share.profile_url(), "https://linkfree.tech/jane/work");
        assert_eq!(api.calls_to("create_page")[0].body["slug"], "work");
    }

    #[tokio::test]
    async fn test_save_failure_message() {
        let api = FakeApi::new()
            .reply("get_page", page_json())
            .fail("update_page", 500, "");
        let draft = PageDraft::load(&api, "p1").await.unwrap();

        assert_eq!(
            draft.save(&api).await.unwrap_err().to_string(),
            "There was a problem saving your changes. Please try again."
        );
    }

    #[test]
    fn test_create_draft_cannot_save() {
        let draft = PageDraft::from_create_info(CreatePageInfo::default());
        assert!(draft.visibility_toggle().is_none());
        assert!(draft.share_links("https://linkfree.tech").is_none());
    }
}
