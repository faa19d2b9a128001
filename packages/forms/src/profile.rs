//! Profile settings form.

use api::{ApiError, ImageFile, LinkFreeApi, ProfileUpdate, User};

use crate::validation::{self, ImagePolicy, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("{0}")]
    Request(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub bio: String,
    pub profile_pic: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone().unwrap_or_default(),
            email: user.email.clone(),
            display_name: user.display_name.clone().unwrap_or_default(),
            bio: user.bio.clone().unwrap_or_default(),
            profile_pic: user.profile_pic.clone().unwrap_or_default(),
        }
    }

    pub async fn load<A: LinkFreeApi>(api: &A) -> Result<Self, ApiError> {
        let user = api.profile_info().await.inspect_err(|e| {
            tracing::error!("failed to load profile: {e}");
        })?;
        Ok(Self::from_user(&user))
    }

    pub fn initials(&self) -> String {
        self.display_name.chars().take(2).collect()
    }

    /// Upload a new avatar and put its URL in the form. Not saved until [`Self::save`].
    pub async fn upload_picture<A: LinkFreeApi>(
        &mut self,
        api: &A,
        file: ImageFile,
    ) -> Result<(), ProfileError> {
        ImagePolicy::SETTINGS_AVATAR.check(&file)?;
        let url = api.upload_profile_picture(file).await.map_err(|e| {
            tracing::error!("profile picture upload failed: {e}");
            ProfileError::Request(e.user_message("Upload failed. Try again."))
        })?;
        self.profile_pic = url;
        Ok(())
    }

    /// Save and adopt what the backend stored. Returns the updated user.
    pub async fn save<A: LinkFreeApi>(&mut self, api: &A) -> Result<User, ProfileError> {
        let update = ProfileUpdate {
            display_name: validation::display_name(&self.display_name)?,
            bio: validation::bio(&self.bio)?,
            profile_pic: self.profile_pic.clone(),
        };
        let user = api.update_profile(update).await.map_err(|e| {
            tracing::error!("profile update failed: {e}");
            ProfileError::Request(e.user_message("Failed to update profile"))
        })?;
        self.adopt(&user);
        Ok(user)
    }

    /// `user` with this form's profile fields written over it.
    pub fn merged_into(&self, user: &User) -> User {
        let non_empty = |value: &str| (!value.is_empty()).then(|| value.to_string());
        User {
            username: non_empty(&self.username).or_else(|| user.username.clone()),
            display_name: Some(self.display_name.clone()),
            bio: Some(self.bio.clone()),
            profile_pic: Some(self.profile_pic.clone()),
            ..user.clone()
        }
    }

    /// Take over the fields present in a server response and keep the rest.
    fn adopt(&mut self, user: &User) {
        take(&mut self.username, &user.username);
        take(&mut self.display_name, &user.display_name);
        take(&mut self.bio, &user.bio);
        take(&mut self.profile_pic, &user.profile_pic);
        if !user.email.is_empty() {
            self.email.clone_from(&user.email);
        }
    }
}

fn take(field: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        field.clone_from(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_save_adopts_server_values() {
        let api = FakeApi::new()
            .reply(
                "profile_info",
                json!({"username": "jane", "displayName": "Jane", "email": "j@x.io"}),
            )
            .reply(
                "update_profile",
                json!({"displayName": "Jane Doe", "bio": "trimmed by server"}),
            );
        let mut form = ProfileForm::load(&api).await.unwrap();
        assert_eq!(form.username, "jane");
        assert_eq!(form.email, "j@x.io");
        form.display_name = "  Jane Doe ".to_string();

        let user = form.save(&api).await.unwrap();

        assert_eq!(user.display_name.as_deref(), Some("Jane Doe"));
        assert_eq!(form.display_name, "Jane Doe");
        assert_eq!(form.bio, "trimmed by server");
        assert_eq!(form.username, "jane");
        assert_eq!(form.email, "j@x.io");

        let session = User {
            id: "u1".to_string(),
            email: "j@x.io".to_string(),
            is_setup_complete: true,
            ..Default::default()
        };
        let merged = form.merged_into(&session);
        assert_eq!(merged.id, "u1");
        assert!(merged.is_setup_complete);
        assert_eq!(merged.display_name.as_deref(), Some("Jane Doe"));
        assert_eq!(merged.username.as_deref(), Some("jane"));
        assert_eq!(
            api.calls_to("update_profile")[0].body,
            json!({"displayName": "Jane Doe", "bio": "", "profilePic": ""})
        );
    }

    #[tokio::test]
    async fn test_gif_over_two_megabytes_rejected() {
        let api = FakeApi::new();
        let mut form = ProfileForm::default();
        let file = ImageFile {
            name: "big.gif".to_string(),
            content_type: "image/gif".to_string(),
            bytes: vec![0; 2 * 1024 * 1024 + 1],
        };

        assert!(form.upload_picture(&api, file).await.is_err());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_form() {
        let api = FakeApi::new().fail("update_profile", 500, "");
        let mut form = ProfileForm {
            display_name: "Jane Doe".to_string(),
            ..Default::default()
        };

        let err = form.save(&api).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to update profile");
        assert_eq!(form.display_name, "Jane Doe");
    }
}
