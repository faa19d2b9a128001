//! # Profile setup wizard
//!
//! Four input steps and a terminal review step, walked strictly in order:
//!
//! ```text
//! Username -> DisplayName -> ProfilePicture -> Bio -> Complete
//! ```
//!
//! Username and display name are required. Picture and bio may be skipped. Nothing
//! is saved until [`SetupWizard::complete`] posts everything in one request.

use api::{ImageFile, LinkFreeApi, ProfileSetup};

use crate::validation::{self, ImagePolicy, ValidationError};
use crate::Navigation;

/// Acknowledgement the backend sends when the profile was stored.
pub const SETUP_COMPLETE_MESSAGE: &str = "Profile setup complete";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Step {
    #[default]
    Username,
    DisplayName,
    ProfilePicture,
    Bio,
    Complete,
}

impl Step {
    /// The steps that take input, in order. `Complete` is not among them.
    pub const INPUTS: [Step; 4] = [
        Step::Username,
        Step::DisplayName,
        Step::ProfilePicture,
        Step::Bio,
    ];

    pub fn next(self) -> Option<Step> {
        match self {
            Step::Username => Some(Step::DisplayName),
            Step::DisplayName => Some(Step::ProfilePicture),
            Step::ProfilePicture => Some(Step::Bio),
            Step::Bio => Some(Step::Complete),
            Step::Complete => None,
        }
    }

    pub fn previous(self) -> Option<Step> {
        match self {
            Step::Username => None,
            Step::DisplayName => Some(Step::Username),
            Step::ProfilePicture => Some(Step::DisplayName),
            Step::Bio => Some(Step::ProfilePicture),
            Step::Complete => Some(Step::Bio),
        }
    }

    pub fn is_optional(self) -> bool {
        matches!(self, Step::ProfilePicture | Step::Bio)
    }

    /// Position among [`Step::INPUTS`]; `Complete` sits one past the end.
    pub fn index(self) -> usize {
        match self {
            Step::Username => 0,
            Step::DisplayName => 1,
            Step::ProfilePicture => 2,
            Step::Bio => 3,
            Step::Complete => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Username => "Choose your username",
            Step::DisplayName => "What should we call you?",
            Step::ProfilePicture => "Add a profile picture",
            Step::Bio => "Tell people about yourself",
            Step::Complete => "You're all set!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Username is already taken")]
    UsernameTaken,
    #[error("Username and Display Name are required.")]
    MissingRequired,
    #[error("Unexpected response from server")]
    UnexpectedResponse,
    #[error("this action is not available on the {0:?} step")]
    WrongStep(Step),
    /// A backend call failed; carries the text to show.
    #[error("{0}")]
    Request(String),
}

impl WizardError {
    /// Whether the backend was involved, as opposed to a local validation failure.
    pub fn is_request_failure(&self) -> bool {
        matches!(self, WizardError::Request(_) | WizardError::UnexpectedResponse)
    }
}

/// Values collected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupData {
    pub username: String,
    pub display_name: String,
    pub profile_pic: String,
    pub bio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupWizard {
    step: Step,
    data: SetupData,
}

impl SetupWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn data(&self) -> &SetupData {
        &self.data
    }

    fn expect(&self, step: Step) -> Result<(), WizardError> {
        if self.step == step {
            Ok(())
        } else {
            Err(WizardError::WrongStep(self.step))
        }
    }

    fn advance(&mut self) {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
    }

    /// Validate locally, then ask the backend whether the name is free.
    pub async fn submit_username<A: LinkFreeApi>(
        &mut self,
        api: &A,
        input: &str,
    ) -> Result<(), WizardError> {
        self.expect(Step::Username)?;
        let username = validation::username(input)?;

        let available = api.check_username(&username).await.map_err(|e| {
            tracing::error!("username check failed: {e}");
            WizardError::Request(e.user_message("Could not check username availability"))
        })?;
        if !available {
            return Err(WizardError::UsernameTaken);
        }

        tracing::debug!("username {username} is available");
        self.data.username = username;
        self.advance();
        Ok(())
    }

    pub fn submit_display_name(&mut self, input: &str) -> Result<(), WizardError> {
        self.expect(Step::DisplayName)?;
        self.data.display_name = validation::display_name(input)?;
        self.advance();
        Ok(())
    }

    /// Upload a picked avatar. The wizard stays on the picture step so the user can
    /// see the result before continuing.
    pub async fn upload_picture<A: LinkFreeApi>(
        &mut self,
        api: &A,
        file: ImageFile,
    ) -> Result<String, WizardError> {
        self.expect(Step::ProfilePicture)?;
        ImagePolicy::WIZARD_AVATAR.check(&file)?;

        let url = api.upload_profile_picture(file).await.map_err(|e| {
            tracing::error!("profile picture upload failed: {e}");
            WizardError::Request(e.user_message("Upload failed. Try again."))
        })?;
        self.data.profile_pic = url.clone();
        Ok(url)
    }

    /// Leave the picture step, with or without an uploaded picture.
    pub fn submit_picture(&mut self) -> Result<(), WizardError> {
        self.expect(Step::ProfilePicture)?;
        self.advance();
        Ok(())
    }

    pub fn submit_bio(&mut self, input: &str) -> Result<(), WizardError> {
        self.expect(Step::Bio)?;
        self.data.bio = validation::bio(input)?;
        self.advance();
        Ok(())
    }

    /// Move past an optional step without validating. Returns whether the step changed.
    pub fn skip(&mut self) -> bool {
        if !self.step.is_optional() {
            return false;
        }
        self.advance();
        true
    }

    /// Return to the previous step. Returns whether the step changed.
    pub fn back(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Post everything collected. On success the browser must reload into the
    /// dashboard so the auth state is fetched again.
    pub async fn complete<A: LinkFreeApi>(&self, api: &A) -> Result<Navigation, WizardError> {
        self.expect(Step::Complete)?;
        if self.data.username.is_empty() || self.data.display_name.is_empty() {
            return Err(WizardError::MissingRequired);
        }

        let setup = ProfileSetup {
            username: self.data.username.clone(),
            display_name: self.data.display_name.clone(),
            profile_pic: self.data.profile_pic.clone(),
            bio: self.data.bio.clone(),
        };
        let response = api.setup_profile(setup).await.map_err(|e| {
            tracing::error!("profile setup failed: {e}");
            WizardError::Request(
                e.user_message("Something went wrong while saving your profile. Please try again."),
            )
        })?;
        if response.message != SETUP_COMPLETE_MESSAGE {
            tracing::warn!("profile setup answered {:?}", response.message);
            return Err(WizardError::UnexpectedResponse);
        }

        tracing::info!("profile setup complete for {}", self.data.username);
        Ok(Navigation::Hard(crate::session::DASHBOARD_PATH.to_string()))
    }
}
