//! Login and signup forms, and the OAuth entry points.

use api::{ClientConfig, LinkFreeApi, LoginRequest, RegisterRequest, User};

use crate::session::{landing_for, DASHBOARD_PATH};
use crate::validation::{self, ValidationError};
use crate::Navigation;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthFormError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("{0}")]
    Request(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        Ok(LoginRequest {
            email: validation::email(&self.email)?,
            password: validation::login_password(&self.password)?,
        })
    }

    /// Sign in. The caller stores the returned user and follows the navigation.
    pub async fn submit<A: LinkFreeApi>(&self, api: &A) -> Result<(User, Navigation), AuthFormError> {
        let request = self.validate()?;
        let user = api.login(request).await.map_err(|e| {
            tracing::error!("login failed: {e}");
            AuthFormError::Request(e.user_message("Invalid credentials or something is wrong"))
        })?;
        tracing::info!("signed in as {}", user.email);
        let target = landing_for(&user).to_string();
        Ok((user, Navigation::Push(target)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl SignupForm {
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let name = validation::name(&self.name)?;
        let email = validation::email(&self.email)?;
        let password = validation::new_password(&self.password, &self.confirm_password)?;
        if !self.accept_terms {
            return Err(ValidationError::TermsNotAccepted);
        }
        Ok(RegisterRequest {
            name,
            email,
            password,
        })
    }

    /// Create the account. The session cookie is set by the response, so the app
    /// reloads into the dashboard.
    pub async fn submit<A: LinkFreeApi>(&self, api: &A) -> Result<Navigation, AuthFormError> {
        let request = self.validate()?;
        api.register(request).await.map_err(|e| {
            tracing::error!("signup failed: {e}");
            AuthFormError::Request(e.user_message("An error occurred"))
        })?;
        Ok(Navigation::Hard(DASHBOARD_PATH.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Github,
}

impl OAuthProvider {
    pub fn as_str(self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Github => "github",
        }
    }

    /// The backend starts the OAuth dance at this URL.
    pub fn start_url(self, config: &ClientConfig) -> String {
        config.endpoint(&format!("/api/user/auth/{}", self.as_str()))
    }
}

/// The `error` parameter of a query string such as `?error=Email%20taken`.
pub fn error_banner(query: &str) -> Option<String> {
    let query = query.trim_start_matches('?');
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "error")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_routes_by_setup_state() {
        let form = LoginForm {
            email: "jane@example.com".to_string(),
            password: "secret".to_string(),
        };

        let api = FakeApi::new().reply(
            "login",
            json!({"id": "u1", "email": "jane@example.com", "isSetupComplete": false}),
        );
        let (user, navigation) = form.submit(&api).await.unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(navigation, Navigation::Push("/setup".to_string()));

        let api = FakeApi::new().reply(
            "login",
            json!({"id": "u2", "email": "jane@example.com", "isSetupComplete": true}),
        );
        let (user, navigation) = form.submit(&api).await.unwrap();
        assert_eq!(user.id, "u2");
        assert_eq!(navigation, Navigation::Push("/dashboard".to_string()));
    }

    #[tokio::test]
    async fn test_login_requires_password() {
        let api = FakeApi::new();
        let form = LoginForm {
            email: "jane@example.com".to_string(),
            password: String::new(),
        };

        assert_eq!(
            form.submit(&api).await.unwrap_err(),
            AuthFormError::Invalid(ValidationError::PasswordRequired)
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_signup_success_hard_navigates() {
        let api = FakeApi::new().reply("register", json!({"message": "created"}));
        let form = SignupForm {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "longenough".to_string(),
            confirm_password: "longenough".to_string(),
            accept_terms: true,
        };

        assert_eq!(
            form.submit(&api).await.unwrap(),
            Navigation::Hard("/dashboard".to_string())
        );
        assert_eq!(
            api.calls_to("register")[0].body,
            json!({"name": "Jane", "email": "jane@example.com", "password": "longenough"})
        );
    }

    #[test]
    fn test_signup_requires_terms() {
        let form = SignupForm {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "longenough".to_string(),
            confirm_password: "longenough".to_string(),
            accept_terms: false,
        };
        assert_eq!(form.validate(), Err(ValidationError::TermsNotAccepted));
    }

    #[test]
    fn test_oauth_urls() {
        let config = ClientConfig::new("https://api.example");
        assert_eq!(
            OAuthProvider::Github.start_url(&config),
            "https://api.example/api/user/auth/github"
        );
    }

    #[test]
    fn test_error_banner() {
        assert_eq!(
            error_banner("?error=Email%20already%20registered").as_deref(),
            Some("Email already registered")
        );
        assert_eq!(error_banner("?next=/x"), None);
        assert_eq!(error_banner(""), None);
    }
}
