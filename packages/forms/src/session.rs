//! # Current-user state and the route gate
//!
//! The app asks the backend once, at load, whether the session cookie belongs to a
//! user. Until that answer arrives the state is [`AuthState::Loading`]; afterwards
//! it is [`AuthState::Ready`] with or without a user. There is no polling: the only
//! later transitions are login, logout and profile updates, all of which hand a
//! fresh [`User`] (or `None`) to [`AuthState::set_user`].
//!
//! [`AuthState::access`] decides what a gated route shows:
//!
//! | State | Path | Outcome |
//! |-------|------|---------|
//! | `Loading` | any | [`Access::Pending`] (render a spinner, fetch nothing) |
//! | `Ready(None)` | any | redirect to `/login`, remembering `from` |
//! | setup incomplete | not `/setup` | redirect to `/setup` |
//! | setup complete | `/setup` | redirect to `/dashboard` |
//! | otherwise | | [`Access::Granted`] |

use std::future::Future;

use api::{ApiError, LinkFreeApi, User};

pub const LOGIN_PATH: &str = "/login";
pub const SETUP_PATH: &str = "/setup";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Loading,
    Ready(Option<User>),
}

/// What a gated route should do for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Pending,
    Granted,
    Redirect { to: String, from: Option<String> },
}

impl AuthState {
    /// Ask the backend who the session belongs to. Any failure counts as signed out.
    pub async fn load<A: LinkFreeApi>(api: &A) -> AuthState {
        match api.is_authenticated().await {
            Ok(status) => {
                let user = status.into_user();
                tracing::info!("auth check done, signed in: {}", user.is_some());
                AuthState::Ready(user)
            }
            Err(e) => {
                tracing::error!("auth check failed: {e}");
                AuthState::Ready(None)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Loading)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Ready(user) => user.as_ref(),
            AuthState::Loading => None,
        }
    }

    pub fn set_user(&mut self, user: Option<User>) {
        *self = AuthState::Ready(user);
    }

    pub fn access(&self, path: &str) -> Access {
        let user = match self {
            AuthState::Loading => return Access::Pending,
            AuthState::Ready(None) => {
                return Access::Redirect {
                    to: LOGIN_PATH.to_string(),
                    from: Some(path.to_string()),
                }
            }
            AuthState::Ready(Some(user)) => user,
        };

        let on_setup = path == SETUP_PATH;
        if !user.is_setup_complete && !on_setup {
            Access::Redirect {
                to: SETUP_PATH.to_string(),
                from: None,
            }
        } else if user.is_setup_complete && on_setup {
            Access::Redirect {
                to: DASHBOARD_PATH.to_string(),
                from: None,
            }
        } else {
            Access::Granted
        }
    }
}

/// Where to go after a successful login.
pub fn landing_for(user: &User) -> &'static str {
    if user.is_setup_complete {
        DASHBOARD_PATH
    } else {
        SETUP_PATH
    }
}

/// Run `fetch` only when `path` is accessible; otherwise hand back the gate's verdict.
pub async fn guarded<T, F, Fut>(state: &AuthState, path: &str, fetch: F) -> Result<T, Access>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    match state.access(path) {
        Access::Granted => Ok(fetch().await),
        other => Err(other),
    }
}

/// End the session. The local state is cleared even if the request fails.
pub async fn logout<A: LinkFreeApi>(api: &A, state: &mut AuthState) -> Result<(), ApiError> {
    let result = api.logout().await;
    if let Err(e) = &result {
        tracing::error!("logout failed: {e}");
    }
    state.set_user(None);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeApi;
    use serde_json::json;

    fn user(setup_complete: bool) -> User {
        User {
            id: "u1".to_string(),
            email: "jane@example.com".to_string(),
            is_setup_complete: setup_complete,
            ..Default::default()
        }
    }

    #[test]
    fn test_loading_is_pending() {
        assert_eq!(AuthState::Loading.access("/dashboard"), Access::Pending);
    }

    #[test]
    fn test_setup_redirects() {
        let incomplete = AuthState::Ready(Some(user(false)));
        assert_eq!(
            incomplete.access("/dashboard/pages"),
            Access::Redirect { to: "/setup".to_string(), from: None }
        );
        assert_eq!(incomplete.access("/setup"), Access::Granted);

        let complete = AuthState::Ready(Some(user(true)));
        assert_eq!(
            complete.access("/setup"),
            Access::Redirect { to: "/dashboard".to_string(), from: None }
        );
        assert_eq!(complete.access("/edit-page/p1"), Access::Granted);
    }

    #[tokio::test]
    async fn test_unauthenticated_dashboard_redirects_without_fetching() {
        let api = FakeApi::new().reply("is_authenticated", json!({"isAuthenticated": false}));
        let state = AuthState::load(&api).await;

        let outcome = guarded(&state, "/dashboard", || api.analytics_overview()).await;

        assert_eq!(
            outcome.unwrap_err(),
            Access::Redirect {
                to: "/login".to_string(),
                from: Some("/dashboard".to_string())
            }
        );
        assert_eq!(api.calls().len(), 1);
        assert!(api.calls_to("analytics_overview").is_empty());
    }

    #[tokio::test]
    async fn test_failed_auth_check_is_signed_out() {
        let api = FakeApi::new().fail("is_authenticated", 500, "");
        let state = AuthState::load(&api).await;
        assert_eq!(state, AuthState::Ready(None));
    }

    #[tokio::test]
    async fn test_authenticated_flag_without_user_is_signed_out() {
        let api = FakeApi::new().reply(
            "is_authenticated",
            json!({"isAuthenticated": false, "user": {"id": "u1"}}),
        );
        assert_eq!(AuthState::load(&api).await.user(), None);
    }

    #[tokio::test]
    async fn test_logout_clears_user_even_on_failure() {
        let api = FakeApi::new().fail("logout", 500, "");
        let mut state = AuthState::Ready(Some(user(true)));

        assert!(logout(&api, &mut state).await.is_err());
        assert_eq!(state, AuthState::Ready(None));
    }
}
