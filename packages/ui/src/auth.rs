//! Authentication context and hooks for the UI.

use api::{ClientConfig, HttpClient};
use dioxus::prelude::*;
use forms::session::{self, Access, AuthState};

use crate::components::Spinner;
use crate::navigation::hard_navigate;

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The backend client provided by [`AuthProvider`].
pub fn use_api() -> HttpClient {
    use_context::<HttpClient>()
}

pub fn use_config() -> ClientConfig {
    use_api().config().clone()
}

/// Provider component that manages authentication state.
/// Asks the backend once who the session belongs to; there is no polling.
#[component]
pub fn AuthProvider(client: HttpClient, children: Element) -> Element {
    let client = use_context_provider(|| client);
    let mut auth_state = use_context_provider(|| Signal::new(AuthState::Loading));

    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            let state = AuthState::load(&client).await;
            auth_state.set(state);
        }
    });

    rsx! {
        {children}
    }
}

/// Renders `children` only once the session check allows `path`; otherwise
/// redirects (to `/login` with the attempted path, or to/from `/setup`).
#[component]
pub fn ProtectedRoute(path: String, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let access = auth.read().access(&path);
    match access {
        Access::Pending => rsx! {
            Spinner {}
        },
        Access::Granted => rsx! {
            {children}
        },
        Access::Redirect { to, from } => {
            let target = match from {
                Some(from) => format!("{to}?from={from}"),
                None => to,
            };
            tracing::debug!("redirecting {path} to {target}");
            nav.replace(target);
            rsx! {}
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let api = use_api();

    let onclick = move |_| {
        let api = api.clone();
        async move {
            let mut state = auth_state();
            // the local session is cleared whatever the backend answers
            let _ = session::logout(&api, &mut state).await;
            auth_state.set(state);
            hard_navigate(session::LOGIN_PATH);
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
