use dioxus::prelude::*;
use forms::auth_forms::{error_banner, AuthFormError, LoginForm, OAuthProvider};
use forms::Navigation;

use crate::brands::{FaGithub, FaGoogle};
use crate::components::{Button, ButtonVariant, FieldError, Input, Label};
use crate::navigation::location_search;
use crate::toast::{toast, use_toasts, ToastLevel};
use crate::{follow, hard_navigate, use_api, use_auth, use_config, Icon};

/// Buttons that hand the browser to the backend's OAuth flow.
#[component]
pub fn OAuthButtons() -> Element {
    let config = use_config();
    let google = OAuthProvider::Google.start_url(&config);
    let github = OAuthProvider::Github.start_url(&config);

    rsx! {
        div { class: "flex flex-col gap-2",
            Button {
                variant: ButtonVariant::Outline,
                class: "w-full",
                onclick: move |_| hard_navigate(&google),
                Icon { icon: FaGoogle, width: 16, height: 16 }
                "Continue with Google"
            }
            Button {
                variant: ButtonVariant::Outline,
                class: "w-full",
                onclick: move |_| hard_navigate(&github),
                Icon { icon: FaGithub, width: 16, height: 16 }
                "Continue with GitHub"
            }
        }
        div { class: "divider", span { "or" } }
    }
}

/// `/login`. `from` is the gated path the visitor was sent away from.
#[component]
pub fn LoginView(#[props(default)] from: String) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut auth = use_auth();
    let mut toasts = use_toasts();
    let mut form = use_signal(LoginForm::default);
    let mut error = use_signal(|| error_banner(&location_search()));
    let mut busy = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let from = from.clone();
        async move {
            busy.set(true);
            error.set(None);
            match form().submit(&api).await {
                Ok((user, navigation)) => {
                    let setup_done = user.is_setup_complete;
                    auth.write().set_user(Some(user));
                    toast(&mut toasts, ToastLevel::Success, "Welcome back", "signed in successfully");
                    let navigation = if setup_done && from.starts_with('/') {
                        Navigation::Push(from)
                    } else {
                        navigation
                    };
                    follow(nav, navigation);
                }
                Err(AuthFormError::Invalid(e)) => error.set(Some(e.to_string())),
                Err(e) => toast(&mut toasts, ToastLevel::Error, "Login failed", &e.to_string()),
            }
            busy.set(false);
        }
    };

    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-gray-50 p-4",
            div { class: "card w-full max-w-md",
                Link { to: "/", class: "logo block text-center mb-6",
                    "Link"
                    span { class: "logo-accent", "Free" }
                }
                h1 { class: "text-2xl font-semibold text-center mb-6", "Sign in to your account" }
                OAuthButtons {}
                form { onsubmit: on_submit,
                    div { class: "mb-4",
                        Label { html_for: "login-email", "Email" }
                        Input {
                            id: "login-email",
                            class: "w-full mt-1.5",
                            r#type: "email",
                            placeholder: "your.email@example.com",
                            value: form.read().email.clone(),
                            oninput: move |evt: FormEvent| form.write().email = evt.value(),
                        }
                    }
                    div { class: "mb-4",
                        Label { html_for: "login-password", "Password" }
                        Input {
                            id: "login-password",
                            class: "w-full mt-1.5",
                            r#type: "password",
                            placeholder: "••••••••",
                            value: form.read().password.clone(),
                            oninput: move |evt: FormEvent| form.write().password = evt.value(),
                        }
                    }
                    FieldError { message: error() }
                    Button { r#type: "submit", class: "w-full mt-2", disabled: busy(),
                        if busy() { "Signing in..." } else { "Sign in" }
                    }
                }
                p { class: "view-muted text-center mt-6",
                    "Don't have an account? "
                    Link { to: "/signup", class: "text-primary", "Sign up" }
                }
            }
        }
    }
}
