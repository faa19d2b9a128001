use dioxus::prelude::*;
use forms::auth_forms::{error_banner, AuthFormError, SignupForm};

use super::login::OAuthButtons;
use crate::components::{Button, FieldError, Input, Label};
use crate::navigation::location_search;
use crate::toast::{toast, use_toasts, ToastLevel};
use crate::{follow, use_api};

/// `/signup`. An `?error=` left by a failed OAuth attempt is shown above the form.
#[component]
pub fn SignupView() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut toasts = use_toasts();
    let mut form = use_signal(SignupForm::default);
    let banner = use_signal(|| error_banner(&location_search()));
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            busy.set(true);
            error.set(None);
            match form().submit(&api).await {
                Ok(navigation) => {
                    toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Account created!",
                        "We've created your account for you.",
                    );
                    follow(nav, navigation);
                }
                Err(AuthFormError::Invalid(e)) => error.set(Some(e.to_string())),
                Err(e) => toast(&mut toasts, ToastLevel::Error, "Signup failed", &e.to_string()),
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
                h1 { class: "text-2xl font-semibold text-center mb-6", "Create your account" }
                if let Some(message) = banner() {
                    div { class: "banner-error mb-4", "{message}" }
                }
                OAuthButtons {}
                form { onsubmit: on_submit,
                    div { class: "mb-4",
                        Label { html_for: "signup-name", "Name" }
                        Input {
                            id: "signup-name",
                            class: "w-full mt-1.5",
                            placeholder: "John Doe",
                            value: form.read().name.clone(),
                            oninput: move |evt: FormEvent| form.write().name = evt.value(),
                        }
                    }
                    div { class: "mb-4",
                        Label { html_for: "signup-email", "Email" }
                        Input {
                            id: "signup-email",
                            class: "w-full mt-1.5",
                            r#type: "email",
                            placeholder: "your.email@example.com",
                            value: form.read().email.clone(),
                            oninput: move |evt: FormEvent| form.write().email = evt.value(),
                        }
                    }
                    div { class: "mb-4",
                        Label { html_for: "signup-password", "Password" }
                        Input {
                            id: "signup-password",
                            class: "w-full mt-1.5",
                            r#type: "password",
                            placeholder: "••••••••",
                            value: form.read().password.clone(),
                            oninput: move |evt: FormEvent| form.write().password = evt.value(),
                        }
                    }
                    div { class: "mb-4",
                        Label { html_for: "signup-confirm", "Confirm password" }
                        Input {
                            id: "signup-confirm",
                            class: "w-full mt-1.5",
                            r#type: "password",
                            placeholder: "••••••••",
                            value: form.read().confirm_password.clone(),
                            oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                        }
                    }
                    label { class: "flex items-center gap-2 mb-4 text-sm",
                        input {
                            r#type: "checkbox",
                            checked: form.read().accept_terms,
                            onchange: move |evt: FormEvent| form.write().accept_terms = evt.checked(),
                        }
                        "I agree to the terms of service and privacy policy"
                    }
                    FieldError { message: error() }
                    Button { r#type: "submit", class: "w-full mt-2", disabled: busy(),
                        if busy() { "Creating account..." } else { "Create account" }
                    }
                }
                p { class: "view-muted text-center mt-6",
                    "Already have an account? "
                    Link { to: "/login", class: "text-primary", "Sign in" }
                }
            }
        }
    }
}
