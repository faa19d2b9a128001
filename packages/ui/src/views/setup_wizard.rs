use dioxus::prelude::*;
use forms::validation::BIO_MAX;
use forms::wizard::{SetupData, SetupWizard, Step, WizardError};

use crate::components::{Avatar, Button, ButtonVariant, FieldError, Input, Label, Textarea};
use crate::toast::{toast, use_toasts, ToastLevel, Toasts};
use crate::{first_image, follow, use_api};

/// Text field contents when `step` is shown.
fn field_value(data: &SetupData, step: Step) -> String {
    match step {
        Step::Username => data.username.clone(),
        Step::DisplayName => data.display_name.clone(),
        Step::Bio => data.bio.clone(),
        Step::ProfilePicture | Step::Complete => String::new(),
    }
}

/// Every failure shows under the field; failed requests also raise a toast.
fn report(toasts: &mut Signal<Toasts>, error: &mut Signal<Option<String>>, e: WizardError) {
    let message = e.to_string();
    if e.is_request_failure() {
        toast(toasts, ToastLevel::Error, "Error", &message);
    }
    error.set(Some(message));
}

/// `/setup`: username, display name, picture and bio, then one final request.
#[component]
pub fn SetupWizardView() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut toasts = use_toasts();
    let mut wizard = use_signal(SetupWizard::new);
    let mut input = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let next_api = api.clone();
    let on_next = move |_| {
        let api = next_api.clone();
        async move {
            if busy() {
                return;
            }
            busy.set(true);
            error.set(None);

            let mut next = wizard();
            let value = input();
            let step = next.step();
            let result = match step {
                Step::Username => next.submit_username(&api, &value).await,
                Step::DisplayName => next.submit_display_name(&value),
                Step::ProfilePicture => next.submit_picture(),
                Step::Bio => next.submit_bio(&value),
                Step::Complete => next.complete(&api).await.map(|navigation| {
                    toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Profile setup complete",
                        "Welcome to LinkFree! Let's get started.",
                    );
                    follow(nav, navigation);
                }),
            };

            match result {
                Ok(()) => {
                    if step == Step::Username {
                        let description = format!("@{} is yours", next.data().username);
                        toast(&mut toasts, ToastLevel::Success, "Username available", &description);
                    }
                    input.set(field_value(next.data(), next.step()));
                    wizard.set(next);
                }
                Err(e) => report(&mut toasts, &mut error, e),
            }
            busy.set(false);
        }
    };

    let on_skip = move |_| {
        let mut next = wizard();
        if next.skip() {
            error.set(None);
            input.set(field_value(next.data(), next.step()));
            wizard.set(next);
        }
    };

    let on_back = move |_| {
        let mut next = wizard();
        if next.back() {
            error.set(None);
            input.set(field_value(next.data(), next.step()));
            wizard.set(next);
        }
    };

    let on_file = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            let Some(file) = first_image(&evt).await else {
                return;
            };
            busy.set(true);
            error.set(None);
            let mut next = wizard();
            match next.upload_picture(&api, file).await {
                Ok(_) => wizard.set(next),
                Err(e) => report(&mut toasts, &mut error, e),
            }
            busy.set(false);
        }
    };

    let state = wizard();
    let step = state.step();
    let data = state.data().clone();
    let total = Step::INPUTS.len();
    let progress = (step.index().min(total) * 100) / total;
    let initials: String = data.display_name.chars().take(2).collect();

    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-gray-50 p-4",
            div { class: "card w-full max-w-md",
                div { class: "text-center mb-6",
                    span { class: "logo", "Link" span { class: "logo-accent", "Free" } }
                    h1 { class: "text-2xl font-semibold mt-4", "{step.title()}" }
                }
                div { class: "progress mb-6",
                    div { class: "progress-bar", style: "width: {progress}%" }
                }

                match step {
                    Step::Username => rsx! {
                        Label { html_for: "setup-username", "Username" }
                        div { class: "flex items-center gap-1 mt-1.5",
                            span { class: "view-muted", "linkfree.tech/" }
                            Input {
                                id: "setup-username",
                                class: "flex-1",
                                placeholder: "johnny123",
                                value: input(),
                                oninput: move |evt: FormEvent| input.set(evt.value()),
                            }
                        }
                    },
                    Step::DisplayName => rsx! {
                        Label { html_for: "setup-display-name", "Display name" }
                        Input {
                            id: "setup-display-name",
                            class: "w-full mt-1.5",
                            placeholder: "Your name",
                            value: input(),
                            oninput: move |evt: FormEvent| input.set(evt.value()),
                        }
                    },
                    Step::ProfilePicture => rsx! {
                        div { class: "flex flex-col items-center gap-4",
                            Avatar { src: Some(data.profile_pic.clone()), initials: initials.clone() }
                            label { class: "btn btn-outline",
                                if busy() { "Uploading..." } else { "Upload a photo" }
                                input {
                                    class: "hidden",
                                    r#type: "file",
                                    accept: "image/png, image/jpeg",
                                    disabled: busy(),
                                    onchange: on_file,
                                }
                            }
                            p { class: "view-muted", "JPEG or PNG, up to 5MB." }
                        }
                    },
                    Step::Bio => rsx! {
                        Label { html_for: "setup-bio", "Bio" }
                        Textarea {
                            id: "setup-bio",
                            class: "w-full mt-1.5",
                            placeholder: "Web Developer | Sharing my projects",
                            value: input(),
                            oninput: move |evt: FormEvent| input.set(evt.value()),
                        }
                        p { class: "view-muted text-right", "{input().chars().count()}/{BIO_MAX}" }
                    },
                    Step::Complete => rsx! {
                        div { class: "flex flex-col items-center gap-3",
                            Avatar { src: Some(data.profile_pic.clone()), initials: initials.clone() }
                            p { class: "text-lg font-medium", "{data.display_name}" }
                            p { class: "view-muted", "@{data.username}" }
                            if !data.bio.is_empty() {
                                p { class: "text-center", "{data.bio}" }
                            }
                            p { class: "view-muted text-sm",
                                "You can update these details later in your profile settings"
                            }
                        }
                    },
                }

                FieldError { message: error() }

                div { class: "flex justify-between gap-2 mt-6",
                    if step.previous().is_some() {
                        Button { variant: ButtonVariant::Ghost, disabled: busy(), onclick: on_back, "Back" }
                    } else {
                        span {}
                    }
                    div { class: "flex gap-2",
                        if step.is_optional() {
                            Button { variant: ButtonVariant::Outline, disabled: busy(), onclick: on_skip, "Skip" }
                        }
                        Button { disabled: busy(), onclick: on_next,
                            if step == Step::Complete { "Complete Setup" } else { "Next" }
                        }
                    }
                }
            }
        }
    }
}
