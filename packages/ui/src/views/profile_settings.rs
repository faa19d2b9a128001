use dioxus::prelude::*;
use forms::profile::{ProfileError, ProfileForm};
use forms::validation::BIO_MAX;

use crate::components::{Avatar, Button, FieldError, Input, Label, Spinner, Textarea};
use crate::toast::{toast, use_toasts, ToastLevel};
use crate::{first_image, use_api, use_auth};

/// `/dashboard/profile`: display name, bio and picture. The username is read-only.
#[component]
pub fn ProfileSettingsView() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut toasts = use_toasts();
    let mut form = use_signal(|| Option::<ProfileForm>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut uploading = use_signal(|| false);
    let mut saving = use_signal(|| false);

    let load_api = api.clone();
    let _loader = use_resource(move || {
        let api = load_api.clone();
        async move {
            match ProfileForm::load(&api).await {
                Ok(loaded) => form.set(Some(loaded)),
                Err(_) => {
                    // fall back to what the session already knows
                    let known = auth.read().user().map(ProfileForm::from_user);
                    form.set(Some(known.unwrap_or_default()));
                    toast(&mut toasts, ToastLevel::Error, "Error", "Failed to load profile data");
                }
            }
        }
    });

    let upload_api = api.clone();
    let on_file = move |evt: FormEvent| {
        let api = upload_api.clone();
        async move {
            let Some(file) = first_image(&evt).await else {
                return;
            };
            let Some(mut next) = form() else {
                return;
            };
            uploading.set(true);
            match next.upload_picture(&api, file).await {
                Ok(()) => {
                    form.set(Some(next));
                    toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Image uploaded",
                        "Profile picture uploaded successfully!",
                    );
                }
                Err(e) => toast(&mut toasts, ToastLevel::Error, "Upload failed", &e.to_string()),
            }
            uploading.set(false);
        }
    };

    let on_save = move |_| {
        let api = api.clone();
        async move {
            let Some(mut next) = form() else {
                return;
            };
            saving.set(true);
            error.set(None);
            match next.save(&api).await {
                Ok(saved) => {
                    let merged = auth.read().user().map(|known| next.merged_into(known));
                    auth.write().set_user(Some(merged.unwrap_or(saved)));
                    form.set(Some(next));
                    toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Profile updated",
                        "Your profile has been updated successfully!",
                    );
                }
                Err(ProfileError::Invalid(e)) => error.set(Some(e.to_string())),
                Err(e) => toast(&mut toasts, ToastLevel::Error, "Error", &e.to_string()),
            }
            saving.set(false);
        }
    };

    let Some(current) = form() else {
        return rsx! {
            Spinner {}
        };
    };

    rsx! {
        div { class: "view-page max-w-3xl mx-auto w-full",
            h1 { class: "view-title", "Profile Settings" }

            section { class: "card",
                h2 { class: "view-section-title", "Basic Info" }
                p { class: "view-muted mb-6", "Update your profile details" }

                div { class: "flex items-center gap-6 mb-6",
                    Avatar {
                        src: Some(current.profile_pic.clone()),
                        initials: current.initials(),
                        class: "w-20 h-20",
                    }
                    div {
                        Label { "Profile Picture" }
                        label { class: "btn btn-outline mt-1.5",
                            if uploading() { "Uploading..." } else { "Upload new photo" }
                            input {
                                class: "hidden",
                                r#type: "file",
                                accept: "image/png, image/jpeg, image/gif",
                                disabled: uploading(),
                                onchange: on_file,
                            }
                        }
                        p { class: "view-muted text-sm", "JPG, PNG or GIF, up to 2MB." }
                    }
                }

                div { class: "mb-4",
                    Label { html_for: "profile-username", "Username" }
                    Input {
                        id: "profile-username",
                        class: "w-full mt-1.5",
                        placeholder: "yourusername",
                        value: current.username.clone(),
                        disabled: true,
                    }
                }
                div { class: "mb-4",
                    Label { html_for: "profile-display-name", "Display Name" }
                    Input {
                        id: "profile-display-name",
                        class: "w-full mt-1.5",
                        placeholder: "Your Name",
                        value: current.display_name.clone(),
                        oninput: move |evt: FormEvent| {
                            if let Some(f) = form.write().as_mut() {
                                f.display_name = evt.value();
                            }
                        },
                    }
                }
                div { class: "mb-4",
                    Label { html_for: "profile-bio", "Bio" }
                    Textarea {
                        id: "profile-bio",
                        class: "w-full mt-1.5",
                        placeholder: "Tell visitors a little about yourself...",
                        value: current.bio.clone(),
                        oninput: move |evt: FormEvent| {
                            if let Some(f) = form.write().as_mut() {
                                f.bio = evt.value();
                            }
                        },
                    }
                    p { class: "view-muted text-right", "{current.bio.chars().count()}/{BIO_MAX}" }
                }

                FieldError { message: error() }

                Button { disabled: saving() || uploading(), onclick: on_save,
                    if saving() { "Saving..." } else { "Save Changes" }
                }
            }
        }
    }
}
