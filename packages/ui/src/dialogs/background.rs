use dioxus::prelude::*;
use forms::background::BackgroundChoices;

use super::ModalOverlay;
use crate::icons::{FaCheck, FaUpload};
use crate::toast::{toast, use_toasts, ToastLevel};
use crate::{first_image, use_api, Icon};

/// Pick a colour preset or an image, or upload a new image.
#[component]
pub fn BackgroundDialog(
    current: String,
    on_change: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut toasts = use_toasts();
    let mut choices = use_signal(BackgroundChoices::new);
    let mut uploading = use_signal(|| false);

    let on_file = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            let Some(file) = first_image(&evt).await else {
                return;
            };
            uploading.set(true);
            let mut next = choices();
            match next.upload(&api, file).await {
                Ok(url) => {
                    choices.set(next);
                    on_change.call(url);
                    toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Success",
                        "Background image uploaded successfully",
                    );
                }
                Err(e) => {
                    toast(&mut toasts, ToastLevel::Error, "Error", &e.to_string());
                }
            }
            uploading.set(false);
        }
    };

    let options = choices.read().options().to_vec();

    rsx! {
        ModalOverlay { title: "Choose Background", on_close: move |_| on_close.call(()),
            p { class: "view-muted mb-4", "Select a background color or upload your own image." }
            div { class: "grid grid-cols-3 gap-3 mb-4",
                for option in options {
                    div {
                        key: "{option.id}",
                        class: "bg-swatch {option.background().class()}",
                        class: if option.value == current { "ring-2 ring-primary" },
                        style: option.background().style().unwrap_or_default(),
                        onclick: {
                            let value = option.value.clone();
                            move |_| on_change.call(value.clone())
                        },
                        if option.value == current {
                            div { class: "absolute inset-0 flex items-center justify-center bg-black/10",
                                Icon { icon: FaCheck, width: 16, height: 16, fill: "white" }
                            }
                        }
                    }
                }
            }
            div { class: "flex flex-col gap-2",
                p { class: "text-sm font-medium", "Upload your own" }
                label { class: "btn btn-outline w-fit",
                    Icon { icon: FaUpload, width: 14, height: 14 }
                    if uploading() { "Uploading..." } else { "Upload Image" }
                    input {
                        class: "hidden",
                        r#type: "file",
                        accept: "image/*",
                        disabled: uploading(),
                        onchange: on_file,
                    }
                }
            }
        }
    }
}
