use dioxus::prelude::*;
use forms::share::ShareLinks;

use super::ModalOverlay;
use crate::brands::{FaFacebook, FaTwitter};
use crate::components::{Button, ButtonVariant, Input};
use crate::icons::{FaCopy, FaUpRightFromSquare};
use crate::navigation::{copy_to_clipboard, open_in_new_tab};
use crate::toast::{toast, use_toasts, ToastLevel};
use crate::Icon;

/// Copy or share the public link of a page.
#[component]
pub fn ShareDialog(links: ShareLinks, on_close: EventHandler<()>) -> Element {
    let mut toasts = use_toasts();
    let mut copied = use_signal(|| false);
    let profile = links.profile_url().to_string();

    let copy_url = profile.clone();
    let on_copy = move |_| {
        let copy_url = copy_url.clone();
        async move {
            if copy_to_clipboard(&copy_url).await {
                copied.set(true);
                toast(
                    &mut toasts,
                    ToastLevel::Success,
                    "Link copied",
                    "Profile link has been copied to clipboard",
                );
            } else {
                toast(
                    &mut toasts,
                    ToastLevel::Error,
                    "Failed to copy",
                    "Please try copying the link manually.",
                );
            }
        }
    };

    let twitter = links.twitter();
    let facebook = links.facebook();
    let preview = profile.clone();

    rsx! {
        ModalOverlay { title: "Share your LinkFree", on_close: move |_| on_close.call(()),
            p { class: "view-muted mb-4", "Get more visitors by sharing your LinkFree everywhere." }
            div { class: "flex gap-2 mb-4",
                Input { class: "flex-1", value: profile, disabled: true }
                Button { variant: ButtonVariant::Outline, onclick: on_copy,
                    if copied() { "Copied" } else { "Copy" }
                    Icon { icon: FaCopy, width: 14, height: 14 }
                }
            }
            h3 { class: "text-sm font-medium mb-2", "Share on social media" }
            div { class: "flex flex-wrap gap-2",
                Button {
                    variant: ButtonVariant::Outline,
                    class: "flex-1",
                    onclick: move |_| open_in_new_tab(&twitter),
                    Icon { icon: FaTwitter, width: 14, height: 14 }
                    "Twitter"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    class: "flex-1",
                    onclick: move |_| open_in_new_tab(&facebook),
                    Icon { icon: FaFacebook, width: 14, height: 14 }
                    "Facebook"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    class: "flex-1",
                    onclick: move |_| open_in_new_tab(&preview),
                    Icon { icon: FaUpRightFromSquare, width: 14, height: 14 }
                    "Preview"
                }
            }
        }
    }
}
