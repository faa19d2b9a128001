use dioxus::prelude::*;
use forms::share::ShareLinks;

use super::ModalOverlay;
use crate::components::{Button, ButtonVariant};
use crate::icons::{FaCheck, FaCopy, FaLink, FaShareNodes, FaUpRightFromSquare};
use crate::navigation::{copy_to_clipboard, open_in_new_tab};
use crate::toast::{toast, use_toasts, ToastLevel};
use crate::Icon;

/// Shown once a new page has been published.
#[component]
pub fn SuccessCard(
    links: ShareLinks,
    on_share: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let mut toasts = use_toasts();
    let url = links.profile_url().to_string();

    let copy_url = url.clone();
    let on_copy = move |_| {
        let copy_url = copy_url.clone();
        async move {
            if copy_to_clipboard(&copy_url).await {
                toast(
                    &mut toasts,
                    ToastLevel::Success,
                    "Link copied!",
                    "Page link has been copied to clipboard.",
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
    let open_url = url.clone();

    rsx! {
        ModalOverlay { title: "", on_close: move |_| on_close.call(()),
            div { class: "flex flex-col items-center mb-4",
                div { class: "bg-green-100 rounded-full p-2 mb-2",
                    Icon { icon: FaCheck, width: 32, height: 32, fill: "#16a34a" }
                }
                h2 { class: "text-xl font-semibold", "Page Published!" }
            }
            p { class: "view-muted text-center mb-4",
                "Your Page is now live and can be accessed at this link:"
            }
            div { class: "flex items-center justify-between p-3 bg-gray-100 rounded-md mb-6",
                div { class: "flex items-center gap-2 overflow-hidden",
                    Icon { icon: FaLink, width: 14, height: 14 }
                    p { class: "text-sm truncate", "{url}" }
                }
                Button { variant: ButtonVariant::Ghost, title: "Copy", onclick: on_copy,
                    Icon { icon: FaCopy, width: 14, height: 14 }
                }
            }
            div { class: "flex flex-col gap-3",
                Button { class: "w-full", onclick: move |_| open_in_new_tab(&open_url),
                    Icon { icon: FaUpRightFromSquare, width: 14, height: 14 }
                    "View page"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    class: "w-full",
                    onclick: move |_| on_share.call(()),
                    Icon { icon: FaShareNodes, width: 14, height: 14 }
                    "Share Profile"
                }
            }
        }
    }
}
