use api::Platform;
use dioxus::prelude::*;
use forms::social::SocialLinks;

use super::ModalOverlay;
use crate::components::{Button, ButtonVariant, Input};
use crate::SocialIcon;

/// Edit the social icons of a page. Every edit is handed to `on_change` right away;
/// nothing is sent until the page is saved.
#[component]
pub fn SocialLinksDialog(
    links: SocialLinks,
    on_change: EventHandler<SocialLinks>,
    on_close: EventHandler<()>,
) -> Element {
    let unused = links.unused_platforms();
    let rows: Vec<(Platform, String)> = links
        .iter()
        .map(|link| (link.platform, link.url.clone()))
        .collect();

    let edit_links = links.clone();
    let update_url = move |platform: Platform, url: String| {
        let mut next = edit_links.clone();
        next.set_url(platform, url);
        on_change.call(next);
    };
    let remove_links = links.clone();
    let remove = move |platform: Platform| {
        let mut next = remove_links.clone();
        if next.remove(platform) {
            on_change.call(next);
        }
    };
    let add_links = links.clone();
    let add = move |platform: Platform| {
        let mut next = add_links.clone();
        if next.add(platform) {
            on_change.call(next);
        }
    };

    rsx! {
        ModalOverlay { title: "Social Icons", on_close: move |_| on_close.call(()),
            p { class: "view-muted mb-4",
                "Add your social profiles, email and more as linked icons on your LinkFree."
            }
            div { class: "space-y-4",
                for (platform, url) in rows {
                    div { key: "{platform.as_str()}", class: "border rounded-md p-4",
                        div { class: "flex justify-between items-center mb-2",
                            div { class: "flex items-center gap-2",
                                SocialIcon { platform }
                                span { class: "font-medium", "{platform.label()}" }
                            }
                            button {
                                class: "text-red-500 hover:text-red-700",
                                title: "Remove",
                                onclick: {
                                    let remove = remove.clone();
                                    move |_| remove(platform)
                                },
                                "×"
                            }
                        }
                        Input {
                            class: "w-full text-sm",
                            value: url,
                            placeholder: "Enter your {platform.as_str()} URL",
                            oninput: {
                                let update_url = update_url.clone();
                                move |evt: FormEvent| update_url(platform, evt.value())
                            },
                        }
                    }
                }
            }
            if !unused.is_empty() {
                div { class: "mt-6",
                    p { class: "text-sm font-medium mb-2", "Add social icon" }
                    div { class: "flex flex-wrap gap-2",
                        for platform in unused {
                            Button {
                                key: "{platform.as_str()}",
                                variant: ButtonVariant::Outline,
                                class: "flex items-center gap-2",
                                onclick: {
                                    let add = add.clone();
                                    move |_| add(platform)
                                },
                                SocialIcon { platform, size: 16 }
                                span { "{platform.label()}" }
                            }
                        }
                    }
                }
            }
            div { class: "flex justify-end mt-6",
                Button { onclick: move |_| on_close.call(()), "Done" }
            }
        }
    }
}
