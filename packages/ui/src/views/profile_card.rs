use api::SocialLink;
use dioxus::prelude::*;
use forms::background::Background;

use crate::components::Avatar;
use crate::{social_href, SocialIcon};

/// One button on a profile card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLink {
    pub title: String,
    pub url: String,
}

/// A public page as visitors see it. Used full-size on `/:username` and shrunk
/// in the editor preview.
#[component]
pub fn ProfileCard(
    display_name: String,
    #[props(default)] username: String,
    avatar: Option<String>,
    initials: String,
    bio: String,
    background: Background,
    links: Vec<CardLink>,
    socials: Vec<SocialLink>,
    on_link: EventHandler<String>,
    #[props(default)] compact: bool,
) -> Element {
    let size = if compact { "min-h-96 rounded-lg" } else { "min-h-screen" };
    let avatar_size = if compact { "w-16 h-16" } else { "w-24 h-24" };

    rsx! {
        div {
            class: "profile-card {size} {background.class()}",
            style: background.style().unwrap_or_default(),
            Avatar { src: avatar, initials, class: "{avatar_size} mt-8 mb-2" }
            h3 { class: "font-bold text-lg", "{display_name}" }
            if !username.is_empty() {
                p { class: "text-sm text-gray-700", "@{username}" }
            }
            if !bio.is_empty() {
                p { class: "text-base text-center text-gray-600 mb-6 px-4", "{bio}" }
            }
            div { class: "w-full max-w-md px-4 space-y-3 mb-4",
                for (i, link) in links.into_iter().enumerate() {
                    button {
                        key: "{i}",
                        class: "profile-link",
                        onclick: move |_| on_link.call(link.url.clone()),
                        "{link.title}"
                    }
                }
            }
            div { class: "flex gap-3 mb-6",
                for social in socials {
                    a {
                        key: "{social.platform.as_str()}",
                        class: "profile-social",
                        href: social_href(social.platform, &social.url),
                        target: "_blank",
                        rel: "noopener noreferrer",
                        title: social.platform.label(),
                        SocialIcon { platform: social.platform }
                    }
                }
            }
        }
    }
}
