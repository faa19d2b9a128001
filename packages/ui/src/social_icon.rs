use api::Platform;
use dioxus::prelude::*;

use crate::brands::{FaGithub, FaInstagram, FaLinkedin, FaTwitter, FaWhatsapp};
use crate::icons::FaEnvelope;
use crate::Icon;

/// The brand icon for a social platform.
#[component]
pub fn SocialIcon(platform: Platform, #[props(default = 20)] size: u32) -> Element {
    match platform {
        Platform::Whatsapp => rsx! { Icon { icon: FaWhatsapp, width: size, height: size } },
        Platform::Mail => rsx! { Icon { icon: FaEnvelope, width: size, height: size } },
        Platform::Linkedin => rsx! { Icon { icon: FaLinkedin, width: size, height: size } },
        Platform::Github => rsx! { Icon { icon: FaGithub, width: size, height: size } },
        Platform::Twitter => rsx! { Icon { icon: FaTwitter, width: size, height: size } },
        Platform::Instagram => rsx! { Icon { icon: FaInstagram, width: size, height: size } },
    }
}

/// `href` for a social link; mail addresses get a `mailto:` scheme.
pub fn social_href(platform: Platform, url: &str) -> String {
    match platform {
        Platform::Mail if !url.starts_with("mailto:") => format!("mailto:{url}"),
        _ => url.to_string(),
    }
}
