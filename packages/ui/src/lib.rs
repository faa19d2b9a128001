//! This crate contains all shared UI for the workspace.
//!
//! Components read the backend client and the session from context; the `web`
//! crate wires them to its router.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod brands {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
}

pub mod dialogs;
pub mod views;

pub const LINKFREE_CSS: Asset = asset!("/assets/linkfree.css");

mod auth;
pub use auth::{use_api, use_auth, use_config, AuthProvider, LogoutButton, ProtectedRoute};

pub mod toast;
pub use toast::{toast, use_toasts, ToastLevel, ToastProvider};

pub mod navigation;
pub use navigation::{follow, hard_navigate};

mod file_input;
pub use file_input::first_image;

mod social_icon;
pub use social_icon::{social_href, SocialIcon};

mod visibility_toggle;
pub use visibility_toggle::VisibilitySwitch;
