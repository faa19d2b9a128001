use api::LinkFreeApi;
use dioxus::prelude::*;
use forms::background::Background;

use super::profile_card::{CardLink, ProfileCard};
use super::NotFoundView;
use crate::components::Spinner;
use crate::navigation::open_in_new_tab;
use crate::toast::{toast, use_toasts, ToastLevel};
use crate::use_api;

/// `/:username` and `/:username/:slug`, the page visitors see.
#[component]
pub fn PortfolioView(username: String, slug: Option<String>) -> Element {
    let api = use_api();
    let mut toasts = use_toasts();

    let fetch_api = api.clone();
    let fetch_username = username.clone();
    let fetch_slug = slug.clone();
    let portfolio = use_resource(move || {
        let api = fetch_api.clone();
        let username = fetch_username.clone();
        let slug = fetch_slug.clone();
        async move {
            api.portfolio(&username, slug.as_deref())
                .await
                .inspect_err(|e| tracing::error!("failed to load portfolio of {username}: {e}"))
                .map_err(|e| e.user_message("Failed to load profile data"))
        }
    });

    // Opening the link never waits for the click to be counted.
    let on_link = move |url: String| {
        open_in_new_tab(&url);
        let api = api.clone();
        let username = username.clone();
        let slug = slug.clone();
        spawn(async move {
            if let Err(e) = api.track_link(&username, slug.as_deref(), &url).await {
                tracing::warn!("tracking click on {url} failed: {e}");
                toast(
                    &mut toasts,
                    ToastLevel::Error,
                    "Error",
                    "Failed to track link click, but redirecting anyway.",
                );
            }
        });
    };

    let data = match portfolio() {
        None => {
            return rsx! {
                div { class: "flex items-center justify-center min-h-screen",
                    Spinner { label: "Loading profile..." }
                }
            }
        }
        Some(Err(message)) => {
            tracing::debug!("showing not found: {message}");
            return rsx! {
                NotFoundView {}
            };
        }
        Some(Ok(data)) => data,
    };

    let links: Vec<CardLink> = data
        .links
        .iter()
        .map(|l| CardLink {
            title: l.title.clone(),
            url: l.url.clone(),
        })
        .collect();

    rsx! {
        ProfileCard {
            display_name: data.display_name.clone(),
            username: data.username.clone(),
            avatar: data.profile_pic.clone(),
            initials: data.initials(),
            bio: data.bio().unwrap_or_default().to_string(),
            background: Background::parse(data.background.as_deref().unwrap_or_default()),
            links,
            socials: data.social_links.clone(),
            on_link,
        }
    }
}
