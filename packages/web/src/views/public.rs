use dioxus::prelude::*;
use ui::views::{LandingView, NotFoundView, PortfolioView};

#[component]
pub fn Landing() -> Element {
    rsx! {
        LandingView {}
    }
}

#[component]
pub fn Portfolio(username: String) -> Element {
    rsx! {
        PortfolioView { key: "{username}", username: username.clone(), slug: None::<String> }
    }
}

#[component]
pub fn PortfolioPage(username: String, slug: String) -> Element {
    rsx! {
        PortfolioView {
            key: "{username}/{slug}",
            username: username.clone(),
            slug: Some(slug.clone()),
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("no route for /{}", segments.join("/"));
    rsx! {
        NotFoundView {}
    }
}
