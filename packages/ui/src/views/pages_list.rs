use dioxus::prelude::*;
use forms::overview::load_pages;

use super::pages_card::PagesCard;
use crate::use_api;

/// `/dashboard/pages`.
#[component]
pub fn PagesListView() -> Element {
    let api = use_api();
    let pages = use_resource(move || {
        let api = api.clone();
        async move { load_pages(&api).await }
    });

    rsx! {
        div { class: "view-page max-w-3xl mx-auto w-full",
            h1 { class: "view-title", "Pages" }
            PagesCard { pages: pages() }
        }
    }
}
