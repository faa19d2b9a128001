use api::PageSummary;
use dioxus::prelude::*;
use forms::overview::{self, Overview, StatKind};

use super::pages_card::PagesCard;
use crate::icons::{FaArrowPointer, FaChartLine, FaEye};
use crate::toast::{toast, use_toasts, ToastLevel};
use crate::{use_api, use_auth, Icon};

/// `/dashboard`: headline stats and the pages card.
#[component]
pub fn OverviewView() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut toasts = use_toasts();
    let mut stats = use_signal(|| Option::<Overview>::None);
    let mut pages = use_signal(|| Option::<Vec<PageSummary>>::None);

    let _loader = use_resource(move || {
        let api = api.clone();
        async move {
            match Overview::load(&api).await {
                Ok(loaded) => stats.set(Some(loaded)),
                Err((fallback, _)) => {
                    stats.set(Some(fallback));
                    toast(&mut toasts, ToastLevel::Error, "Error", "Failed to fetch stats");
                }
            }
            pages.set(Some(overview::load_pages(&api).await));
        }
    });

    let name = auth
        .read()
        .user()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();
    let current = stats().unwrap_or_default();

    rsx! {
        div { class: "view-page space-y-6",
            div {
                h1 { class: "view-title", "Dashboard" }
                p { class: "view-muted", "Hey {name} 👋, here's how your link page is doing this week!" }
            }
            div { class: "flex flex-wrap justify-evenly gap-6",
                for stat in current.stats().iter().cloned() {
                    div { key: "{stat.title}", class: "card stat-card",
                        div { class: "flex items-center justify-between gap-2 pb-2",
                            p { class: "text-sm font-medium", "{stat.title}" }
                            div { class: "stat-icon",
                                match stat.kind {
                                    StatKind::Views => rsx! { Icon { icon: FaEye, width: 16, height: 16 } },
                                    StatKind::Clicks => rsx! { Icon { icon: FaArrowPointer, width: 16, height: 16 } },
                                    StatKind::Engagement => rsx! { Icon { icon: FaChartLine, width: 16, height: 16 } },
                                }
                            }
                        }
                        p { class: "text-2xl font-bold", "{stat.display()}" }
                    }
                }
            }
            div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                PagesCard { pages: pages() }
            }
        }
    }
}
