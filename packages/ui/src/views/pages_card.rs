use api::PageSummary;
use dioxus::prelude::*;
use forms::share::public_path;

use crate::components::{Button, Spinner};
use crate::icons::{FaEye, FaEyeSlash, FaFileLines, FaPenToSquare, FaPlus, FaUpRightFromSquare};
use crate::Icon;

pub const CREATE_PAGE_PATH: &str = "/dashboard/pages/create";

/// Date part of an ISO timestamp.
fn created_on(created_at: Option<&str>) -> &str {
    created_at.and_then(|c| c.get(..10)).unwrap_or_default()
}

/// The user's pages, or an invitation to create the first one.
#[component]
pub fn PagesCard(pages: Option<Vec<PageSummary>>) -> Element {
    let nav = use_navigator();

    let Some(pages) = pages else {
        return rsx! {
            section { class: "card",
                Spinner {}
            }
        };
    };

    if pages.is_empty() {
        return rsx! {
            section { class: "card",
                h2 { class: "view-section-title", "Your Pages" }
                p { class: "view-muted", "Create and manage your link pages" }
                div { class: "flex flex-col items-center py-8 gap-6",
                    Icon { icon: FaFileLines, width: 64, height: 64, fill: "#d1d5db" }
                    p { class: "view-muted", "You haven't created any pages yet" }
                    Button { onclick: move |_| { nav.push(CREATE_PAGE_PATH); },
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        "Create Your First Page"
                    }
                }
            }
        };
    }

    rsx! {
        section { class: "card",
            div { class: "flex items-center justify-between mb-4",
                div {
                    h2 { class: "view-section-title", "Your Pages" }
                    p { class: "view-muted", "Create and manage your link pages" }
                }
                Button { onclick: move |_| { nav.push(CREATE_PAGE_PATH); },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "New Page"
                }
            }
            ul { class: "divide-y",
                for page in pages {
                    PageRow { key: "{page.id}", page: page.clone() }
                }
            }
        }
    }
}

#[component]
fn PageRow(page: PageSummary) -> Element {
    let username = page.username.clone().unwrap_or_default();
    let slug = (!page.is_default).then_some(page.slug.as_str());
    let public = public_path(&username, slug);
    let edit = format!("/edit-page/{}", page.id);
    let created = created_on(page.created_at.as_deref()).to_string();

    rsx! {
        li { class: "flex items-center justify-between py-3",
            div {
                p { class: "font-medium",
                    "{public}"
                    if page.is_default {
                        span { class: "badge ml-2", "Default" }
                    }
                }
                p { class: "view-muted text-sm",
                    "{page.total_views} views"
                    if !created.is_empty() {
                        " · created {created}"
                    }
                }
            }
            div { class: "flex items-center gap-3",
                if page.visibility {
                    span { title: "Visible",
                        Icon { icon: FaEye, width: 16, height: 16 }
                    }
                } else {
                    span { title: "Hidden",
                        Icon { icon: FaEyeSlash, width: 16, height: 16 }
                    }
                }
                if !username.is_empty() {
                    Link { to: public.clone(), new_tab: true,
                        Icon { icon: FaUpRightFromSquare, width: 16, height: 16 }
                    }
                }
                Link { to: edit,
                    Icon { icon: FaPenToSquare, width: 16, height: 16 }
                }
            }
        }
    }
}
