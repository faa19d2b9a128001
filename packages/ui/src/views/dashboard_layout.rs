use dioxus::prelude::*;

use crate::icons::{FaBook, FaChartLine, FaCircleQuestion, FaFileLines, FaPalette, FaUser};
use crate::{use_auth, Icon, LogoutButton};

struct NavItem {
    title: &'static str,
    path: &'static str,
    section: &'static str,
}

const NAV: [NavItem; 5] = [
    NavItem { title: "Overview", path: "/dashboard", section: "Main" },
    NavItem { title: "Pages", path: "/dashboard/pages", section: "Main" },
    NavItem { title: "Themes", path: "/dashboard/themes", section: "Main" },
    NavItem { title: "Profile", path: "/dashboard/profile", section: "Main" },
    NavItem { title: "Help Center", path: "/dashboard/help", section: "Support" },
];

fn item_class(active: bool) -> &'static str {
    if active {
        "sidebar-item sidebar-item-active"
    } else {
        "sidebar-item"
    }
}

#[component]
fn NavIcon(path: &'static str) -> Element {
    match path {
        "/dashboard" => rsx! { Icon { icon: FaChartLine, width: 16, height: 16 } },
        "/dashboard/pages" => rsx! { Icon { icon: FaFileLines, width: 16, height: 16 } },
        "/dashboard/themes" => rsx! { Icon { icon: FaPalette, width: 16, height: 16 } },
        "/dashboard/profile" => rsx! { Icon { icon: FaUser, width: 16, height: 16 } },
        "/dashboard/help" => rsx! { Icon { icon: FaCircleQuestion, width: 16, height: 16 } },
        _ => rsx! { Icon { icon: FaBook, width: 16, height: 16 } },
    }
}

/// Sidebar shell of every `/dashboard` route. `path` marks the active entry.
#[component]
pub fn DashboardLayout(path: String, children: Element) -> Element {
    let auth = use_auth();
    let name = auth
        .read()
        .user()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        div { class: "dashboard",
            aside { class: "sidebar",
                Link { to: "/", class: "logo px-4 py-5",
                    "Link"
                    span { class: "logo-accent", "Free" }
                }
                for section in ["Main", "Support"] {
                    nav { key: "{section}", class: "sidebar-group",
                        p { class: "sidebar-label", "{section}" }
                        for item in NAV.iter().filter(|i| i.section == section) {
                            Link {
                                key: "{item.path}",
                                to: item.path,
                                class: item_class(path == item.path),
                                NavIcon { path: item.path }
                                span { "{item.title}" }
                            }
                        }
                    }
                }
                div { class: "sidebar-footer",
                    if !name.is_empty() {
                        p { class: "view-muted truncate px-4", "{name}" }
                    }
                    LogoutButton { label: "Sign Out", class: "sidebar-item" }
                }
            }
            main { class: "dashboard-main", {children} }
        }
    }
}
