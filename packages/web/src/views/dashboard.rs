use dioxus::prelude::*;
use ui::views::{
    DashboardLayout, HelpView, OverviewView, PageEditorView, PagesListView, ProfileSettingsView,
    ThemesView,
};
use ui::ProtectedRoute;

use crate::Route;

/// Layout of every `/dashboard` route: the session gate, then the sidebar.
#[component]
pub fn Dashboard() -> Element {
    let path = use_route::<Route>().to_string();

    rsx! {
        ProtectedRoute { path: path.clone(),
            DashboardLayout { path,
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
pub fn Overview() -> Element {
    rsx! {
        OverviewView {}
    }
}

#[component]
pub fn Pages() -> Element {
    rsx! {
        PagesListView {}
    }
}

#[component]
pub fn CreatePage() -> Element {
    rsx! {
        PageEditorView { page_id: None::<String> }
    }
}

#[component]
pub fn Themes() -> Element {
    rsx! {
        ThemesView {}
    }
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        ProfileSettingsView {}
    }
}

#[component]
pub fn Help() -> Element {
    rsx! {
        HelpView {}
    }
}

/// `/edit-page/:id` sits outside the sidebar but behind the same gate.
#[component]
pub fn EditPage(id: String) -> Element {
    let path = Route::EditPage { id: id.clone() }.to_string();

    rsx! {
        ProtectedRoute { path,
            // keyed so that moving to another page loads it afresh
            PageEditorView { key: "{id}", page_id: Some(id.clone()) }
        }
    }
}
