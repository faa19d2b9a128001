use dioxus::prelude::*;
use forms::session::landing_for;
use ui::views::{LoginView, SetupWizardView, SignupView};
use ui::{use_auth, ProtectedRoute};

use crate::Route;

/// Send visitors who are already signed in to where they belong.
fn signed_in_target() -> Option<&'static str> {
    use_auth().read().user().map(landing_for)
}

#[component]
pub fn Login(from: String) -> Element {
    let nav = use_navigator();
    if let Some(target) = signed_in_target() {
        nav.replace(target);
        return rsx! {};
    }

    rsx! {
        LoginView { from }
    }
}

#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();
    if let Some(target) = signed_in_target() {
        nav.replace(target);
        return rsx! {};
    }

    rsx! {
        SignupView {}
    }
}

#[component]
pub fn Setup() -> Element {
    let path = Route::Setup {}.to_string();

    rsx! {
        ProtectedRoute { path,
            SetupWizardView {}
        }
    }
}
