use dioxus::prelude::*;
use forms::themes::{ThemeOutcome, ThemePicker, THEMES};

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaCheck, FaCrown};
use crate::toast::{toast, use_toasts, ToastLevel};
use crate::Icon;

/// `/dashboard/themes`. Premium themes are refused with a toast.
#[component]
pub fn ThemesView() -> Element {
    let mut toasts = use_toasts();
    let mut picker = use_signal(ThemePicker::new);

    let mut apply = move |id: &'static str| {
        let outcome = picker.write().apply(id);
        let (title, description) = outcome.toast();
        let level = match outcome {
            ThemeOutcome::Applied(_) => ToastLevel::Success,
            ThemeOutcome::Premium(_) => ToastLevel::Info,
            ThemeOutcome::Unknown => ToastLevel::Error,
        };
        toast(&mut toasts, level, &title, &description);
    };

    let active = picker.read().active();

    rsx! {
        div { class: "view-page",
            h1 { class: "view-title", "Themes" }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                for theme in THEMES {
                    div {
                        key: "{theme.id}",
                        class: "card theme-card theme-{theme.id}",
                        class: if theme.id == active { "ring-2 ring-primary" },
                        div { class: "theme-swatch" }
                        div { class: "flex items-center justify-between mt-4",
                            h3 { class: "font-semibold", "{theme.name}" }
                            if theme.premium {
                                span { class: "badge badge-premium",
                                    Icon { icon: FaCrown, width: 12, height: 12 }
                                    "Premium"
                                }
                            }
                        }
                        p { class: "view-muted text-sm mb-4", "{theme.description}" }
                        if theme.id == active {
                            Button { variant: ButtonVariant::Secondary, disabled: true,
                                Icon { icon: FaCheck, width: 14, height: 14 }
                                "Active"
                            }
                        } else {
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| apply(theme.id),
                                "Apply"
                            }
                        }
                    }
                }
            }
        }
    }
}
