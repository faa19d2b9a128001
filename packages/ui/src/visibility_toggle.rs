use dioxus::prelude::*;
use forms::visibility::VisibilityToggle;

use crate::toast::{toast, use_toasts, ToastLevel};
use crate::use_api;

/// Published/hidden switch for a saved page.
///
/// The switch only moves after the backend accepted the change. `on_change`
/// receives the new value.
#[component]
pub fn VisibilitySwitch(
    page_id: String,
    visible: bool,
    on_change: Option<EventHandler<bool>>,
) -> Element {
    let api = use_api();
    let mut toasts = use_toasts();
    let mut toggle = use_signal(|| VisibilityToggle::new(page_id.clone(), visible));
    let mut busy = use_signal(|| false);

    let onclick = move |_| {
        let api = api.clone();
        async move {
            if busy() {
                return;
            }
            busy.set(true);
            let mut next = toggle();
            match next.toggle(&api).await {
                Ok(_) => {
                    let description = if next.is_visible() {
                        "Your page is now visible to everyone"
                    } else {
                        "Your page is now hidden from public view"
                    };
                    toast(&mut toasts, ToastLevel::Success, next.status_message(), description);
                    let visible = next.is_visible();
                    toggle.set(next);
                    if let Some(handler) = on_change {
                        handler.call(visible);
                    }
                }
                Err(_) => {
                    toast(
                        &mut toasts,
                        ToastLevel::Error,
                        "Failed to update visibility",
                        "Please try again later",
                    );
                }
            }
            busy.set(false);
        }
    };

    let on = toggle.read().is_visible();
    rsx! {
        div { class: "flex items-center gap-2",
            button {
                class: if on { "switch switch-on" } else { "switch" },
                role: "switch",
                aria_checked: "{on}",
                disabled: busy(),
                onclick: onclick,
                span { class: "switch-thumb" }
            }
            span { class: "text-sm", if on { "Visible" } else { "Hidden" } }
        }
    }
}
