//! Transient notifications shown in the corner of the screen.
//!
//! Every failed request ends up here. On the web a toast removes itself after
//! [`TOAST_TTL_SECS`]; it can always be closed by hand.

use dioxus::prelude::*;

pub const TOAST_TTL_SECS: u64 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    fn push(&mut self, level: ToastLevel, title: &str, description: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            level,
            title: title.to_string(),
            description: description.to_string(),
        });
        id
    }

    fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Show a toast.
pub fn toast(toasts: &mut Signal<Toasts>, level: ToastLevel, title: &str, description: &str) {
    if level == ToastLevel::Error {
        tracing::warn!("{title}: {description}");
    }
    let id = toasts.write().push(level, title, description);
    schedule_dismiss(*toasts, id);
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(mut toasts: Signal<Toasts>, id: u64) {
    spawn(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(TOAST_TTL_SECS)).await;
        toasts.write().dismiss(id);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_toasts: Signal<Toasts>, _id: u64) {}

/// Provides the toast signal and renders the stack above its children.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let mut toasts = use_context_provider(|| Signal::new(Toasts::default()));
    let entries = toasts().entries;

    rsx! {
        {children}
        div { class: "toast-stack",
            for entry in entries {
                div {
                    key: "{entry.id}",
                    class: match entry.level {
                        ToastLevel::Success => "toast toast-success",
                        ToastLevel::Info => "toast toast-info",
                        ToastLevel::Error => "toast toast-error",
                    },
                    div { class: "toast-body",
                        p { class: "toast-title", "{entry.title}" }
                        if !entry.description.is_empty() {
                            p { class: "toast-description", "{entry.description}" }
                        }
                    }
                    button {
                        class: "toast-close",
                        onclick: move |_| toasts.write().dismiss(entry.id),
                        "×"
                    }
                }
            }
        }
    }
}
