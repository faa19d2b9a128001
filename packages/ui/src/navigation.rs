//! Browser-level navigation the router cannot do: full reloads, new tabs and
//! the clipboard. Outside the browser these only log.

use dioxus::prelude::*;
use dioxus::router::Navigator;
use forms::Navigation;

/// Follow a [`Navigation`] produced by a form.
pub fn follow(nav: Navigator, navigation: Navigation) {
    match navigation {
        Navigation::Push(path) => {
            nav.push(path);
        }
        Navigation::Hard(path) => hard_navigate(&path),
    }
}

/// Load `url` from scratch, dropping all client state.
pub fn hard_navigate(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!("navigation to {url} failed: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("hard navigation to {url}");
}

pub fn open_in_new_tab(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                tracing::error!("opening {url} failed: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("open {url}");
}

/// Write `text` to the clipboard through the page's JavaScript context. Resolves
/// to whether the browser accepted the write.
pub async fn copy_to_clipboard(text: &str) -> bool {
    let mut eval = document::eval(
        r#"
        const text = await dioxus.recv();
        try {
            await navigator.clipboard.writeText(text);
            dioxus.send(true);
        } catch (e) {
            dioxus.send(false);
        }
        "#,
    );
    if let Err(e) = eval.send(text.to_string()) {
        tracing::error!("clipboard write failed: {e}");
        return false;
    }
    copy_outcome(eval.recv::<bool>().await)
}

/// Only an explicit `true` from the page counts as copied.
fn copy_outcome<E: std::fmt::Display>(reply: Result<bool, E>) -> bool {
    match reply {
        Ok(true) => true,
        Ok(false) => {
            tracing::warn!("clipboard write rejected by the browser");
            false
        }
        Err(e) => {
            tracing::error!("clipboard write failed: {e}");
            false
        }
    }
}

/// `window.location.search`, e.g. `?error=...`. Empty outside the browser.
pub fn location_search() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// `window.location.origin`, if running in a browser.
pub fn location_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_clipboard_write_is_not_copied() {
        assert!(copy_outcome::<String>(Ok(true)));
        assert!(!copy_outcome::<String>(Ok(false)));
        assert!(!copy_outcome(Err("eval finished".to_string())));
    }
}
