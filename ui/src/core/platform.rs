//! Browser glue for theme and scroll handling.
//!
//! Only wasm builds touch the DOM. Server rendering and native test runs get
//! the no-op versions below.

use crate::core::theme::Theme;

#[cfg(target_arch = "wasm32")]
pub use browser::{
    apply_theme, lock_scroll, system_prefers_dark, watch_system_theme, SystemThemeWatch,
};

#[cfg(not(target_arch = "wasm32"))]
pub use native::{
    apply_theme, lock_scroll, system_prefers_dark, watch_system_theme, SystemThemeWatch,
};

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{MediaQueryList, MediaQueryListEvent};

    use super::{Theme, DARK_QUERY};

    fn document() -> Option<web_sys::Document> {
        web_sys::window().and_then(|w| w.document())
    }

    pub fn system_prefers_dark() -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    /// Live `change` listener on the dark colour-scheme query. Dropping it
    /// removes the listener.
    pub struct SystemThemeWatch {
        query: MediaQueryList,
        callback: Closure<dyn FnMut(MediaQueryListEvent)>,
    }

    impl Drop for SystemThemeWatch {
        fn drop(&mut self) {
            let listener = self.callback.as_ref().unchecked_ref();
            if let Err(err) = self.query.remove_event_listener_with_callback("change", listener) {
                tracing::warn!(?err, "failed to remove colour-scheme listener");
            }
        }
    }

    /// Call `on_change` with the new answer whenever the system switches
    /// between light and dark.
    pub fn watch_system_theme(
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Option<SystemThemeWatch> {
        let query = web_sys::window()?.match_media(DARK_QUERY).ok().flatten()?;
        let callback = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
            move |event: MediaQueryListEvent| on_change(event.matches()),
        );
        if let Err(err) =
            query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
        {
            tracing::warn!(?err, "failed to watch {DARK_QUERY}");
            return None;
        }
        Some(SystemThemeWatch { query, callback })
    }

    /// Mirror the resolved theme onto `<html>` so the stylesheet's `.dark`
    /// selectors apply.
    pub fn apply_theme(theme: Theme) {
        let Some(root) = document().and_then(|d| d.document_element()) else {
            tracing::warn!("no document element; theme {} not applied", theme.as_str());
            return;
        };
        let classes = root.class_list();
        let result = if theme.is_dark() {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
        if let Err(err) = result {
            tracing::warn!(?err, "failed to update root theme class");
        }
        if let Err(err) = root.set_attribute("style", &format!("color-scheme: {}", theme.as_str())) {
            tracing::warn!(?err, "failed to set color-scheme");
        }
    }

    pub fn lock_scroll(locked: bool) {
        let Some(body) = document().and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(err) = result {
            tracing::warn!(?err, locked, "failed to toggle body scroll lock");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::{Theme, DARK_QUERY};

    pub fn system_prefers_dark() -> bool {
        tracing::trace!("{DARK_QUERY} unavailable outside the browser");
        false
    }

    pub fn apply_theme(theme: Theme) {
        tracing::trace!(theme = theme.as_str(), "theme application skipped outside the browser");
    }

    pub fn lock_scroll(_locked: bool) {}

    /// Nothing to watch outside the browser.
    pub struct SystemThemeWatch;

    pub fn watch_system_theme(_on_change: impl FnMut(bool) + 'static) -> Option<SystemThemeWatch> {
        None
    }
}
