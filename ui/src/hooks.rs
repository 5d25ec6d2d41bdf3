//! Dioxus hooks shared by the shell components.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::platform::{self, SystemThemeWatch};
use crate::core::theme::{Theme, ThemePreference};

/// `false` during the server pass and the first client render, `true` once
/// the component has mounted in the browser.
pub fn use_mounted() -> Signal<bool> {
    let mut mounted = use_signal(|| false);
    use_effect(move || {
        mounted.set(true);
    });
    mounted
}

/// Theme preference plus the system colour-scheme answer it resolves against.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeController {
    preference: Signal<ThemePreference>,
    system_dark: Signal<bool>,
}

impl ThemeController {
    fn new() -> Self {
        Self {
            preference: Signal::new(ThemePreference::default()),
            system_dark: Signal::new(false),
        }
    }

    pub fn resolved(&self) -> Theme {
        (self.preference)().resolve((self.system_dark)())
    }

    pub fn toggle(&mut self) {
        let next = self.preference.peek().toggled(*self.system_dark.peek());
        tracing::debug!(?next, "theme toggled");
        self.preference.set(next);
    }
}

/// Install the theme controller at the application root. It outlives page
/// navigation, follows the system colour scheme while the preference is
/// `System`, and applies the resolved theme to the document once mounted.
pub fn use_theme_provider() -> ThemeController {
    let controller = use_context_provider(ThemeController::new);
    // Keeps the media-query listener registered for the provider's lifetime.
    let watch: Rc<RefCell<Option<SystemThemeWatch>>> = use_hook(|| Rc::new(RefCell::new(None)));

    use_effect(move || {
        let mut system_dark = controller.system_dark;
        system_dark.set(platform::system_prefers_dark());
        *watch.borrow_mut() = platform::watch_system_theme(move |dark| {
            tracing::debug!(dark, "system colour scheme changed");
            system_dark.set(dark);
        });
    });
    use_effect(move || platform::apply_theme(controller.resolved()));

    controller
}

/// The controller installed by [`use_theme_provider`].
///
/// Panics if no ancestor called `use_theme_provider`; the platform crate
/// installs it in its root `App` component.
pub fn use_theme() -> ThemeController {
    use_context::<ThemeController>()
}
