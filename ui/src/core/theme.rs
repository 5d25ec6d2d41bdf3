//! Light/dark theme model.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// What the visitor asked for. `System` defers to the colour-scheme media query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub fn resolve(self, system_prefers_dark: bool) -> Theme {
        match self {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::System if system_prefers_dark => Theme::Dark,
            ThemePreference::System => Theme::Light,
        }
    }

    /// Preference after the visitor flips the switch: always explicit.
    pub fn toggled(self, system_prefers_dark: bool) -> Self {
        match self.resolve(system_prefers_dark).toggled() {
            Theme::Light => ThemePreference::Light,
            Theme::Dark => ThemePreference::Dark,
        }
    }
}

/// What the theme switch may show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchState {
    /// Not mounted yet; the resolved theme cannot be trusted.
    Pending,
    Showing(Theme),
}

pub fn switch_state(mounted: bool, resolved: Theme) -> SwitchState {
    if mounted {
        SwitchState::Showing(resolved)
    } else {
        SwitchState::Pending
    }
}
