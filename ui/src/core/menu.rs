//! Navigation menu entries and active-route matching.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub href: String,
    pub text: String,
}

impl MenuEntry {
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
        }
    }
}

/// Index of the entry whose href equals `path` exactly.
///
/// The first match wins, so duplicated hrefs never produce two active entries.
pub fn active_index(menu: &[MenuEntry], path: &str) -> Option<usize> {
    menu.iter().position(|entry| entry.href == path)
}

pub fn is_active(href: &str, current_path: &str) -> bool {
    href == current_path
}

const NAV_ITEM_BASE: &str = "nav-item";

/// CSS classes for a navigation link in its active or inactive state.
pub fn nav_item_class(active: bool) -> String {
    if active {
        format!("{NAV_ITEM_BASE} {NAV_ITEM_BASE}--active")
    } else {
        format!("{NAV_ITEM_BASE} {NAV_ITEM_BASE}--inactive")
    }
}
