//! Shared UI crate for Folio: the page shell every route renders inside.

pub mod config;
pub mod core;
pub mod hooks;

pub mod components {
    // Page shell (components/container.rs)
    pub mod container;
    pub use container::Container;

    pub mod footer;
    pub use footer::Footer;

    pub mod meta_tags;
    pub use meta_tags::MetaTags;

    pub mod mobile_menu;
    pub use mobile_menu::MobileMenu;

    pub mod nav_item;
    pub use nav_item::NavItem;

    pub mod theme_switch;
    pub use theme_switch::ThemeSwitch;
}

pub use components::Container;
pub use core::meta::MetaOverrides;
pub use hooks::use_theme_provider;
