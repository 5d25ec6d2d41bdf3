//! Framework-independent shell logic: menu matching, metadata, hover and theme
//! state, plus the small amount of browser glue the components need.

pub mod hover;
pub mod menu;
pub mod meta;
pub mod platform;
pub mod theme;
