use dioxus::prelude::*;

use crate::core::menu::{is_active, nav_item_class};

/// A navigation link. Its styling depends only on whether `href` is the
/// current path.
#[component]
pub fn NavItem(href: String, text: String, current_path: String) -> Element {
    let class = nav_item_class(is_active(&href, &current_path));

    rsx! {
        Link { to: href,
            span { class: "{class}", "{text}" }
        }
    }
}
