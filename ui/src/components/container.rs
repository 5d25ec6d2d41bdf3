use dioxus::prelude::*;

use crate::components::{Footer, MetaTags, MobileMenu, NavItem, ThemeSwitch};
use crate::config;
use crate::core::hover::HoverState;
use crate::core::menu::active_index;
use crate::core::meta::MetaOverrides;
use crate::core::theme::switch_state;
use crate::hooks::{use_mounted, use_theme};

// Shell stylesheet (inlined as well in release native builds, where no asset server runs)
const SHELL_CSS: Asset = asset!("/assets/styling/shell.css");
const SHELL_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/shell.css"
));

/// Page shell: head metadata, header (skip link, menus, theme switch), the
/// page content, and the client-only footer.
///
/// `path` is the current route path as the router renders it. It picks the
/// active menu entry and the canonical URL.
///
/// ```ignore
/// #[component]
/// fn About() -> Element {
///     rsx! {
///         Container {
///             path: "/about",
///             meta: MetaOverrides::new().title("About"),
///             h1 { "About" }
///         }
///     }
/// }
/// ```
#[component]
pub fn Container(
    #[props(into)] path: String,
    #[props(default)] meta: MetaOverrides,
    children: Element,
) -> Element {
    let site = config::site();
    let mounted = use_mounted();
    let mut theme = use_theme();
    let mut hover = use_signal(HoverState::default);

    let merged = site.defaults.merged(&meta);
    let active = active_index(&site.menu, &path);
    let slide_class = hover.read().slide().css_class();

    tracing::trace!(%path, ?active, mounted = mounted(), "render shell");

    rsx! {
        document::Link { rel: "stylesheet", href: SHELL_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{SHELL_CSS_INLINE}" }
        }
        MetaTags { meta: merged, path: path.clone() }

        div { class: "shell",
            div { class: "shell__frame",
                header { class: "shell__header",
                    nav { class: "shell__nav",
                        a { href: "#skip", class: "skip-nav", "Skip to content" }
                        div { class: "shell__menus",
                            MobileMenu { active: active }
                            ul {
                                class: "nav-group",
                                onmouseleave: move |_| hover.write().leave(),
                                for (index, entry) in site.menu.iter().enumerate() {
                                    li {
                                        key: "{index}",
                                        class: "nav-group__entry",
                                        onmouseenter: move |_| hover.write().enter(index),
                                        NavItem {
                                            href: entry.href.clone(),
                                            text: entry.text.clone(),
                                            current_path: path.clone(),
                                        }
                                        if hover.read().is_highlighted(index) {
                                            span { class: "nav-cover {slide_class}" }
                                        }
                                    }
                                }
                            }
                        }
                        div { class: "nav-cta",
                            ThemeSwitch {
                                state: switch_state(mounted(), theme.resolved()),
                                on_toggle: move |_| theme.toggle(),
                            }
                        }
                    }
                }
                main { id: "skip", class: "shell__main",
                    {children}
                    if mounted() {
                        Footer {}
                    }
                }
            }
        }
    }
}
