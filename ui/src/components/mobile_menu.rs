use dioxus::prelude::*;

use crate::config;
use crate::core::platform;

const STAGGER_BASE_MS: u32 = 150;
const STAGGER_STEP_MS: u32 = 25;

/// Entrance delay for the `index`-th entry of the open menu.
pub fn stagger_delay_ms(index: usize) -> u32 {
    let step = u32::try_from(index).unwrap_or(u32::MAX / STAGGER_STEP_MS);
    STAGGER_BASE_MS.saturating_add(step.saturating_mul(STAGGER_STEP_MS))
}

/// Hamburger menu for narrow screens. Opening it locks page scroll; choosing
/// an entry closes it again.
#[component]
pub fn MobileMenu(#[props(!optional)] active: Option<usize>) -> Element {
    let site = config::site();
    let mut open = use_signal(|| false);

    use_effect(move || platform::lock_scroll(open()));
    use_drop(|| platform::lock_scroll(false));

    let burger_class = if open() {
        "mobile-menu__burger mobile-menu__burger--open"
    } else {
        "mobile-menu__burger"
    };

    rsx! {
        button {
            class: "{burger_class}",
            r#type: "button",
            aria_label: "Toggle menu",
            aria_expanded: "{open()}",
            onclick: move |_| {
                let next = !open();
                open.set(next);
            },
            span { class: "mobile-menu__bar" }
            span { class: "mobile-menu__bar" }
        }
        if open() {
            ul { class: "mobile-menu",
                for (index, entry) in site.menu.iter().enumerate() {
                    li {
                        key: "{index}",
                        class: if active == Some(index) { "mobile-menu__item mobile-menu__item--active" } else { "mobile-menu__item" },
                        style: "animation-delay: {stagger_delay_ms(index)}ms",
                        onclick: move |_| open.set(false),
                        Link { to: entry.href.clone(), "{entry.text}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_increase_per_entry() {
        assert_eq!(stagger_delay_ms(0), 150);
        assert_eq!(stagger_delay_ms(1), 175);
        assert_eq!(stagger_delay_ms(4), 250);
    }

    #[test]
    fn huge_indexes_saturate() {
        assert_eq!(stagger_delay_ms(usize::MAX), u32::MAX);
    }
}
