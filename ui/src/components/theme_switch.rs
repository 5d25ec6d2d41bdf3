use dioxus::prelude::*;

use crate::core::theme::{SwitchState, Theme};

/// Light/dark toggle. Until the shell has mounted it renders an inert
/// placeholder of the same size, so the server markup never claims a theme.
#[component]
pub fn ThemeSwitch(state: SwitchState, on_toggle: EventHandler<MouseEvent>) -> Element {
    let theme = match state {
        SwitchState::Pending => {
            return rsx! {
                span { class: "theme-switch theme-switch--pending", aria_hidden: "true" }
            };
        }
        SwitchState::Showing(theme) => theme,
    };

    let label = format!("Switch to {} theme", theme.toggled().as_str());

    rsx! {
        button {
            class: "theme-switch",
            r#type: "button",
            aria_label: "{label}",
            aria_pressed: "{theme.is_dark()}",
            "data-theme": theme.as_str(),
            onclick: move |evt| on_toggle.call(evt),
            {theme_icon(theme)}
        }
    }
}

fn theme_icon(theme: Theme) -> Element {
    match theme {
        Theme::Dark => rsx! {
            svg {
                class: "theme-switch__icon",
                view_box: "0 0 24 24",
                width: "25",
                height: "25",
                path { d: "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" }
            }
        },
        Theme::Light => rsx! {
            svg {
                class: "theme-switch__icon",
                view_box: "0 0 24 24",
                width: "25",
                height: "25",
                circle { cx: "12", cy: "12", r: "5" }
                path { d: "M12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42" }
            }
        },
    }
}
