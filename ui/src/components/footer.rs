use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::config::{self, FooterLink};

/// Client-only: `Container` mounts it after the first browser render, so it
/// never appears in server markup.
#[component]
pub fn Footer() -> Element {
    let site = config::site();
    let year = OffsetDateTime::now_utc().year();
    let name = site.site_name.as_str();

    rsx! {
        footer { class: "footer",
            hr { class: "footer__rule" }
            div { class: "footer__columns",
                for (index, column) in site.footer.iter().enumerate() {
                    div { key: "{index}", class: "footer__column",
                        for link in column.links.iter() {
                            FooterAnchor { link: link.clone() }
                        }
                    }
                }
            }
            p { class: "footer__note", "© {year} {name}" }
        }
    }
}

#[component]
fn FooterAnchor(link: FooterLink) -> Element {
    if link.external {
        rsx! {
            a {
                class: "footer__link",
                href: "{link.href}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{link.text}"
            }
        }
    } else {
        rsx! {
            Link { class: "footer__link", to: link.href.clone(), "{link.text}" }
        }
    }
}
