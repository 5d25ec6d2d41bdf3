//! Route stubs. Each page only chooses its metadata and hands its body to the
//! shared shell.

use dioxus::prelude::*;
use ui::{Container, MetaOverrides};

use crate::use_current_path;

#[component]
pub fn Home() -> Element {
    let path = use_current_path();
    rsx! {
        Container { path: path,
            section { class: "page",
                h1 { "Hey, I'm Alex Morgan" }
                p { "I build things for the web and make videos about it." }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    let path = use_current_path();
    rsx! {
        Container {
            path: path,
            meta: MetaOverrides::new()
                .title("About - Alex Morgan")
                .description("Background, experience, and what I'm working on now."),
            section { class: "page",
                h1 { "About" }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let path = use_current_path();
    rsx! {
        Container {
            path: path,
            meta: MetaOverrides::new().title("Projects - Alex Morgan"),
            section { class: "page",
                h1 { "Projects" }
            }
        }
    }
}

#[component]
pub fn Blog() -> Element {
    let path = use_current_path();
    rsx! {
        Container {
            path: path,
            meta: MetaOverrides::new()
                .title("Blog - Alex Morgan")
                .description("Notes on front-end development and computer science."),
            section { class: "page",
                h1 { "Blog" }
            }
        }
    }
}

#[component]
pub fn Uses() -> Element {
    let path = use_current_path();
    rsx! {
        Container {
            path: path,
            meta: MetaOverrides::new().title("Uses - Alex Morgan"),
            section { class: "page",
                h1 { "Uses" }
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = use_current_path();
    tracing::debug!(segments = %segments.join("/"), "no route matched");

    rsx! {
        Container {
            path: path,
            meta: MetaOverrides::new().title("404 - Alex Morgan"),
            section { class: "page",
                h1 { "Page not found" }
                Link { to: "/", "Back home" }
            }
        }
    }
}
