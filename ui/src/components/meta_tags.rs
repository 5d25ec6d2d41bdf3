use dioxus::prelude::*;

use crate::config;
use crate::core::meta::{head_tags, HeadTag, MetaAttr, PageMeta};

/// Injects title, description, canonical, Open Graph and Twitter card tags
/// into the document head.
#[component]
pub fn MetaTags(meta: PageMeta, path: String) -> Element {
    let tags = head_tags(&meta, config::site(), &path);

    rsx! {
        {tags.into_iter().map(head_tag)}
    }
}

fn head_tag(tag: HeadTag) -> Element {
    match tag {
        HeadTag::Title(title) => rsx! {
            document::Title { "{title}" }
        },
        HeadTag::Meta {
            attr: MetaAttr::Name,
            key,
            content,
        } => rsx! {
            document::Meta { name: key.to_string(), content }
        },
        HeadTag::Meta {
            attr: MetaAttr::Property,
            key,
            content,
        } => rsx! {
            document::Meta { property: key.to_string(), content }
        },
        HeadTag::Link { rel, href } => rsx! {
            document::Link { rel: rel.to_string(), href }
        },
    }
}
