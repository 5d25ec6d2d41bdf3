//! Page metadata: default/override merging and head tag generation.
//!
//! A page hands the shell a [`MetaOverrides`] record. It is merged over the
//! site defaults key by key (the override wins on collision), then turned into
//! the ordered list of `<head>` tags that search engines and social cards read.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub image: String,
    /// Keys the shell does not interpret; carried through for page use.
    #[serde(flatten, default)]
    pub extra: BTreeMap<String, String>,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: "Personal portfolio".to_string(),
            kind: "website".to_string(),
            image: String::new(),
            extra: BTreeMap::new(),
        }
    }
}

impl PageMeta {
    /// Shallow merge: every key present in `overrides` replaces the default.
    pub fn merged(&self, overrides: &MetaOverrides) -> PageMeta {
        let mut merged = self.clone();
        if let Some(title) = &overrides.title {
            merged.title = title.clone();
        }
        if let Some(description) = &overrides.description {
            merged.description = description.clone();
        }
        if let Some(kind) = &overrides.kind {
            merged.kind = kind.clone();
        }
        if let Some(image) = &overrides.image {
            merged.image = image.clone();
        }
        for (key, value) in &overrides.extra {
            merged.extra.insert(key.clone(), value.clone());
        }
        merged
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "title" => Some(&self.title),
            "description" => Some(&self.description),
            "type" => Some(&self.kind),
            "image" => Some(&self.image),
            other => self.extra.get(other).map(String::as_str),
        }
    }
}

/// Caller-supplied partial metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten, default)]
    pub extra: BTreeMap<String, String>,
}

impl MetaOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(self, title: impl Into<String>) -> Self {
        self.with("title", title)
    }

    pub fn description(self, description: impl Into<String>) -> Self {
        self.with("description", description)
    }

    pub fn image(self, image: impl Into<String>) -> Self {
        self.with("image", image)
    }

    /// Set any key. Recognized keys land in their typed slot, anything else
    /// passes through. Setting a key twice keeps the last value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            "title" => self.title = Some(value),
            "description" => self.description = Some(value),
            "type" => self.kind = Some(value),
            "image" => self.image = Some(value),
            _ => {
                self.extra.insert(key, value);
            }
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    Name,
    Property,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    Title(String),
    Meta {
        attr: MetaAttr,
        key: &'static str,
        content: String,
    },
    Link {
        rel: &'static str,
        href: String,
    },
}

impl HeadTag {
    fn name(key: &'static str, content: impl Into<String>) -> Self {
        HeadTag::Meta {
            attr: MetaAttr::Name,
            key,
            content: content.into(),
        }
    }

    fn property(key: &'static str, content: impl Into<String>) -> Self {
        HeadTag::Meta {
            attr: MetaAttr::Property,
            key,
            content: content.into(),
        }
    }
}

/// `base_url` and `path` joined with exactly one slash.
pub fn canonical_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Pass-through override key carrying an article's publication date.
pub const PUBLISHED_KEY: &str = "date";

pub fn head_tags(meta: &PageMeta, site: &SiteConfig, path: &str) -> Vec<HeadTag> {
    let url = canonical_url(&site.base_url, path);
    let mut tags = vec![
        HeadTag::Title(meta.title.clone()),
        HeadTag::name("robots", "follow, index"),
        HeadTag::name("description", meta.description.as_str()),
        HeadTag::property("og:url", url.as_str()),
        HeadTag::Link {
            rel: "canonical",
            href: url,
        },
        HeadTag::property("og:type", meta.kind.as_str()),
        HeadTag::property("og:site_name", site.site_name.as_str()),
        HeadTag::property("og:description", meta.description.as_str()),
        HeadTag::property("og:title", meta.title.as_str()),
        HeadTag::property("og:image", meta.image.as_str()),
        HeadTag::name("twitter:card", "summary_large_image"),
        HeadTag::name("twitter:site", site.twitter_site.as_str()),
        HeadTag::name("twitter:title", meta.title.as_str()),
        HeadTag::name("twitter:description", meta.description.as_str()),
        HeadTag::name("twitter:image", meta.image.as_str()),
    ];
    if let Some(date) = meta.get(PUBLISHED_KEY) {
        tags.push(HeadTag::property("article:published_time", date));
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_for(tags: &[HeadTag], wanted: &str) -> Option<String> {
        tags.iter().find_map(|tag| match tag {
            HeadTag::Meta { key, content, .. } if *key == wanted => Some(content.clone()),
            _ => None,
        })
    }

    fn defaults() -> PageMeta {
        PageMeta {
            title: "Default title".into(),
            description: "Default description".into(),
            kind: "website".into(),
            image: "https://cdn.test/default.png".into(),
            extra: BTreeMap::new(),
        }
    }

    fn site() -> SiteConfig {
        SiteConfig {
            base_url: "https://www.test".into(),
            site_name: "Test Site".into(),
            twitter_site: "@test".into(),
            defaults: defaults(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn empty_overrides_keep_defaults() {
        assert_eq!(defaults().merged(&MetaOverrides::new()), defaults());
    }

    #[test]
    fn overrides_replace_only_their_keys() {
        let merged = defaults().merged(&MetaOverrides::new().title("About me"));
        assert_eq!(merged.title, "About me");
        assert_eq!(merged.description, "Default description");
        assert_eq!(merged.image, "https://cdn.test/default.png");
        assert_eq!(merged.kind, "website");
    }

    #[test]
    fn image_and_type_can_be_overridden() {
        let merged = defaults().merged(
            &MetaOverrides::new()
                .image("https://cdn.test/post.png")
                .with("type", "article"),
        );
        assert_eq!(merged.image, "https://cdn.test/post.png");
        assert_eq!(merged.kind, "article");
    }

    #[test]
    fn unknown_keys_pass_through() {
        let merged = defaults().merged(&MetaOverrides::new().with("date", "2024-01-05"));
        assert_eq!(merged.get("date"), Some("2024-01-05"));
        assert_eq!(merged.get("title"), Some("Default title"));
        assert_eq!(merged.get("nope"), None);
    }

    #[test]
    fn last_write_wins_within_overrides() {
        let overrides = MetaOverrides::new().title("first").with("title", "second");
        assert_eq!(defaults().merged(&overrides).title, "second");
    }

    #[test]
    fn overrides_deserialize_with_type_key() {
        let overrides: MetaOverrides =
            serde_json::from_str(r#"{ "title": "T", "type": "article", "slug": "x" }"#).unwrap();
        assert_eq!(overrides.kind.as_deref(), Some("article"));
        assert_eq!(overrides.extra.get("slug").map(String::as_str), Some("x"));
    }

    #[test]
    fn canonical_url_joins_with_single_slash() {
        assert_eq!(canonical_url("https://a.test/", "/about"), "https://a.test/about");
        assert_eq!(canonical_url("https://a.test", "about"), "https://a.test/about");
        assert_eq!(canonical_url("https://a.test", "/"), "https://a.test/");
    }

    #[test]
    fn head_tags_follow_merged_record() {
        let meta = defaults().merged(&MetaOverrides::new().description("Custom"));
        let tags = head_tags(&meta, &site(), "/blog");

        assert_eq!(tags[0], HeadTag::Title("Default title".into()));
        assert_eq!(content_for(&tags, "description").as_deref(), Some("Custom"));
        assert_eq!(content_for(&tags, "og:description").as_deref(), Some("Custom"));
        assert_eq!(content_for(&tags, "twitter:description").as_deref(), Some("Custom"));
        assert_eq!(
            content_for(&tags, "og:url").as_deref(),
            Some("https://www.test/blog")
        );
        assert!(tags.contains(&HeadTag::Link {
            rel: "canonical",
            href: "https://www.test/blog".into()
        }));
        assert_eq!(content_for(&tags, "twitter:site").as_deref(), Some("@test"));
        assert_eq!(content_for(&tags, "og:site_name").as_deref(), Some("Test Site"));
    }

    #[test]
    fn published_date_becomes_article_tag() {
        let plain = head_tags(&defaults(), &site(), "/blog");
        assert_eq!(content_for(&plain, "article:published_time"), None);

        let meta = defaults().merged(&MetaOverrides::new().with(PUBLISHED_KEY, "2024-03-09"));
        let tags = head_tags(&meta, &site(), "/blog/post");
        assert_eq!(tags.len(), plain.len() + 1);
        assert_eq!(
            content_for(&tags, "article:published_time").as_deref(),
            Some("2024-03-09")
        );
    }
}
