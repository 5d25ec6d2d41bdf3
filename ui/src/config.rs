//! Site configuration.
//!
//! The configuration lives in `assets/site.json` and is embedded at compile
//! time. It is parsed once, on first access through [`site`]. A malformed file
//! never breaks rendering: the error is logged and the built-in defaults are
//! used instead.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::menu::MenuEntry;
use crate::core::meta::PageMeta;

const SITE_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/site.json"));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site configuration field `{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("menu entry `{text}` has href `{href}`, expected a path starting with `/`")]
    RelativeHref { text: String, href: String },
    #[error("base_url `{0}` must be an absolute http(s) URL")]
    BaseUrl(String),
}

/// One link in a footer column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub href: String,
    pub text: String,
    #[serde(default)]
    pub external: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    #[serde(default)]
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Origin used for canonical and `og:url` links, without a trailing slash.
    pub base_url: String,
    pub site_name: String,
    pub twitter_site: String,
    pub defaults: PageMeta,
    pub menu: Vec<MenuEntry>,
    pub footer: Vec<FooterColumn>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.example.com".to_string(),
            site_name: "Portfolio".to_string(),
            twitter_site: String::new(),
            defaults: PageMeta::default(),
            menu: vec![MenuEntry::new("/", "Home")],
            footer: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_name.trim().is_empty() {
            return Err(ConfigError::EmptyField("site_name"));
        }
        if self.defaults.title.trim().is_empty() {
            return Err(ConfigError::EmptyField("defaults.title"));
        }
        let base = self.base_url.trim();
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            return Err(ConfigError::BaseUrl(self.base_url.clone()));
        }
        if let Some(entry) = self.menu.iter().find(|e| !e.href.starts_with('/')) {
            return Err(ConfigError::RelativeHref {
                text: entry.text.clone(),
                href: entry.href.clone(),
            });
        }
        Ok(())
    }
}

static SITE: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::from_json(SITE_JSON) {
    Ok(config) => {
        tracing::debug!(
            entries = config.menu.len(),
            site = %config.site_name,
            "loaded site configuration"
        );
        config
    }
    Err(err) => {
        tracing::error!("{err}; falling back to built-in site configuration");
        SiteConfig::default()
    }
});

/// The embedded site configuration.
pub fn site() -> &'static SiteConfig {
    &SITE
}
