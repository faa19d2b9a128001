//! # Client configuration (`linkfree.toml`)
//!
//! Tells the client where the backend lives and which public origin share links
//! should point at.
//!
//! ```toml
//! [api]
//! base_url = "https://api.linkfree.tech"   # empty = same origin as the app
//!
//! [share]
//! public_origin = "https://linkfree.tech"
//! ```
//!
//! In the browser there is no file system, so [`ClientConfig::from_build_env`] bakes
//! `LINKFREE_API_URL` and `LINKFREE_PUBLIC_ORIGIN` in at compile time. Every section
//! has defaults, so a missing or empty file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub share: ShareConfig,
}

/// Backend location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the REST API, without a trailing slash.
    /// Empty means requests go to the app's own origin.
    #[serde(default)]
    pub base_url: String,
}

/// Public links.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShareConfig {
    #[serde(default = "default_public_origin")]
    pub public_origin: String,
}

fn default_public_origin() -> String {
    "https://linkfree.tech".to_string()
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            public_origin: default_public_origin(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given API origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: trim_origin(base_url.into()),
            },
            share: ShareConfig::default(),
        }
    }

    /// Builder method to set the public origin used in share links.
    pub fn with_public_origin(mut self, origin: impl Into<String>) -> Self {
        self.share.public_origin = trim_origin(origin.into());
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "linkfree.toml"
    }

    /// Values captured from the build environment.
    pub fn from_build_env() -> Self {
        let mut config = Self::new(option_env!("LINKFREE_API_URL").unwrap_or_default());
        if let Some(origin) = option_env!("LINKFREE_PUBLIC_ORIGIN") {
            config = config.with_public_origin(origin);
        }
        config
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.api.base_url = trim_origin(config.api.base_url);
        config.share.public_origin = trim_origin(config.share.public_origin);
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Absolute URL of an API path such as `/api/pages`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api.base_url, path)
    }
}

fn trim_origin(origin: String) -> String {
    origin.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.share.public_origin, "https://linkfree.tech");
        assert_eq!(config.endpoint("/api/pages"), "/api/pages");
    }

    #[test]
    fn test_toml_trims_trailing_slash() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:3001/"

            [share]
            public_origin = "https://links.example/"
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoint("/api/user/login"), "http://localhost:3001/api/user/login");
        assert_eq!(config.share.public_origin, "https://links.example");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::new("https://api.example").with_public_origin("https://lf.example");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
