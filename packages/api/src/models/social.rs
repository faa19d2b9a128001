//! Social platforms and the links attached to them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of platforms a page can show an icon for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Whatsapp,
    Mail,
    Linkedin,
    Github,
    Twitter,
    Instagram,
}

impl Platform {
    /// All platforms, in the order the picker offers them.
    pub const ALL: [Platform; 6] = [
        Platform::Whatsapp,
        Platform::Mail,
        Platform::Linkedin,
        Platform::Github,
        Platform::Twitter,
        Platform::Instagram,
    ];

    /// Wire name, e.g. `"github"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Whatsapp => "whatsapp",
            Platform::Mail => "mail",
            Platform::Linkedin => "linkedin",
            Platform::Github => "github",
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
        }
    }

    /// Human label shown next to the icon.
    pub fn label(self) -> &'static str {
        match self {
            Platform::Whatsapp => "WhatsApp",
            Platform::Mail => "Email",
            Platform::Linkedin => "LinkedIn",
            Platform::Github => "GitHub",
            Platform::Twitter => "Twitter",
            Platform::Instagram => "Instagram",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known platform.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown social platform: {0}")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

/// One platform → url association. A page holds at most one per platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: Platform,
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parse() {
        assert_eq!("github".parse::<Platform>(), Ok(Platform::Github));
        assert_eq!(" LinkedIn ".parse::<Platform>(), Ok(Platform::Linkedin));
        assert!("facebook".parse::<Platform>().is_err());
    }

    #[test]
    fn test_platform_wire_name_matches_serde() {
        for platform in Platform::ALL {
            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{}\"", platform.as_str()));
        }
    }
}
