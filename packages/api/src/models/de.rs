//! Lenient deserializers for fields the backend encodes inconsistently.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::social::{Platform, SocialLink};

/// Accept an id sent either as a string or as a number.
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Render any scalar as the string the dashboard shows.
pub fn display<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => "0".to_string(),
        other => other.to_string(),
    })
}

/// Social links arrive as `[{platform, url}]` from the page endpoints and as
/// `{platform: url}` from the portfolio endpoint. Unknown platforms are dropped
/// and non-string urls become empty. Object keys keep the order the server sent.
pub fn social_links<'de, D>(deserializer: D) -> Result<Vec<SocialLink>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let pairs: Vec<(String, Value)> = match raw {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(mut map) => {
                    let platform = match map.remove("platform") {
                        Some(Value::String(p)) => p,
                        _ => return None,
                    };
                    Some((platform, map.remove("url").unwrap_or(Value::Null)))
                }
                _ => None,
            })
            .collect(),
        Value::Object(map) => map.into_iter().collect(),
        _ => Vec::new(),
    };

    let mut links: Vec<SocialLink> = Vec::with_capacity(pairs.len());
    for (platform, url) in pairs {
        let Ok(platform) = platform.parse::<Platform>() else {
            tracing::debug!("dropping social link for unknown platform {platform:?}");
            continue;
        };
        if links.iter().any(|l| l.platform == platform) {
            continue;
        }
        let url = match url {
            Value::String(s) => s,
            _ => String::new(),
        };
        links.push(SocialLink { platform, url });
    }
    Ok(links)
}
