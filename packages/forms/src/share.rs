//! Public profile URLs and the share targets built from them.

use url::Url;

const TWITTER_INTENT: &str = "https://twitter.com/intent/tweet";
const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    profile: String,
}

impl ShareLinks {
    /// `{origin}/{username}` for the default page, `{origin}/{username}/{slug}` otherwise.
    pub fn new(origin: &str, username: &str, slug: Option<&str>) -> Self {
        let mut segments = vec![username];
        if let Some(slug) = slug.filter(|s| !s.is_empty()) {
            segments.push(slug);
        }
        Self {
            profile: join(origin, &segments),
        }
    }

    pub fn profile_url(&self) -> &str {
        &self.profile
    }

    pub fn twitter(&self) -> String {
        with_query(TWITTER_INTENT, "url", &self.profile)
    }

    pub fn facebook(&self) -> String {
        with_query(FACEBOOK_SHARER, "u", &self.profile)
    }
}

/// Router path of a public page, e.g. `/jane` or `/jane/work`.
pub fn public_path(username: &str, slug: Option<&str>) -> String {
    match slug.filter(|s| !s.is_empty()) {
        Some(slug) => format!("/{username}/{slug}"),
        None => format!("/{username}"),
    }
}

fn join(origin: &str, segments: &[&str]) -> String {
    let origin = origin.trim_end_matches('/');
    if let Ok(mut url) = Url::parse(origin) {
        let joined = match url.path_segments_mut() {
            Ok(mut path) => {
                path.pop_if_empty().extend(segments);
                true
            }
            Err(()) => false,
        };
        if joined {
            return url.to_string();
        }
    }
    format!("{origin}/{}", segments.join("/"))
}

fn with_query(base: &str, key: &str, value: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(value.as_bytes()).collect();
    format!("{base}?{key}={encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_url() {
        let share = ShareLinks::new("https://linkfree.tech", "jane", None);
        assert_eq!(share.profile_url(), "https://linkfree.tech/jane");
        assert_eq!(
            share.twitter(),
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Flinkfree.tech%2Fjane"
        );
        assert_eq!(
            share.facebook(),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Flinkfree.tech%2Fjane"
        );
    }

    #[test]
    fn test_slug_page_url() {
        let share = ShareLinks::new("https://links.example/", "jane", Some("work"));
        assert_eq!(share.profile_url(), "https://links.example/jane/work");
        assert_eq!(ShareLinks::new("https://links.example", "jane", Some("")).profile_url(), "https://links.example/jane");
    }

    #[test]
    fn test_join_origin_with_path_and_opaque_origin() {
        assert_eq!(join("https://host.test/app/", &["jane", "a b"]), "https://host.test/app/jane/a%20b");
        assert_eq!(join("linkfree:local", &["jane"]), "linkfree:local/jane");
    }

    #[test]
    fn test_public_path() {
        assert_eq!(public_path("jane", None), "/jane");
        assert_eq!(public_path("jane", Some("work")), "/jane/work");
    }
}
