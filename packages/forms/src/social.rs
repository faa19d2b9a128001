//! A page's social icons: at most one URL per [`Platform`], in insertion order.

use api::{Platform, SocialLink};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    links: Vec<SocialLink>,
}

impl SocialLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first entry for each platform.
    pub fn from_links(links: Vec<SocialLink>) -> Self {
        let mut social = Self::new();
        for link in links {
            if social.add(link.platform) {
                social.set_url(link.platform, link.url);
            }
        }
        social
    }

    /// Append `platform` with an empty URL. No-op (returns false) if already present.
    pub fn add(&mut self, platform: Platform) -> bool {
        if self.contains(platform) {
            return false;
        }
        self.links.push(SocialLink {
            platform,
            url: String::new(),
        });
        true
    }

    pub fn set_url(&mut self, platform: Platform, url: impl Into<String>) -> bool {
        match self.links.iter_mut().find(|l| l.platform == platform) {
            Some(link) => {
                link.url = url.into();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, platform: Platform) -> bool {
        let before = self.links.len();
        self.links.retain(|l| l.platform != platform);
        self.links.len() != before
    }

    pub fn contains(&self, platform: Platform) -> bool {
        self.links.iter().any(|l| l.platform == platform)
    }

    pub fn get(&self, platform: Platform) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.platform == platform)
            .map(|l| l.url.as_str())
    }

    /// Platforms the "add" menu may still offer, in picker order.
    pub fn unused_platforms(&self) -> Vec<Platform> {
        Platform::ALL
            .into_iter()
            .filter(|p| !self.contains(*p))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SocialLink> {
        self.links.iter()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn to_links(&self) -> Vec<SocialLink> {
        self.links.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_github_once() {
        let mut social = SocialLinks::new();
        assert!(social.add(Platform::Github));
        assert_eq!(social.len(), 1);
        assert_eq!(social.get(Platform::Github), Some(""));

        assert!(!social.add(Platform::Github));
        assert_eq!(social.len(), 1);
    }

    #[test]
    fn test_unused_platforms_shrink() {
        let mut social = SocialLinks::new();
        social.add(Platform::Mail);
        social.add(Platform::Twitter);

        let unused = social.unused_platforms();
        assert_eq!(unused.len(), 4);
        assert!(!unused.contains(&Platform::Mail));
        assert_eq!(unused[0], Platform::Whatsapp);
    }

    #[test]
    fn test_set_url_and_remove() {
        let mut social = SocialLinks::new();
        social.add(Platform::Linkedin);
        assert!(social.set_url(Platform::Linkedin, "https://linkedin.com/in/jane"));
        assert!(!social.set_url(Platform::Instagram, "x"));

        assert!(social.remove(Platform::Linkedin));
        assert!(!social.remove(Platform::Linkedin));
        assert!(social.is_empty());
    }

    #[test]
    fn test_from_links_drops_duplicates() {
        let social = SocialLinks::from_links(vec![
            SocialLink { platform: Platform::Github, url: "a".to_string() },
            SocialLink { platform: Platform::Github, url: "b".to_string() },
        ]);
        assert_eq!(social.to_links().len(), 1);
        assert_eq!(social.get(Platform::Github), Some("a"));
    }
}
