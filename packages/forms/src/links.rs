//! Editable list of a page's links.
//!
//! Each entry carries a [`LinkId`] assigned on insertion. Ids are never reused within
//! one list, so edits and removals address exactly one row even when titles repeat.

use api::Link;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub id: LinkId,
    pub title: String,
    pub url: String,
    pub clicks: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkField {
    Title,
    Url,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkList {
    entries: Vec<LinkEntry>,
    next_id: u64,
}

impl LinkList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_links(links: Vec<Link>) -> Self {
        let mut list = Self::new();
        for link in links {
            list.push(link);
        }
        list
    }

    fn allocate(&mut self) -> LinkId {
        let id = LinkId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append an empty link and return its id.
    pub fn add(&mut self) -> LinkId {
        self.push(Link::default())
    }

    pub fn push(&mut self, link: Link) -> LinkId {
        let id = self.allocate();
        self.entries.push(LinkEntry {
            id,
            title: link.title,
            url: link.url,
            clicks: link.clicks,
        });
        id
    }

    /// Returns false when no entry has `id`.
    pub fn update(&mut self, id: LinkId, field: LinkField, value: impl Into<String>) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        match field {
            LinkField::Title => entry.title = value.into(),
            LinkField::Url => entry.url = value.into(),
        }
        true
    }

    /// Returns false when no entry has `id`.
    pub fn remove(&mut self, id: LinkId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[LinkEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_clicks(&self) -> u64 {
        self.entries.iter().map(|e| e.clicks).sum()
    }

    /// Wire form, without client ids.
    pub fn to_links(&self) -> Vec<Link> {
        self.entries
            .iter()
            .map(|e| Link {
                title: e.title.clone(),
                url: e.url.clone(),
                clicks: e.clicks,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(title: &str, clicks: u64) -> Link {
        Link {
            title: title.to_string(),
            url: format!("https://{title}.example"),
            clicks,
        }
    }

    #[test]
    fn test_remove_by_id_with_duplicate_titles() {
        let mut list = LinkList::from_links(vec![link("blog", 1), link("blog", 2)]);
        let second = list.entries()[1].id;

        assert!(list.remove(second));
        assert_eq!(list.len(), 1);
        assert_eq!(list.entries()[0].clicks, 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut list = LinkList::from_links(vec![link("blog", 0)]);
        let gone = list.add();
        assert!(list.remove(gone));
        assert!(!list.remove(gone));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut list = LinkList::new();
        let first = list.add();
        list.remove(first);
        assert_ne!(list.add(), first);
    }

    #[test]
    fn test_update_fields() {
        let mut list = LinkList::new();
        let id = list.add();
        assert!(list.update(id, LinkField::Title, "Portfolio"));
        assert!(list.update(id, LinkField::Url, "https://jane.dev"));
        assert!(!list.update(LinkId(99), LinkField::Title, "x"));

        assert_eq!(
            list.to_links(),
            vec![Link {
                title: "Portfolio".to_string(),
                url: "https://jane.dev".to_string(),
                clicks: 0
            }]
        );
    }

    #[test]
    fn test_total_clicks() {
        let list = LinkList::from_links(vec![link("a", 3), link("b", 4)]);
        assert_eq!(list.total_clicks(), 7);
    }
}
