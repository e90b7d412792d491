//! Core data structures for flipbook pages.

use crate::error::{FlipbookError, Result};

/// A single page of the book.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    /// Position of the page in the book (0-based, contiguous)
    pub id: usize,
    /// Opaque resource locator (URL, path, asset key...)
    pub source_ref: String,
}

/// Ordered, immutable list of pages.
///
/// A `PageSet` always holds at least one page and its ids are exactly
/// `0..len()`.
///
/// ## Example
///
/// ```rust
/// use flipbook_core_view::PageSet;
///
/// let pages = PageSet::new(vec!["cover.jpg".into(), "p1.jpg".into()]).unwrap();
/// assert_eq!(pages.len(), 2);
/// assert_eq!(pages.get(1).unwrap().source_ref, "p1.jpg");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSet {
    pages: Vec<Page>,
}

impl PageSet {
    /// Build a page set from source references, in the given order.
    pub fn new(sources: Vec<String>) -> Result<Self> {
        if sources.is_empty() {
            return Err(FlipbookError::EmptyPageSet);
        }
        let pages = sources
            .into_iter()
            .enumerate()
            .map(|(id, source_ref)| Page { id, source_ref })
            .collect();
        Ok(Self { pages })
    }

    /// Build a page set from file names, ordered by the number in each stem.
    ///
    /// `page_10.jpg` sorts after `page_9.jpg`. Names without digits go after
    /// all numbered names, in input order; ties keep input order.
    pub fn from_file_names(names: Vec<String>) -> Result<Self> {
        let mut keyed: Vec<((bool, usize), String)> = names
            .into_iter()
            .enumerate()
            .map(|(pos, name)| {
                let key = match page_number(file_stem(&name)) {
                    Some(number) => (false, number),
                    None => (true, pos),
                };
                (key, name)
            })
            .collect();
        keyed.sort_by_key(|(key, _)| *key);
        Self::new(keyed.into_iter().map(|(_, name)| name).collect())
    }

    /// Extract a page number from a filename stem.
    ///
    /// Handles patterns like:
    /// - "page_0001" -> 1
    /// - "0042" -> 42
    /// - "scan-3" -> 3
    pub fn extract_index(stem: &str, fallback: usize) -> usize {
        page_number(stem).unwrap_or(fallback)
    }

    /// Number of pages (always at least 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false; kept for API symmetry with collections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Get the page with the given id.
    #[inline]
    pub fn get(&self, id: usize) -> Option<&Page> {
        self.pages.get(id)
    }

    /// Iterate pages in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.pages.iter()
    }
}

impl<'a> IntoIterator for &'a PageSet {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn page_number(stem: &str) -> Option<usize> {
    let digits: String = stem.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse::<usize>().ok()
}

fn file_stem(name: &str) -> &str {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    match base.rfind('.') {
        Some(dot) if dot > 0 => &base[..dot],
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_set_rejected() {
        assert!(matches!(PageSet::new(Vec::new()), Err(FlipbookError::EmptyPageSet)));
    }

    #[test]
    fn test_ids_are_contiguous() {
        let pages = PageSet::new(vec!["a".into(), "b".into(), "c".into()]).unwrap();
        let ids: Vec<usize> = pages.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(pages.get(3).is_none());
    }

    #[test]
    fn test_extract_index() {
        assert_eq!(PageSet::extract_index("page_0001", 0), 1);
        assert_eq!(PageSet::extract_index("0042", 0), 42);
        assert_eq!(PageSet::extract_index("scan-3", 0), 3);
        assert_eq!(PageSet::extract_index("cover", 99), 99);
    }

    #[test]
    fn test_from_file_names_sorts_numerically() {
        let pages = PageSet::from_file_names(vec![
            "img/page_10.jpg".into(),
            "img/page_2.jpg".into(),
            "img/page_9.jpg".into(),
        ])
        .unwrap();

        let order: Vec<&str> = pages.iter().map(|p| p.source_ref.as_str()).collect();
        assert_eq!(order, vec!["img/page_2.jpg", "img/page_9.jpg", "img/page_10.jpg"]);
        assert_eq!(pages.get(2).unwrap().id, 2);
    }

    #[test]
    fn test_unnumbered_names_sort_last() {
        let pages = PageSet::from_file_names(vec![
            "page_4.jpg".into(),
            "cover.jpg".into(),
            "page_6.jpg".into(),
            "page_1.jpg".into(),
            "page_5.jpg".into(),
            "back.jpg".into(),
        ])
        .unwrap();

        let order: Vec<&str> = pages.iter().map(|p| p.source_ref.as_str()).collect();
        assert_eq!(
            order,
            vec!["page_1.jpg", "page_4.jpg", "page_5.jpg", "page_6.jpg", "cover.jpg", "back.jpg"]
        );
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("a/b/page_3.png"), "page_3");
        assert_eq!(file_stem(".hidden"), ".hidden");
        assert_eq!(file_stem("noext"), "noext");
    }
}
