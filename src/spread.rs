//! Two-page spread mapping.

/// How many pages are shown per view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewMode {
    /// One page at a time
    #[default]
    Single,
    /// Two facing pages at a time
    Spread,
}

impl ViewMode {
    /// Number of pages shown per view (1 or 2).
    #[inline]
    pub fn pages_per_view(self) -> usize {
        match self {
            ViewMode::Single => 1,
            ViewMode::Spread => 2,
        }
    }

    /// Map a `pages_per_view` setting to a view mode.
    pub fn from_pages_per_view(pages: u8) -> Option<Self> {
        match pages {
            1 => Some(ViewMode::Single),
            2 => Some(ViewMode::Spread),
            _ => None,
        }
    }
}

/// Read-only mapping from spread index `s` to pages `(2s, 2s + 1)`.
///
/// ## Example
///
/// ```rust
/// use flipbook_core_view::SpreadPolicy;
///
/// let policy = SpreadPolicy::new(5);
/// assert_eq!(policy.spread_count(), 3);
/// assert_eq!(policy.pages(1), Some((2, Some(3))));
/// assert_eq!(policy.pages(2), Some((4, None)));
/// assert_eq!(policy.pages(3), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpreadPolicy {
    page_count: usize,
}

impl SpreadPolicy {
    pub fn new(page_count: usize) -> Self {
        Self { page_count }
    }

    #[inline]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// `ceil(page_count / 2)`
    #[inline]
    pub fn spread_count(&self) -> usize {
        self.page_count.div_ceil(2)
    }

    /// Pages shown by a spread; the second is omitted past the last page.
    pub fn pages(&self, spread: usize) -> Option<(usize, Option<usize>)> {
        if spread >= self.spread_count() {
            return None;
        }
        let left = spread * 2;
        let right = left + 1;
        Some((left, (right < self.page_count).then_some(right)))
    }

    /// Spread containing the given page.
    #[inline]
    pub fn spread_of(&self, page: usize) -> usize {
        page / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spread_count() {
        assert_eq!(SpreadPolicy::new(1).spread_count(), 1);
        assert_eq!(SpreadPolicy::new(4).spread_count(), 2);
        assert_eq!(SpreadPolicy::new(10).spread_count(), 5);
        assert_eq!(SpreadPolicy::new(11).spread_count(), 6);
    }

    #[test]
    fn test_last_spread_of_odd_book() {
        let policy = SpreadPolicy::new(11);
        assert_eq!(policy.pages(5), Some((10, None)));
        assert_eq!(policy.pages(4), Some((8, Some(9))));
    }

    #[test]
    fn test_spread_of() {
        let policy = SpreadPolicy::new(10);
        assert_eq!(policy.spread_of(0), 0);
        assert_eq!(policy.spread_of(1), 0);
        assert_eq!(policy.spread_of(7), 3);
    }

    #[test]
    fn test_view_mode_from_pages_per_view() {
        assert_eq!(ViewMode::from_pages_per_view(1), Some(ViewMode::Single));
        assert_eq!(ViewMode::from_pages_per_view(2), Some(ViewMode::Spread));
        assert_eq!(ViewMode::from_pages_per_view(3), None);
        assert_eq!(ViewMode::Spread.pages_per_view(), 2);
    }
}
