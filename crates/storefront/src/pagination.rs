//! Page arithmetic for the product list.
//!
//! Pages are 1-based. `total_pages = ceil(total_items / items_per_page)`, so an
//! empty list has zero pages; the current page is still reported as 1.
//!
//! The current page is clamped into `[1, max(total_pages, 1)]` whenever the
//! total or the page size changes, so a shrinking result set never leaves the
//! view pointing past its last page.

use serde::Serialize;

/// How many page links to show on each side of the current page.
const WINDOW_DELTA: u32 = 2;

/// The sub-slice of `items` shown on `page` (1-based) at `per_page` items per
/// page. Out-of-range pages yield an empty slice.
#[must_use]
pub fn page_slice<T>(items: &[T], page: u32, per_page: u32) -> &[T] {
    let per_page = per_page.max(1) as usize;
    let start = (page.max(1) as usize - 1).saturating_mul(per_page);
    let end = start.saturating_add(per_page).min(items.len());
    items.get(start..end).unwrap_or(&[])
}

/// `ceil(total / per_page)`.
#[must_use]
pub fn total_pages(total: usize, per_page: u32) -> u32 {
    let pages = total.div_ceil(per_page.max(1) as usize);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// One entry of the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// "Showing `first` to `last` of `total` results".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRange {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

/// Pagination state of a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    current_page: u32,
    items_per_page: u32,
    total_items: usize,
    total_pages: u32,
}

impl PaginationState {
    /// Empty list, first page, `items_per_page` per page (at least 1).
    #[must_use]
    pub fn new(items_per_page: u32) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            total_items: 0,
            total_pages: 0,
        }
    }

    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    #[must_use]
    pub const fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Record a new list length, recompute the page count and clamp.
    pub fn set_total_items(&mut self, total: usize) {
        self.total_items = total;
        self.total_pages = total_pages(total, self.items_per_page);
        self.current_page = self.clamp(self.current_page);
    }

    /// Jump to `page`, clamped into range.
    pub fn set_page(&mut self, page: u32) {
        self.current_page = self.clamp(page);
    }

    /// Change the page size and go back to page 1.
    pub fn set_items_per_page(&mut self, items_per_page: u32) {
        self.items_per_page = items_per_page.max(1);
        self.current_page = 1;
        self.total_pages = total_pages(self.total_items, self.items_per_page);
    }

    /// Go back to page 1.
    pub const fn reset_page(&mut self) {
        self.current_page = 1;
    }

    /// The current page's slice of `items`.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page_slice(items, self.current_page, self.items_per_page)
    }

    /// Whether pagination controls are needed at all.
    #[must_use]
    pub const fn needs_controls(&self) -> bool {
        self.total_pages > 1
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// First and last 1-based item positions on the current page.
    #[must_use]
    pub fn range(&self) -> PageRange {
        if self.total_items == 0 {
            return PageRange {
                first: 0,
                last: 0,
                total: 0,
            };
        }
        let per_page = self.items_per_page as usize;
        let start = (self.current_page as usize - 1) * per_page;
        PageRange {
            first: start + 1,
            last: (start + per_page).min(self.total_items),
            total: self.total_items,
        }
    }

    /// Page numbers to render: first and last always, up to two either side
    /// of the current page, gaps collapsed into an ellipsis. Empty when there
    /// is at most one page.
    #[must_use]
    pub fn page_numbers(&self) -> Vec<PageItem> {
        let (current, last) = (self.current_page, self.total_pages);
        if last <= 1 {
            return Vec::new();
        }

        let window_start = current.saturating_sub(WINDOW_DELTA).max(2);
        let window_end = current.saturating_add(WINDOW_DELTA).min(last - 1);

        let mut items = vec![PageItem::Page(1)];
        if window_start > 2 {
            items.push(PageItem::Ellipsis);
        }
        items.extend((window_start..=window_end).map(PageItem::Page));
        if window_end < last - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(last));
        items
    }

    fn clamp(&self, page: u32) -> u32 {
        page.clamp(1, self.total_pages.max(1))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    fn state(total: usize, per_page: u32, page: u32) -> PaginationState {
        let mut s = PaginationState::new(per_page);
        s.set_total_items(total);
        s.set_page(page);
        s
    }

    #[test]
    fn test_sixteen_by_eight() {
        let items: Vec<u32> = (1..=16).collect();
        let s = state(16, 8, 2);
        assert_eq!(s.total_pages(), 2);
        assert_eq!(s.slice(&items), &[9, 10, 11, 12, 13, 14, 15, 16]);
    }

    #[test]
    fn test_pages_concatenate_to_sequence() {
        let items: Vec<u32> = (0..23).collect();
        for per_page in 1..=10 {
            let pages = total_pages(items.len(), per_page);
            let rebuilt: Vec<u32> = (1..=pages)
                .flat_map(|p| page_slice(&items, p, per_page).iter().copied())
                .collect();
            assert_eq!(rebuilt, items, "per_page={per_page}");
        }
    }

    #[test]
    fn test_page_slice_out_of_range() {
        let items = [1, 2, 3];
        assert!(page_slice(&items, 5, 2).is_empty());
        assert_eq!(page_slice(&items, 2, 2), &[3]);
    }

    #[test]
    fn test_total_pages_empty() {
        assert_eq!(total_pages(0, 8), 0);
        let s = state(0, 8, 3);
        assert_eq!(s.current_page(), 1);
        assert!(!s.needs_controls());
    }

    #[test]
    fn test_items_per_page_resets_to_first_page() {
        let mut s = state(16, 4, 4);
        assert_eq!(s.current_page(), 4);
        s.set_items_per_page(12);
        assert_eq!(s.current_page(), 1);
        assert_eq!(s.total_pages(), 2);
    }

    #[test]
    fn test_shrinking_total_clamps_page() {
        let mut s = state(16, 4, 4);
        s.set_total_items(5);
        assert_eq!(s.total_pages(), 2);
        assert_eq!(s.current_page(), 2);
    }

    #[test]
    fn test_set_page_clamps() {
        let s = state(16, 8, 9);
        assert_eq!(s.current_page(), 2);
        let s = state(16, 8, 0);
        assert_eq!(s.current_page(), 1);
    }

    #[test]
    fn test_range() {
        assert_eq!(
            state(16, 8, 2).range(),
            PageRange {
                first: 9,
                last: 16,
                total: 16
            }
        );
        assert_eq!(state(10, 4, 3).range().last, 10);
        assert_eq!(state(0, 4, 1).range().first, 0);
    }

    #[test]
    fn test_previous_next() {
        let s = state(16, 8, 1);
        assert!(!s.has_previous());
        assert!(s.has_next());
        let s = state(16, 8, 2);
        assert!(s.has_previous());
        assert!(!s.has_next());
    }

    #[test]
    fn test_page_numbers_none_for_single_page() {
        assert!(state(5, 8, 1).page_numbers().is_empty());
    }

    #[test]
    fn test_page_numbers_two_pages() {
        assert_eq!(state(16, 8, 1).page_numbers(), vec![Page(1), Page(2)]);
    }

    #[test]
    fn test_page_numbers_windowed() {
        // 20 pages, on page 10
        assert_eq!(
            state(20, 1, 10).page_numbers(),
            vec![
                Page(1),
                Ellipsis,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Ellipsis,
                Page(20)
            ]
        );
    }

    #[test]
    fn test_page_numbers_near_edges() {
        assert_eq!(
            state(7, 1, 1).page_numbers(),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(7)]
        );
        assert_eq!(
            state(7, 1, 4).page_numbers(),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]
        );
        assert_eq!(
            state(7, 1, 7).page_numbers(),
            vec![Page(1), Ellipsis, Page(5), Page(6), Page(7)]
        );
    }
}
