//! Pagination
//!
//! Page window computation and clamped page navigation for the data table.

/// Pages shown on either side of the current page
const WINDOW_DELTA: usize = 2;

/// Default rows per page
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Page sizes offered by the page-size selector
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 15, 25, 50, 100];

/// One entry of the page indicator strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// `ceil(total_items / page_size)`, zero for an empty page size
pub fn total_pages(page_size: usize, total_items: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Page indicators for `current` with first/last always shown and gaps collapsed
///
/// A gap hiding exactly one page shows that page instead of an ellipsis.
pub fn page_window(current: usize, page_size: usize, total_items: usize) -> Vec<PageItem> {
    let total = total_pages(page_size, total_items);
    let lower = current.saturating_sub(WINDOW_DELTA);
    let upper = current.saturating_add(WINDOW_DELTA);

    let mut items = Vec::new();
    let mut last: Option<usize> = None;
    for page in (1..=total).filter(|&i| i == 1 || i == total || (i >= lower && i <= upper)) {
        if let Some(prev) = last {
            match page - prev {
                1 => {}
                2 => items.push(PageItem::Page(prev + 1)),
                _ => items.push(PageItem::Ellipsis),
            }
        }
        items.push(PageItem::Page(page));
        last = Some(page);
    }
    items
}

/// Current page plus the inputs needed to move between pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    /// 1-based current page
    pub current: usize,
    pub page_size: usize,
    pub total_items: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_items: 0,
        }
    }
}

impl Paginator {
    pub fn new(page_size: usize, total_items: usize) -> Self {
        Self {
            current: 1,
            page_size,
            total_items,
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.page_size, self.total_items)
    }

    pub fn window(&self) -> Vec<PageItem> {
        page_window(self.current, self.page_size, self.total_items)
    }

    pub fn can_previous(&self) -> bool {
        self.current > 1
    }

    pub fn can_next(&self) -> bool {
        self.current < self.total_pages()
    }

    /// Jump to `page`, clamped into `[1, total_pages]`
    ///
    /// Returns the new page when it differs from the current one.
    pub fn go_to(&mut self, page: usize) -> Option<usize> {
        let clamped = page.clamp(1, self.total_pages().max(1));
        if clamped == self.current {
            return None;
        }
        self.current = clamped;
        Some(clamped)
    }

    pub fn next(&mut self) -> Option<usize> {
        if !self.can_next() {
            return None;
        }
        self.current += 1;
        Some(self.current)
    }

    pub fn previous(&mut self) -> Option<usize> {
        if !self.can_previous() {
            return None;
        }
        self.current -= 1;
        Some(self.current)
    }

    /// Row range `[start, end)` of the current page
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = (self.current.max(1) - 1).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size);
        start.min(self.total_items)..end.min(self.total_items)
    }
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn window_collapses_both_sides() {
        assert_eq!(
            page_window(50, 10, 1000),
            vec![Page(1), Ellipsis, Page(48), Page(49), Page(50), Page(51), Page(52), Ellipsis, Page(100)]
        );
    }

    #[test]
    fn middle_of_ten_pages() {
        // page 2 is the only page hidden before the window, so it is shown
        assert_eq!(
            page_window(5, 10, 100),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn single_hidden_page_is_shown_instead_of_ellipsis() {
        // window for page 5 starts at 3, leaving only page 2 hidden
        assert_eq!(
            page_window(5, 10, 80),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7), Page(8)]
        );
        assert_eq!(
            page_window(1, 10, 100),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn empty_and_degenerate_inputs() {
        assert!(page_window(1, 10, 0).is_empty());
        assert!(page_window(1, 0, 50).is_empty());
        assert_eq!(page_window(1, 10, 5), vec![Page(1)]);
        assert_eq!(total_pages(10, 101), 11);
    }

    #[test]
    fn navigation_is_clamped() {
        let mut pager = Paginator::new(10, 35);
        assert_eq!(pager.total_pages(), 4);
        assert_eq!(pager.previous(), None);
        assert_eq!(pager.next(), Some(2));
        assert_eq!(pager.go_to(99), Some(4));
        assert_eq!(pager.next(), None);
        assert_eq!(pager.go_to(0), Some(1));
        assert_eq!(pager.go_to(1), None);
    }

    #[test]
    fn range_covers_the_last_partial_page() {
        let mut pager = Paginator::new(10, 35);
        pager.go_to(4);
        assert_eq!(pager.range(), 30..35);
    }
}
