//! Page-number window shown by pagination controls.
//!
//! Page links are grouped in blocks of ten: page 7 shows links 1..=10,
//! page 11 shows 11..=20. The window is clamped to the last page, and
//! `next` is true while rows remain beyond the window's last page.

use serde::Serialize;

use crate::search::{SearchError, SearchResult};

/// Number of page links in one block.
pub const PAGE_BLOCK: usize = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
    pub prev: bool,
    pub next: bool,
}

impl PageWindow {
    /// Computes the window for `page` (1-based) given `size` rows per page and
    /// `total` matching rows.
    ///
    /// A page past the last block yields `start > end`; callers normalise the
    /// page before asking for a window when that matters.
    pub fn compute(page: usize, size: usize, total: usize) -> SearchResult<Self> {
        if size == 0 {
            return Err(SearchError::InvalidPagination(
                "page size must be greater than zero".to_string(),
            ));
        }
        if page == 0 {
            return Err(SearchError::InvalidPagination(
                "page must be at least 1".to_string(),
            ));
        }

        let block_end = page.div_ceil(PAGE_BLOCK) * PAGE_BLOCK;
        let start = block_end - (PAGE_BLOCK - 1);
        let last = total.div_ceil(size);
        let end = block_end.min(last);

        Ok(Self {
            start,
            end,
            prev: start > 1,
            next: total > end * size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_block_without_next() {
        let window = PageWindow::compute(1, 10, 95).expect("valid window");
        assert_eq!(
            window,
            PageWindow {
                start: 1,
                end: 10,
                prev: false,
                next: false,
            }
        );
    }

    #[test]
    fn second_block_with_next() {
        let window = PageWindow::compute(11, 10, 250).expect("valid window");
        assert_eq!(
            window,
            PageWindow {
                start: 11,
                end: 20,
                prev: true,
                next: true,
            }
        );
    }

    #[test]
    fn end_is_clamped_to_last_page() {
        let window = PageWindow::compute(3, 10, 42).expect("valid window");
        assert_eq!(window.start, 1);
        assert_eq!(window.end, 5);
        assert!(!window.next);
    }

    #[test]
    fn next_compares_total_with_window_rows() {
        // 101 rows of 10: last page is 11, the first window ends at 10.
        let window = PageWindow::compute(10, 10, 101).expect("valid window");
        assert_eq!(window.end, 10);
        assert!(window.next);

        let exact = PageWindow::compute(10, 10, 100).expect("valid window");
        assert!(!exact.next);
    }

    #[test]
    fn zero_total_degenerates() {
        let window = PageWindow::compute(1, 10, 0).expect("valid window");
        assert_eq!(window.end, 0);
        assert!(!window.prev);
        assert!(!window.next);
    }

    #[test]
    fn rejects_zero_size_and_page() {
        assert!(matches!(
            PageWindow::compute(1, 0, 10),
            Err(SearchError::InvalidPagination(_))
        ));
        assert!(matches!(
            PageWindow::compute(0, 10, 10),
            Err(SearchError::InvalidPagination(_))
        ));
    }

    #[test]
    fn page_past_last_block_keeps_block_start() {
        // One row, so the last page is 1; page 11 still opens block 11..=20.
        let window = PageWindow::compute(11, 10, 1).expect("valid window");
        assert_eq!(
            window,
            PageWindow {
                start: 11,
                end: 1,
                prev: true,
                next: false,
            }
        );
        assert!(window.start > window.end);
    }

    #[test]
    fn window_invariants_hold_for_pages_in_range() {
        for size in [1usize, 3, 10, 25] {
            for total in [1usize, 9, 10, 11, 99, 100, 101, 257] {
                let last = total.div_ceil(size);
                for page in 1..=last {
                    let window = PageWindow::compute(page, size, total).expect("valid window");
                    assert!(window.start <= window.end, "page {page} size {size} total {total}");
                    assert!(window.end <= last);
                    assert_eq!(window.prev, window.start > 1);
                    assert_eq!(window.next, total > window.end * size);
                }
            }
        }
    }
}
