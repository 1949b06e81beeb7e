// ── Pagination controller ──
//
// One bookkeeping struct serves both operating modes. In client mode
// the owner holds the full result set and asks for the visible slice;
// in server mode the counters mirror what the backend reported and
// `next`/`prev` answer whether a fetch is even worth issuing.

use campus_api::PageInfo;

/// Page bookkeeping: current page (1-based), page size, and totals.
///
/// Invariants, maintained by every mutator:
/// `total_pages == max(1, ceil(total_count / page_size))` in client
/// mode (server mode trusts the reported value), and
/// `1 <= current_page <= total_pages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    current_page: usize,
    page_size: usize,
    total_count: usize,
    total_pages: usize,
}

impl Paginator {
    /// Start on page 1 of an empty result set.
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_count: 0,
            total_pages: 1,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Recompute totals from a client-side result-set length.
    pub fn set_total_count(&mut self, total_count: usize) {
        self.total_count = total_count;
        self.total_pages = total_count.div_ceil(self.page_size).max(1);
        self.current_page = self.current_page.clamp(1, self.total_pages);
    }

    /// Adopt counters reported by a server-paginated response.
    pub fn apply_server(&mut self, info: &PageInfo) {
        self.total_count = info.total_count;
        self.total_pages = info.total_pages.max(1);
        self.current_page = info.current_page.clamp(1, self.total_pages);
    }

    /// Jump to a page, clamping into `[1, total_pages]`. Never fails;
    /// returns the page actually landed on.
    pub fn go_to(&mut self, page: usize) -> usize {
        self.current_page = page.clamp(1, self.total_pages);
        self.current_page
    }

    /// The next page number, or `None` at the upper bound. Server-mode
    /// owners use `None` to reject the request without a network call.
    pub fn next(&self) -> Option<usize> {
        (self.current_page < self.total_pages).then(|| self.current_page + 1)
    }

    /// The previous page number, or `None` at the lower bound.
    pub fn prev(&self) -> Option<usize> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    /// Change the page size.
    ///
    /// With `preserve_position` the page is re-derived so the item that
    /// was first on screen stays visible; otherwise the view resets to
    /// page 1. Either way the result is clamped to the new bounds.
    pub fn set_page_size(&mut self, page_size: usize, preserve_position: bool) {
        let first_visible = (self.current_page - 1) * self.page_size;
        self.page_size = page_size.max(1);
        self.total_pages = self.total_count.div_ceil(self.page_size).max(1);
        self.current_page = if preserve_position {
            (first_visible / self.page_size + 1).clamp(1, self.total_pages)
        } else {
            1
        };
    }

    /// Back to page 1 (e.g. on a new search).
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Byte-for-byte the §3 invariant: the visible slice of a
    /// client-held full list.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(items.len());
        if start >= items.len() {
            return &[];
        }
        &items[start..end]
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(20)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling_with_minimum_one() {
        let cases = [
            // (total_count, page_size, expected_pages)
            (0, 10, 1),
            (1, 10, 1),
            (10, 10, 1),
            (11, 10, 2),
            (37, 10, 4),
            (5, 1, 5),
        ];
        for (count, size, expected) in cases {
            let mut pager = Paginator::new(size);
            pager.set_total_count(count);
            assert_eq!(pager.total_pages(), expected, "count={count} size={size}");
        }
    }

    #[test]
    fn slice_length_matches_invariant() {
        let items: Vec<u32> = (0..37).collect();
        let mut pager = Paginator::new(10);
        pager.set_total_count(items.len());

        pager.go_to(1);
        assert_eq!(pager.slice(&items).len(), 10);
        pager.go_to(4);
        assert_eq!(pager.slice(&items), &[30, 31, 32, 33, 34, 35, 36]);
    }

    #[test]
    fn slice_of_empty_list_is_empty() {
        let items: Vec<u32> = Vec::new();
        let pager = Paginator::new(10);
        assert!(pager.slice(&items).is_empty());
    }

    #[test]
    fn go_to_clamps_never_errors() {
        let mut pager = Paginator::new(10);
        pager.set_total_count(25);
        assert_eq!(pager.go_to(99), 3);
        assert_eq!(pager.go_to(0), 1);
    }

    #[test]
    fn next_prev_reject_out_of_range() {
        let mut pager = Paginator::new(10);
        pager.set_total_count(25);

        assert_eq!(pager.prev(), None);
        assert_eq!(pager.next(), Some(2));
        pager.go_to(3);
        assert_eq!(pager.next(), None);
        assert_eq!(pager.prev(), Some(2));
    }

    #[test]
    fn set_page_size_preserves_first_visible_item() {
        let mut pager = Paginator::new(10);
        pager.set_total_count(100);
        pager.go_to(5); // first visible index 40

        pager.set_page_size(25, true);
        // Item 40 lives on page 2 of 25-sized pages.
        assert_eq!(pager.current_page(), 2);
        assert_eq!(pager.total_pages(), 4);
    }

    #[test]
    fn set_page_size_clamps_when_offset_exceeds_total() {
        let mut pager = Paginator::new(1);
        pager.set_total_count(9);
        pager.go_to(9); // first visible index 8

        pager.set_page_size(5, true);
        // ceil(9/5) == 2 pages; index 8 is on page 2.
        assert_eq!(pager.current_page(), 2);

        pager.set_page_size(100, true);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.total_pages(), 1);
    }

    #[test]
    fn set_page_size_can_reset_explicitly() {
        let mut pager = Paginator::new(10);
        pager.set_total_count(100);
        pager.go_to(7);
        pager.set_page_size(10, false);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn shrinking_total_clamps_current_page() {
        let mut pager = Paginator::new(10);
        pager.set_total_count(100);
        pager.go_to(10);
        pager.set_total_count(15);
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn apply_server_trusts_reported_counters() {
        let mut pager = Paginator::new(10);
        pager.apply_server(&PageInfo {
            current_page: 3,
            total_pages: 7,
            total_count: 61,
        });
        assert_eq!(pager.current_page(), 3);
        assert_eq!(pager.total_pages(), 7);
        assert_eq!(pager.total_count(), 61);
    }
}
