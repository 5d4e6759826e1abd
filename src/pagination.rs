pub const DEFAULT_PER_PAGE: u32 = 12;
pub const PER_PAGE_CHOICES: [u32; 3] = [12, 24, 48];

/// Most page buttons shown at once.
const PAGE_WINDOW: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        let mut pagination = Self {
            page,
            per_page: per_page.max(1),
            total,
        };
        pagination.page = page.clamp(1, pagination.total_pages());
        pagination
    }

    pub fn total_pages(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(self.per_page.max(1)));
        pages.clamp(1, u64::from(u32::MAX)) as u32
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Page numbers for the button row, centred on the current page.
    pub fn window(&self) -> Vec<u32> {
        let total_pages = self.total_pages();
        let span = PAGE_WINDOW.min(total_pages);
        let start = self
            .page
            .saturating_sub(PAGE_WINDOW / 2)
            .max(1)
            .min(total_pages - span + 1);
        (start..start + span).collect()
    }

    /// 1-based inclusive range of items on this page, `(0, 0)` when empty.
    pub fn item_range(&self) -> (u64, u64) {
        if self.total == 0 {
            return (0, 0);
        }
        let per_page = u64::from(self.per_page);
        let first = u64::from(self.page - 1) * per_page + 1;
        let last = (first + per_page - 1).min(self.total);
        (first, last)
    }

    pub fn summary(&self) -> String {
        let (first, last) = self.item_range();
        format!("Showing {}-{} of {}", first, last, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn test_empty_listing() {
        let p = Pagination::new(1, 12, 0);
        assert_eq!(p.total_pages(), 1);
        assert!(!p.has_prev());
        assert!(!p.has_next());
        assert_eq!(p.window(), vec![1]);
        assert_eq!(p.summary(), "Showing 0-0 of 0");
    }

    #[test]
    fn test_exact_multiple() {
        let p = Pagination::new(2, 12, 24);
        assert_eq!(p.total_pages(), 2);
        assert!(p.has_prev());
        assert!(!p.has_next());
        assert_eq!(p.item_range(), (13, 24));
    }

    #[test]
    fn test_partial_last_page() {
        let p = Pagination::new(3, 10, 25);
        assert_eq!(p.total_pages(), 3);
        assert_eq!(p.item_range(), (21, 25));
        assert_eq!(p.summary(), "Showing 21-25 of 25");
    }

    #[test]
    fn test_page_is_clamped() {
        assert_eq!(Pagination::new(9, 10, 25).page, 3);
        assert_eq!(Pagination::new(0, 10, 25).page, 1);
        assert_eq!(Pagination::new(1, 0, 3).per_page, 1);
    }

    #[test]
    fn test_window_centres_on_current() {
        assert_eq!(Pagination::new(1, 10, 100).window(), vec![1, 2, 3, 4, 5]);
        assert_eq!(Pagination::new(6, 10, 100).window(), vec![4, 5, 6, 7, 8]);
        assert_eq!(Pagination::new(10, 10, 100).window(), vec![6, 7, 8, 9, 10]);
        assert_eq!(Pagination::new(2, 10, 30).window(), vec![1, 2, 3]);
    }
}
