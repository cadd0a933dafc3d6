use std::fmt;
use std::ops::Range;

/// Number of recipes requested per page
pub const PAGE_SIZE: u32 = 10;

/// One-based page counter. Page `p` covers the offset window `[(p-1)*10, p*10)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageCursor(u32);

impl PageCursor {
    pub fn first() -> Self {
        PageCursor(1)
    }

    /// Returns `None` for page 0
    pub fn new(page: u32) -> Option<Self> {
        (page >= 1).then_some(PageCursor(page))
    }

    pub fn number(self) -> u32 {
        self.0
    }

    pub fn next(self) -> Self {
        PageCursor(self.0.saturating_add(1))
    }

    /// `from..to` values sent to the API for this page
    pub fn offset_window(self) -> Range<u32> {
        let from = (self.0 - 1).saturating_mul(PAGE_SIZE);
        let to = self.0.saturating_mul(PAGE_SIZE);
        from..to
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_window() {
        assert_eq!(PageCursor::first().offset_window(), 0..10);
    }

    #[test]
    fn test_window_for_every_page() {
        for p in 1..=500 {
            let window = PageCursor::new(p).unwrap().offset_window();
            assert_eq!(window.start, (p - 1) * 10);
            assert_eq!(window.end, p * 10);
            assert_eq!(window.len(), PAGE_SIZE as usize);
        }
    }

    #[test]
    fn test_page_zero_rejected() {
        assert!(PageCursor::new(0).is_none());
    }

    #[test]
    fn test_next_increments_by_one() {
        let cursor = PageCursor::first().next().next();
        assert_eq!(cursor.number(), 3);
        assert_eq!(cursor.offset_window(), 20..30);
    }
}
