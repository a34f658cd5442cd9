/// Largest page size accepted by the search endpoint.
pub const MAX_RESULT_COUNT: u32 = 100;

/// Tracks which search page to request next.
///
/// The total page count is unknown until the first response arrives, so the
/// ceiling starts at [`MAX_RESULT_COUNT`] and is replaced by whatever the
/// server reports on every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    next: u32,
    ceiling: u32,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl PageCursor {
    pub fn new() -> Self {
        Self {
            next: 1,
            ceiling: MAX_RESULT_COUNT,
        }
    }

    /// Page to request next, or `None` once the ceiling is passed.
    pub fn next_page(&self) -> Option<u32> {
        (self.next <= self.ceiling).then_some(self.next)
    }

    /// Records the paging metadata of a response.
    ///
    /// A reported page behind the requested one still moves the cursor past
    /// the requested page, so the loop cannot stall.
    pub fn advance(&mut self, reported_page: u32, reported_pages: u32) {
        self.next = reported_page.max(self.next).saturating_add(1);
        self.ceiling = reported_pages;
    }
}
