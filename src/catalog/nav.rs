use crate::catalog::ROSTER_SIZE;

/// Pagination window of the list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: ROSTER_SIZE,
            offset: 0,
        }
    }
}

/// Inclusive id range covered by a page. Detail navigation wraps within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub first: u32,
    pub last: u32,
}

impl Default for IdRange {
    fn default() -> Self {
        Self::for_page(Page::default())
    }
}

impl IdRange {
    /// Ids are 1-based, so `offset` 0 starts at id 1.
    pub fn for_page(page: Page) -> Self {
        let first = page.offset.saturating_add(1);
        let last = page.offset.saturating_add(page.limit.max(1));
        Self { first, last }
    }

    pub fn contains(&self, id: u32) -> bool {
        (self.first..=self.last).contains(&id)
    }

    pub fn previous(&self, id: u32) -> u32 {
        if id > self.first && id <= self.last {
            id - 1
        } else {
            self.last
        }
    }

    pub fn next(&self, id: u32) -> u32 {
        if id >= self.first && id < self.last {
            id + 1
        } else {
            self.first
        }
    }
}
