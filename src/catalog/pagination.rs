/// Rows per page on every paginated endpoint.
pub const PAGE_SIZE: i64 = 50;

/// A 1-based page of `PAGE_SIZE` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: i64,
}

impl Page {
    pub fn new(number: i64) -> Self {
        Self {
            number: number.max(1),
        }
    }

    pub fn limit(&self) -> i64 {
        PAGE_SIZE
    }

    pub fn offset(&self) -> i64 {
        (self.number - 1).saturating_mul(PAGE_SIZE)
    }

    /// Apply the page to rows that were already fetched and filtered.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let skip = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        items.into_iter().skip(skip).take(PAGE_SIZE as usize).collect()
    }
}
