use serde::Serialize;

/// Reviews shown per course page.
pub const PER_PAGE: u64 = 50;

/// Offset/limit window over a result set of known size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// 1-based page number.
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    /// `ceil(total / per_page)`; 0 for an empty result set.
    pub pages: u64,
    pub has_prev: bool,
    pub has_next: bool,
}

impl Pagination {
    /// Builds the window for `page`, clamping anything below 1 to 1.
    ///
    /// Pages past the end are allowed and simply yield no items.
    pub fn new(page: u64, per_page: u64, total: u64) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let offset = (page - 1).saturating_mul(per_page);
        let end = offset.saturating_add(per_page);

        Self {
            page,
            per_page,
            total,
            pages: total.div_ceil(per_page),
            has_prev: offset > 0,
            has_next: end < total,
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn limit(&self) -> u64 {
        self.per_page
    }
}
