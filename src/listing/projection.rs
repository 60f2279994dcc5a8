//! View projection and pagination

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{ListingError, Result};

/// The `limit` records starting at `offset`. An offset past the end yields
/// an empty collection rather than an error.
pub fn project<R: Clone>(records: &[R], offset: usize, limit: usize) -> Vec<R> {
    records.iter().skip(offset).take(limit).cloned().collect()
}

/// The first `n` records, as used by "top products" style widgets.
pub fn top_n<R: Clone>(records: &[R], n: usize) -> Vec<R> {
    project(records, 0, n)
}

/// Largest `per_page` a `PageRequest` accepts.
pub const MAX_PER_PAGE: usize = 100;

/// Page-based window over a listing.
///
/// ```text
/// {"page": 2, "per_page": 20}
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PageRequest {
    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: usize,

    /// At most `MAX_PER_PAGE`
    #[serde(default = "default_per_page")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: usize,
}

fn default_page() -> usize {
    1
}

fn default_per_page() -> usize {
    20
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: default_page(), per_page: default_per_page() }
    }
}

impl PageRequest {
    pub fn new(page: usize, per_page: usize) -> Result<Self> {
        let request = Self { page, per_page };
        request.validate().map_err(|e| ListingError::InvalidQuery(e.to_string()))?;
        Ok(request)
    }

    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }
}

/// A page of records with its pagination metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<R> {
    pub data: Vec<R>,
    pub pagination: PaginationMeta,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub page: usize,
    pub limit: usize,
    /// Number of records being paged over (after filters)
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let page = page.max(1);
        // avoid division by zero
        let limit = limit.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) };
        let start = (page - 1).saturating_mul(limit);

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: start.saturating_add(limit) < total,
            has_prev: page > 1,
        }
    }
}

pub fn paginate<R: Clone>(records: &[R], request: PageRequest) -> Page<R> {
    Page {
        data: project(records, request.offset(), request.per_page),
        pagination: PaginationMeta::new(request.page, request.per_page, records.len()),
    }
}
