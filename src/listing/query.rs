//! A complete listing request: filters, sort order and window

use serde::{Deserialize, Serialize};

use super::criterion::FilterCriterion;
use super::field::Record;
use super::pipeline::apply_filters;
use super::projection::{project, PageRequest};
use super::sort::{sort_records, SortKey};

/// Filter state, sort key and window of one listing view.
///
/// ```text
/// {
///   "criteria": [{"field": "category", "op": "equals", "value": "kimono"}],
///   "sort": "price-low",
///   "offset": 0,
///   "limit": 8
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub criteria: Vec<FilterCriterion>,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default)]
    pub offset: usize,
    /// No limit means "everything after `offset`".
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Derived view of a source collection. Rebuilt on every run, never patched.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResultSet<R> {
    pub items: Vec<R>,
    /// Records that passed the filters, before windowing
    pub matched: usize,
    /// Size of the source collection
    pub total: usize,
}

impl ListingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_criterion(mut self, criterion: FilterCriterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn window(mut self, offset: usize, limit: usize) -> Self {
        self.offset = offset;
        self.limit = Some(limit);
        self
    }

    pub fn page(self, request: PageRequest) -> Self {
        self.window(request.offset(), request.per_page)
    }

    /// Filter, then stable-sort, then slice.
    pub fn run<R: Record + Clone>(&self, records: &[R]) -> ResultSet<R> {
        let mut filtered = apply_filters(records, &self.criteria);
        sort_records(&mut filtered, self.sort);
        let items = project(&filtered, self.offset, self.limit.unwrap_or(usize::MAX));
        ResultSet { items, matched: filtered.len(), total: records.len() }
    }
}
