//! Listing pipeline: filter → sort → project
//!
//! Every listing page (catalog, activity log, inventory, transactions, roles,
//! reviews, API keys) runs the same pure computation over its in-memory
//! records. Filtering, sorting and projection never mutate the source
//! collection or fail; bad or missing fields simply do not match.

pub mod aggregate;
pub mod criterion;
pub mod field;
pub mod pipeline;
pub mod predicate;
pub mod projection;
pub mod query;
pub mod sort;

#[cfg(test)]
pub(crate) mod fixtures;

pub use aggregate::{rank_by, Ranked};
pub use criterion::{DatePreset, FilterCriterion, Operator, RangeValue, SetMatch, UpperBound, ALL, SEARCH_KEY};
pub use field::{FieldValue, Record};
pub use pipeline::{active_predicates, apply_filters, matches};
pub use predicate::Predicate;
pub use projection::{paginate, project, top_n, Page, PageRequest, PaginationMeta, MAX_PER_PAGE};
pub use query::{ListingQuery, ResultSet};
pub use sort::{get_comparator, sort_records, Comparator, SortKey};
