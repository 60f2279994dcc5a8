//! Storefront Listings
//!
//! Client-side listing engine for the storefront and admin dashboard.
//!
//! ## Features
//! - Predicate library (equality, range, search, set membership)
//! - Filter pipeline with `"all"` sentinel handling
//! - Sort comparator registry (price, name, newest, oldest)
//! - View projection and pagination
//! - Generic admin resource tables
//! - Locale message bundles

pub mod admin;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod i18n;
pub mod listing;
pub mod session;

pub use admin::ResourceTable;
pub use config::Config;
pub use i18n::{Locale, MessageBundle};
pub use listing::{FilterCriterion, ListingQuery, Record, ResultSet, SortKey};
pub use session::Session;

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Duplicate record: {0}")]
    DuplicateRecord(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Admin session required")]
    Unauthorized,

    #[error("Amounts in more than one currency for {0}")]
    MixedCurrency(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Malformed snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ListingError>;
