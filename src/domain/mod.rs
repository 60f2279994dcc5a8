//! Storefront domain: value objects and the records listed by the dashboard
pub mod records;
pub mod value_objects;
