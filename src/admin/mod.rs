//! Admin dashboard building blocks
pub mod table;

pub use table::ResourceTable;
