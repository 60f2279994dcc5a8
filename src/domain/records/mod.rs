//! Listable records
pub mod product;
pub mod activity;
pub mod inventory;
pub mod transaction;
pub mod role;
pub mod review;
pub mod api_key;

pub use product::{Product, ProductStatus};
pub use activity::{ActivityKind, ActivityLog, Severity};
pub use inventory::{InventoryItem, StockStatus};
pub use transaction::{PaymentMethod, Transaction, TransactionStatus};
pub use role::Role;
pub use review::{Review, ReviewStatus};
pub use api_key::{ApiKey, KeyStatus};
