//! Warehouse stock line

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Money, Quantity, Sku};
use crate::listing::field::{FieldValue, Record};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: String,
    sku: Sku,
    name: String,
    category: String,
    #[serde(default)]
    warehouse: String,
    stock: Quantity,
    #[serde(default)]
    reorder_level: Quantity,
    unit_cost: Money,
    updated_at: DateTime<Utc>,
}

/// Derived from stock against the reorder level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus { InStock, LowStock, OutOfStock }

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self { Self::InStock => "in_stock", Self::LowStock => "low_stock", Self::OutOfStock => "out_of_stock" }
    }
}

impl InventoryItem {
    pub fn new(id: impl Into<String>, sku: Sku, name: impl Into<String>, category: impl Into<String>, stock: u32, unit_cost: Money) -> Self {
        Self {
            id: id.into(), sku, name: name.into(), category: category.into(), warehouse: String::new(),
            stock: Quantity::new(stock), reorder_level: Quantity::default(), unit_cost, updated_at: Utc::now(),
        }
    }

    pub fn with_reorder_level(mut self, level: u32) -> Self { self.reorder_level = Quantity::new(level); self }
    pub fn with_warehouse(mut self, warehouse: impl Into<String>) -> Self { self.warehouse = warehouse.into(); self }

    pub fn name(&self) -> &str { &self.name }
    pub fn stock(&self) -> Quantity { self.stock }

    pub fn status(&self) -> StockStatus {
        if self.stock.is_zero() { StockStatus::OutOfStock }
        else if self.stock <= self.reorder_level { StockStatus::LowStock }
        else { StockStatus::InStock }
    }

    /// Stock valued at unit cost.
    pub fn stock_value(&self) -> Decimal { self.unit_cost.amount() * self.stock.as_decimal() }
}

impl Record for InventoryItem {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "sku"];

    fn id(&self) -> &str { &self.id }
    fn title(&self) -> &str { &self.name }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "id" => FieldValue::Text(&self.id),
            "sku" => FieldValue::Text(self.sku.as_str()),
            "name" => FieldValue::Text(&self.name),
            "category" => FieldValue::Text(&self.category),
            "warehouse" if !self.warehouse.is_empty() => FieldValue::Text(&self.warehouse),
            "status" => FieldValue::Text(self.status().as_str()),
            "stock" => FieldValue::Number(self.stock.as_decimal()),
            "unit_cost" => FieldValue::Number(self.unit_cost.amount()),
            "updated_at" => FieldValue::Timestamp(self.updated_at),
            _ => return None,
        })
    }

    fn price(&self) -> Option<Decimal> { Some(self.unit_cost.amount()) }
    fn created_at(&self) -> Option<DateTime<Utc>> { Some(self.updated_at) }
}
