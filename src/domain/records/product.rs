//! Catalog product

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{Money, Quantity, Sku};
use crate::listing::field::{FieldValue, Record};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    sku: Sku,
    name: String,
    #[serde(default)]
    description: String,
    category: String,
    price: Money,
    #[serde(default)]
    sale_price: Option<Money>,
    #[serde(default)]
    colors: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    stock: Quantity,
    #[serde(default)]
    status: ProductStatus,
    created_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus { #[default] Draft, Active, Archived }

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self { Self::Draft => "draft", Self::Active => "active", Self::Archived => "archived" }
    }
}

impl Product {
    pub fn create(sku: Sku, name: impl Into<String>, category: impl Into<String>, price: Money) -> Self {
        Self {
            id: Uuid::now_v7().to_string(), sku, name: name.into(), description: String::new(),
            category: category.into(), price, sale_price: None, colors: vec![], tags: vec![],
            stock: Quantity::default(), status: ProductStatus::Active, created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self { self.description = description.into(); self }
    pub fn with_sale_price(mut self, price: Money) -> Self { self.sale_price = Some(price); self }
    pub fn with_colors(mut self, colors: &[&str]) -> Self { self.colors = colors.iter().map(|c| c.to_string()).collect(); self }
    pub fn with_tags(mut self, tags: &[&str]) -> Self { self.tags = tags.iter().map(|t| t.to_string()).collect(); self }
    pub fn with_stock(mut self, stock: u32) -> Self { self.stock = Quantity::new(stock); self }
    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self { self.created_at = at; self }

    pub fn sku(&self) -> &Sku { &self.sku }
    pub fn name(&self) -> &str { &self.name }
    pub fn category(&self) -> &str { &self.category }
    pub fn colors(&self) -> &[String] { &self.colors }
    pub fn status(&self) -> ProductStatus { self.status }
    pub fn is_in_stock(&self) -> bool { !self.stock.is_zero() }
    pub fn is_on_sale(&self) -> bool { self.sale_price.is_some() }

    /// The price a shopper pays: the sale price when one is set.
    pub fn effective_price(&self) -> &Money { self.sale_price.as_ref().unwrap_or(&self.price) }
}

impl Record for Product {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "description", "sku"];

    fn id(&self) -> &str { &self.id }
    fn title(&self) -> &str { &self.name }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "id" => FieldValue::Text(&self.id),
            "sku" => FieldValue::Text(self.sku.as_str()),
            "name" => FieldValue::Text(&self.name),
            "description" => FieldValue::Text(&self.description),
            "category" => FieldValue::Text(&self.category),
            "status" => FieldValue::Text(self.status.as_str()),
            "price" => FieldValue::Number(self.effective_price().amount()),
            "list_price" => FieldValue::Number(self.price.amount()),
            "stock" => FieldValue::Number(self.stock.as_decimal()),
            "colors" => FieldValue::List(&self.colors),
            "tags" => FieldValue::List(&self.tags),
            "created_at" => FieldValue::Timestamp(self.created_at),
            _ => return None,
        })
    }

    fn price(&self) -> Option<Decimal> { Some(self.effective_price().amount()) }
    fn created_at(&self) -> Option<DateTime<Utc>> { Some(self.created_at) }
}
