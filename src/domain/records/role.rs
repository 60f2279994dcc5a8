//! Admin role with its permission set

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::listing::field::{FieldValue, Record};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Role {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    permissions: Vec<String>,
    #[serde(default)]
    user_count: u32,
    created_at: DateTime<Utc>,
}

impl Role {
    pub fn new(id: impl Into<String>, name: impl Into<String>, permissions: &[&str], created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(), name: name.into(), description: String::new(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(), user_count: 0, created_at,
        }
    }

    pub fn with_users(mut self, count: u32) -> Self { self.user_count = count; self }

    pub fn name(&self) -> &str { &self.name }
    pub fn permissions(&self) -> &[String] { &self.permissions }
    pub fn grants(&self, permission: &str) -> bool { self.permissions.iter().any(|p| p == permission) }
}

impl Record for Role {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "description", "permissions"];

    fn id(&self) -> &str { &self.id }
    fn title(&self) -> &str { &self.name }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "id" => FieldValue::Text(&self.id),
            "name" => FieldValue::Text(&self.name),
            "description" => FieldValue::Text(&self.description),
            "permissions" => FieldValue::List(&self.permissions),
            "user_count" => FieldValue::Number(Decimal::from(self.user_count)),
            "created_at" => FieldValue::Timestamp(self.created_at),
            _ => return None,
        })
    }

    fn created_at(&self) -> Option<DateTime<Utc>> { Some(self.created_at) }
}
