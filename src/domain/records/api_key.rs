//! API key issued to an integration

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::listing::field::{FieldValue, Record};
use crate::ListingError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct ApiKey {
    id: String,
    #[validate(length(min = 1, max = 64))]
    name: String,
    #[validate(length(min = 1))]
    endpoint: String,
    #[serde(default)]
    permissions: Vec<String>,
    #[serde(default)]
    status: KeyStatus,
    created_at: DateTime<Utc>,
    #[serde(default)]
    last_used_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyStatus { #[default] Active, Revoked }

impl ApiKey {
    pub fn issue(name: impl Into<String>, endpoint: impl Into<String>, permissions: &[&str]) -> Self {
        Self {
            id: Uuid::now_v7().to_string(), name: name.into(), endpoint: endpoint.into(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            status: KeyStatus::Active, created_at: Utc::now(), last_used_at: None,
        }
    }

    pub fn revoke(&mut self) { self.status = KeyStatus::Revoked; }
    pub fn touch(&mut self, at: DateTime<Utc>) { self.last_used_at = Some(at); }

    pub fn name(&self) -> &str { &self.name }
    pub fn is_active(&self) -> bool { self.status == KeyStatus::Active }
}

impl Record for ApiKey {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "endpoint"];

    fn id(&self) -> &str { &self.id }
    fn title(&self) -> &str { &self.name }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Text(&self.id)),
            "name" => Some(FieldValue::Text(&self.name)),
            "endpoint" => Some(FieldValue::Text(&self.endpoint)),
            "permissions" => Some(FieldValue::List(&self.permissions)),
            "status" => Some(FieldValue::Text(if self.is_active() { "active" } else { "revoked" })),
            "created_at" => Some(FieldValue::Timestamp(self.created_at)),
            "last_used_at" => self.last_used_at.map(FieldValue::Timestamp),
            _ => None,
        }
    }

    fn created_at(&self) -> Option<DateTime<Utc>> { Some(self.created_at) }

    fn check(&self) -> crate::Result<()> {
        self.validate().map_err(|e| ListingError::InvalidRecord(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{apply_filters, FilterCriterion};

    #[test]
    fn test_search_endpoint_and_status() {
        let mut legacy = ApiKey::issue("Legacy ERP", "/api/v1/orders", &["orders.read"]);
        legacy.revoke();
        let keys = vec![ApiKey::issue("Shipping sync", "/api/v1/shipments", &["orders.read"]), legacy];
        let out = apply_filters(&keys, &[FilterCriterion::search("v1/ORDERS")]);
        assert_eq!(out.len(), 1);
        assert!(!out[0].is_active());
        let out = apply_filters(&keys, &[FilterCriterion::equals("status", "active")]);
        assert_eq!(out[0].name(), "Shipping sync");
    }

    #[test]
    fn test_never_used_key_has_no_last_used() {
        let mut key = ApiKey::issue("POS", "/api/v1/products", &[]);
        assert_eq!(key.field("last_used_at"), None);
        key.touch(Utc::now());
        assert!(key.field("last_used_at").is_some());
        assert!(ApiKey::issue("", "/x", &[]).check().is_err());
    }
}
