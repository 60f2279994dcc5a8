//! Admin activity log entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listing::field::{opt_text, FieldValue, Record};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    id: String,
    user: String,
    email: String,
    action: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "type")]
    kind: ActivityKind,
    #[serde(default)]
    severity: Severity,
    #[serde(default)]
    ip_address: Option<String>,
    timestamp: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind { Login, Logout, Create, Update, Delete, Export, Settings }

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login", Self::Logout => "logout", Self::Create => "create", Self::Update => "update",
            Self::Delete => "delete", Self::Export => "export", Self::Settings => "settings",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity { #[default] Info, Warning, Critical }

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self { Self::Info => "info", Self::Warning => "warning", Self::Critical => "critical" }
    }
}

impl ActivityLog {
    pub fn record(user: impl Into<String>, email: impl Into<String>, kind: ActivityKind, action: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(), user: user.into(), email: email.into(), action: action.into(),
            description: String::new(), kind, severity: Severity::Info, ip_address: None, timestamp: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self { self.description = description.into(); self }
    pub fn with_severity(mut self, severity: Severity) -> Self { self.severity = severity; self }
    pub fn with_ip(mut self, ip: impl Into<String>) -> Self { self.ip_address = Some(ip.into()); self }
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self { self.timestamp = timestamp; self }

    pub fn user(&self) -> &str { &self.user }
    pub fn kind(&self) -> ActivityKind { self.kind }
    pub fn severity(&self) -> Severity { self.severity }
    pub fn timestamp(&self) -> DateTime<Utc> { self.timestamp }
}

impl Record for ActivityLog {
    const SEARCH_FIELDS: &'static [&'static str] = &["user", "email", "action", "description"];

    fn id(&self) -> &str { &self.id }
    fn title(&self) -> &str { &self.action }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Text(&self.id)),
            "user" => Some(FieldValue::Text(&self.user)),
            "email" => Some(FieldValue::Text(&self.email)),
            "action" => Some(FieldValue::Text(&self.action)),
            "description" => Some(FieldValue::Text(&self.description)),
            "type" => Some(FieldValue::Text(self.kind.as_str())),
            "severity" => Some(FieldValue::Text(self.severity.as_str())),
            "ip_address" => opt_text(&self.ip_address),
            "timestamp" | "created_at" => Some(FieldValue::Timestamp(self.timestamp)),
            _ => None,
        }
    }

    fn created_at(&self) -> Option<DateTime<Utc>> { Some(self.timestamp) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{apply_filters, DatePreset, FilterCriterion};
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_missing_ip_never_matches() {
        let log = ActivityLog::record("Admin", "admin@shop.vn", ActivityKind::Login, "Signed in");
        assert_eq!(log.field("ip_address"), None);
        assert!(apply_filters(&[log], &[FilterCriterion::equals("ip_address", "10.0.0.1")]).is_empty());
    }

    #[test]
    fn test_today_filter_with_severity() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let logs = vec![
            ActivityLog::record("A", "a@shop.vn", ActivityKind::Delete, "Deleted product").with_severity(Severity::Critical).at(now - Duration::hours(2)),
            ActivityLog::record("B", "b@shop.vn", ActivityKind::Delete, "Deleted review").with_severity(Severity::Critical).at(now - Duration::days(3)),
            ActivityLog::record("C", "c@shop.vn", ActivityKind::Update, "Edited role").at(now - Duration::hours(1)),
        ];
        let criteria = [DatePreset::Today.criterion("timestamp", now), FilterCriterion::equals("severity", "critical")];
        let out = apply_filters(&logs, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].user(), "A");
    }

    #[test]
    fn test_type_field_uses_wire_name() {
        let log: ActivityLog = serde_json::from_str(r#"{
            "id": "1", "user": "Staff", "email": "staff@shop.vn", "action": "Exported orders",
            "type": "export", "timestamp": "2026-10-18T09:00:00Z"
        }"#).unwrap();
        assert_eq!(log.field("type"), Some(FieldValue::Text("export")));
        assert_eq!(log.severity(), Severity::Info);
    }
}
