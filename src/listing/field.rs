//! Uniform field access over listing records

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// One field of a record as seen by the predicates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(Decimal),
    Timestamp(DateTime<Utc>),
    List(&'a [String]),
}

impl<'a> FieldValue<'a> {
    pub fn as_text(&self) -> Option<&'a str> {
        match self { Self::Text(s) => Some(s), _ => None }
    }
}

/// An entity that can be listed: filtered, searched, sorted and projected.
///
/// `field` returns `None` for unknown or absent fields; predicates treat that
/// as "does not match" instead of failing.
pub trait Record {
    /// Fields consulted by a search criterion that names no fields of its own.
    const SEARCH_FIELDS: &'static [&'static str];

    fn id(&self) -> &str;

    /// Display name, used by the `name` sort.
    fn title(&self) -> &str;

    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Effective price, used by the `price-low` / `price-high` sorts.
    fn price(&self) -> Option<Decimal> { None }

    /// Creation time, used by the `newest` / `oldest` sorts.
    fn created_at(&self) -> Option<DateTime<Utc>> { None }

    /// Field-level checks run before a record enters an admin table.
    fn check(&self) -> crate::Result<()> { Ok(()) }
}

/// Maps `Option<String>` fields onto `FieldValue::Text`.
pub(crate) fn opt_text(value: &Option<String>) -> Option<FieldValue<'_>> {
    value.as_deref().map(FieldValue::Text)
}
