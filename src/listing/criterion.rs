//! Filter criteria contributed by listing controls

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sentinel meaning "this filter is off".
pub const ALL: &str = "all";

/// Key used by [`FilterCriterion::search`] so a table holds at most one search box.
pub const SEARCH_KEY: &str = "search";

/// A single filter input: a field (or control key) and the operator applied to it.
///
/// ```text
/// {"field": "category", "op": "equals", "value": "kimono"}
/// {"field": "price", "op": "range", "min": 200000, "max": 500000}
/// {"field": "search", "op": "search", "query": "yukata"}
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterCriterion {
    pub field: String,
    #[serde(flatten)]
    pub operator: Operator,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operator {
    Equals { value: String },
    Range {
        #[serde(default)]
        min: Option<RangeValue>,
        #[serde(default)]
        max: Option<RangeValue>,
        #[serde(default)]
        upper: UpperBound,
    },
    /// Case-insensitive substring match, OR across `fields`. An empty
    /// `fields` list means the record type's own searchable fields.
    Search {
        query: String,
        #[serde(default)]
        fields: Vec<String>,
    },
    /// Membership test over a list field (colors, tags, permissions).
    AnyOf {
        value: String,
        #[serde(default)]
        matching: SetMatch,
    },
}

/// Range bound; numbers and timestamps never compare with each other.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeValue {
    Number(Decimal),
    Timestamp(DateTime<Utc>),
}

impl From<Decimal> for RangeValue {
    fn from(value: Decimal) -> Self { Self::Number(value) }
}

impl From<i64> for RangeValue {
    fn from(value: i64) -> Self { Self::Number(Decimal::from(value)) }
}

impl From<DateTime<Utc>> for RangeValue {
    fn from(value: DateTime<Utc>) -> Self { Self::Timestamp(value) }
}

/// Whether the upper bound of a range is part of it: `[min, max]` or `[min, max)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpperBound {
    #[default]
    Inclusive,
    Exclusive,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetMatch {
    #[default]
    Exact,
    Substring,
}

impl FilterCriterion {
    pub fn new(field: impl Into<String>, operator: Operator) -> Self {
        Self { field: field.into(), operator }
    }

    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, Operator::Equals { value: value.into() })
    }

    pub fn range(field: impl Into<String>, min: Option<RangeValue>, max: Option<RangeValue>) -> Self {
        Self::new(field, Operator::Range { min, max, upper: UpperBound::Inclusive })
    }

    pub fn between(field: impl Into<String>, min: impl Into<RangeValue>, max: impl Into<RangeValue>) -> Self {
        Self::range(field, Some(min.into()), Some(max.into()))
    }

    pub fn at_least(field: impl Into<String>, min: impl Into<RangeValue>) -> Self {
        Self::range(field, Some(min.into()), None)
    }

    pub fn at_most(field: impl Into<String>, max: impl Into<RangeValue>) -> Self {
        Self::range(field, None, Some(max.into()))
    }

    pub fn search(query: impl Into<String>) -> Self {
        Self::new(SEARCH_KEY, Operator::Search { query: query.into(), fields: Vec::new() })
    }

    pub fn search_in(query: impl Into<String>, fields: &[&str]) -> Self {
        let fields = fields.iter().map(|f| f.to_string()).collect();
        Self::new(SEARCH_KEY, Operator::Search { query: query.into(), fields })
    }

    pub fn any_of(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, Operator::AnyOf { value: value.into(), matching: SetMatch::Exact })
    }

    /// Switches a range to `[min, max)`; other operators are returned unchanged.
    pub fn exclusive_upper(mut self) -> Self {
        if let Operator::Range { upper, .. } = &mut self.operator { *upper = UpperBound::Exclusive; }
        self
    }

    /// Switches set membership to per-element substring matching.
    pub fn substring_members(mut self) -> Self {
        if let Operator::AnyOf { matching, .. } = &mut self.operator { *matching = SetMatch::Substring; }
        self
    }

    /// Inactive criteria are dropped from the pipeline instead of being
    /// evaluated as "match everything".
    pub fn is_active(&self) -> bool {
        match &self.operator {
            Operator::Equals { value } | Operator::AnyOf { value, .. } => !is_sentinel(value),
            Operator::Range { min, max, .. } => min.is_some() || max.is_some(),
            Operator::Search { query, .. } => !query.trim().is_empty(),
        }
    }
}

pub fn is_sentinel(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case(ALL)
}

/// Relative date windows offered by activity and order listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePreset {
    Today,
    ThisWeek,
    ThisMonth,
    LastMonth,
}

impl DatePreset {
    pub const ALL: [DatePreset; 4] = [Self::Today, Self::ThisWeek, Self::ThisMonth, Self::LastMonth];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::ThisWeek => "this_week",
            Self::ThisMonth => "this_month",
            Self::LastMonth => "last_month",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }

    /// Builds the range criterion for `field` relative to `now`.
    ///
    /// The rolling presets only bound from below (`now - N days <= t`);
    /// `LastMonth` is the calendar month before `now`, `[start, end)`.
    pub fn criterion(self, field: impl Into<String>, now: DateTime<Utc>) -> FilterCriterion {
        let days = match self {
            Self::Today => 1,
            Self::ThisWeek => 7,
            Self::ThisMonth => 30,
            Self::LastMonth => {
                let (year, month) = if now.month() == 1 { (now.year() - 1, 12) } else { (now.year(), now.month() - 1) };
                let start = month_start(year, month).map(RangeValue::Timestamp);
                let end = month_start(now.year(), now.month()).map(RangeValue::Timestamp);
                return FilterCriterion::range(field, start, end).exclusive_upper();
            }
        };
        FilterCriterion::at_least(field, now - Duration::days(days))
    }
}

fn month_start(year: i32, month: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
