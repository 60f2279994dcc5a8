//! Predicate library
//!
//! Every predicate is a pure test of one record field against one criterion.
//! Absent fields and type mismatches are "no match", never an error.

use std::cmp::Ordering;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::criterion::{FilterCriterion, Operator, RangeValue, SetMatch, UpperBound};
use super::field::{FieldValue, Record};

/// Strict equality, used for category, status, type and rating filters.
/// Numeric fields compare by value, so `"5"` matches a rating of 5 and a
/// value that is not a number matches nothing.
pub fn equals(field: Option<FieldValue<'_>>, expected: &str) -> bool {
    match field {
        Some(FieldValue::Number(n)) => Decimal::from_str(expected.trim()).is_ok_and(|e| e == n),
        other => other.and_then(|f| f.as_text()) == Some(expected),
    }
}

/// `min <= value <= max` (or `< max` when the upper bound is exclusive).
/// A missing bound leaves that side open.
pub fn in_range(field: Option<FieldValue<'_>>, min: Option<RangeValue>, max: Option<RangeValue>, upper: UpperBound) -> bool {
    let Some(value) = field else { return false };
    let above_min = match min {
        None => true,
        Some(bound) => matches!(compare(value, bound), Some(Ordering::Greater | Ordering::Equal)),
    };
    let below_max = match max {
        None => true,
        Some(bound) => match compare(value, bound) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => upper == UpperBound::Inclusive,
            _ => false,
        },
    };
    above_min && below_max
}

fn compare(value: FieldValue<'_>, bound: RangeValue) -> Option<Ordering> {
    match (value, bound) {
        (FieldValue::Number(a), RangeValue::Number(b)) => Some(a.cmp(&b)),
        (FieldValue::Timestamp(a), RangeValue::Timestamp(b)) => Some(a.cmp(&b)),
        _ => None,
    }
}

/// Case-insensitive substring test.
pub fn contains_text(haystack: &str, needle: &str) -> bool {
    contains_lowered(haystack, &needle.to_lowercase())
}

fn contains_lowered(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// True if any element of a list field matches `needle`, case-insensitively.
/// A plain text field is treated as a one-element list.
pub fn any_of(field: Option<FieldValue<'_>>, needle: &str, matching: SetMatch) -> bool {
    any_of_lowered(field, &needle.to_lowercase(), matching)
}

fn any_of_lowered(field: Option<FieldValue<'_>>, needle: &str, matching: SetMatch) -> bool {
    let hit = |item: &str| match matching {
        SetMatch::Exact => item.to_lowercase() == needle,
        SetMatch::Substring => contains_lowered(item, needle),
    };
    match field {
        Some(FieldValue::List(items)) => items.iter().any(|item| hit(item)),
        Some(FieldValue::Text(item)) => hit(item),
        _ => false,
    }
}

fn field_contains(field: Option<FieldValue<'_>>, needle: &str) -> bool {
    match field {
        Some(FieldValue::Text(s)) => contains_lowered(s, needle),
        Some(FieldValue::List(items)) => items.iter().any(|item| contains_lowered(item, needle)),
        _ => false,
    }
}

/// An active criterion, ready to run against records.
#[derive(Clone, Debug, PartialEq)]
pub enum Predicate<'c> {
    Equals { field: &'c str, value: &'c str },
    Range { field: &'c str, min: Option<RangeValue>, max: Option<RangeValue>, upper: UpperBound },
    Search { fields: &'c [String], needle: String },
    AnyOf { field: &'c str, needle: String, matching: SetMatch },
}

impl<'c> Predicate<'c> {
    /// `None` for inactive criteria (sentinel value, blank query, unbounded range).
    pub fn compile(criterion: &'c FilterCriterion) -> Option<Self> {
        if !criterion.is_active() { return None; }
        let field = criterion.field.as_str();
        Some(match &criterion.operator {
            Operator::Equals { value } => Self::Equals { field, value },
            Operator::Range { min, max, upper } => Self::Range { field, min: *min, max: *max, upper: *upper },
            Operator::Search { query, fields } => Self::Search { fields, needle: query.trim().to_lowercase() },
            Operator::AnyOf { value, matching } => Self::AnyOf { field, needle: value.to_lowercase(), matching: *matching },
        })
    }

    pub fn test<R: Record>(&self, record: &R) -> bool {
        match self {
            Self::Equals { field, value } => equals(record.field(field), value),
            Self::Range { field, min, max, upper } => in_range(record.field(field), *min, *max, *upper),
            Self::Search { fields, needle } if fields.is_empty() => {
                R::SEARCH_FIELDS.iter().any(|f| field_contains(record.field(f), needle))
            }
            Self::Search { fields, needle } => fields.iter().any(|f| field_contains(record.field(f), needle)),
            Self::AnyOf { field, needle, matching } => any_of_lowered(record.field(field), needle, *matching),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    fn price(n: i64) -> Option<FieldValue<'static>> { Some(FieldValue::Number(Decimal::from(n))) }

    #[test]
    fn test_equals_is_exact() {
        assert!(equals(Some(FieldValue::Text("kimono")), "kimono"));
        assert!(!equals(Some(FieldValue::Text("Kimono")), "kimono"));
        assert!(!equals(None, "kimono"));
    }

    #[rstest]
    #[case("5", true)]
    #[case(" 5 ", true)]
    #[case("5.0", true)]
    #[case("4", false)]
    #[case("five", false)]
    fn test_equals_on_numeric_fields(#[case] expected: &str, #[case] hit: bool) {
        assert_eq!(equals(price(5), expected), hit);
    }

    #[rstest]
    #[case(100_000, false)]
    #[case(200_000, true)]
    #[case(300_000, true)]
    #[case(500_000, true)]
    #[case(600_000, false)]
    fn test_inclusive_price_bracket(#[case] value: i64, #[case] expected: bool) {
        let hit = in_range(price(value), Some(200_000i64.into()), Some(500_000i64.into()), UpperBound::Inclusive);
        assert_eq!(hit, expected);
    }

    #[test]
    fn test_exclusive_upper_bound_drops_the_end() {
        assert!(!in_range(price(500_000), None, Some(500_000i64.into()), UpperBound::Exclusive));
        assert!(in_range(price(499_999), None, Some(500_000i64.into()), UpperBound::Exclusive));
    }

    #[test]
    fn test_range_type_mismatch_does_not_match() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap();
        assert!(!in_range(price(5), Some(ts.into()), None, UpperBound::Inclusive));
        assert!(!in_range(Some(FieldValue::Text("5")), Some(1i64.into()), None, UpperBound::Inclusive));
        assert!(!in_range(None, Some(1i64.into()), None, UpperBound::Inclusive));
    }

    #[test]
    fn test_contains_text_ignores_case() {
        assert!(contains_text("Kimono Traditional", "kimono"));
        assert!(contains_text("Áo Dài Lụa", "dài"));
        assert!(!contains_text("Yukata Summer", "kimono"));
    }

    #[test]
    fn test_any_of_over_lists_and_text() {
        let colors = vec!["Red".to_string(), "Navy Blue".to_string()];
        assert!(any_of(Some(FieldValue::List(&colors)), "red", SetMatch::Exact));
        assert!(!any_of(Some(FieldValue::List(&colors)), "blue", SetMatch::Exact));
        assert!(any_of(Some(FieldValue::List(&colors)), "blue", SetMatch::Substring));
        assert!(any_of(Some(FieldValue::Text("red")), "RED", SetMatch::Exact));
        assert!(!any_of(None, "red", SetMatch::Substring));
    }

    #[test]
    fn test_inactive_criterion_compiles_to_none() {
        assert_eq!(Predicate::compile(&FilterCriterion::equals("status", "all")), None);
        assert_eq!(
            Predicate::compile(&FilterCriterion::search("  Kimono ")),
            Some(Predicate::Search { fields: &[], needle: "kimono".to_string() })
        );
    }
}
