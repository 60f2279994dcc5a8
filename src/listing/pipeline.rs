//! Filter pipeline: conjunction of the active criteria

use super::criterion::FilterCriterion;
use super::field::Record;
use super::predicate::Predicate;

/// Compiles the criteria that are switched on; sentinel and blank ones are skipped.
pub fn active_predicates(criteria: &[FilterCriterion]) -> Vec<Predicate<'_>> {
    criteria.iter().filter_map(Predicate::compile).collect()
}

/// True when every predicate passes. Stops at the first failure.
pub fn matches<R: Record>(record: &R, predicates: &[Predicate<'_>]) -> bool {
    predicates.iter().all(|p| p.test(record))
}

/// Keeps every record that passes all active criteria, in input order.
/// The source slice is never modified; the result is a fresh collection.
pub fn apply_filters<R: Record + Clone>(records: &[R], criteria: &[FilterCriterion]) -> Vec<R> {
    let predicates = active_predicates(criteria);
    if predicates.is_empty() {
        return records.to_vec();
    }
    let kept: Vec<R> = records.iter().filter(|r| matches(*r, &predicates)).cloned().collect();
    tracing::debug!(total = records.len(), active = predicates.len(), matched = kept.len(), "applied listing filters");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::Product;
    use crate::listing::criterion::DatePreset;
    use crate::listing::fixtures::{product, products};
    use chrono::{Duration, TimeZone, Utc};

    fn names(records: &[Product]) -> Vec<&str> { records.iter().map(|p| p.name()).collect() }

    #[test]
    fn test_search_kimono() {
        let catalog = products();
        let out = apply_filters(&catalog[..2], &[FilterCriterion::search("kimono")]);
        assert_eq!(names(&out), vec!["Kimono Traditional"]);
    }

    #[test]
    fn test_price_range_keeps_middle() {
        let catalog = vec![product("A", 100_000), product("B", 300_000), product("C", 600_000)];
        let out = apply_filters(&catalog, &[FilterCriterion::between("price", 200_000i64, 500_000i64)]);
        assert_eq!(names(&out), vec!["B"]);
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let catalog = products();
        assert_eq!(apply_filters(&catalog, &[]), catalog);
    }

    #[test]
    fn test_sentinel_criteria_are_skipped() {
        let catalog = products();
        let criteria = [FilterCriterion::equals("category", "all"), FilterCriterion::search("")];
        assert!(active_predicates(&criteria).is_empty());
        assert_eq!(apply_filters(&catalog, &criteria), catalog);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let catalog = products();
        let criteria = [
            FilterCriterion::equals("category", "kimono"),
            FilterCriterion::any_of("colors", "red"),
        ];
        let out = apply_filters(&catalog, &criteria);
        assert!(!out.is_empty());
        assert!(out.iter().all(|p| p.category() == "kimono" && p.colors().iter().any(|c| c.eq_ignore_ascii_case("red"))));
    }

    #[test]
    fn test_search_is_or_across_fields() {
        let catalog = products();
        // matches the description of the yukata only
        let out = apply_filters(&catalog, &[FilterCriterion::search("festival")]);
        assert_eq!(names(&out), vec!["Yukata Summer"]);
        let out = apply_filters(&catalog, &[FilterCriterion::search_in("festival", &["name"])]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_unknown_field_never_matches() {
        let catalog = products();
        assert!(apply_filters(&catalog, &[FilterCriterion::equals("warehouse", "hanoi")]).is_empty());
    }

    #[test]
    fn test_last_month_excludes_first_of_this_month() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
        let month_start = Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap();
        let a = product("Inside", 1).with_created_at(month_start - Duration::seconds(1));
        let b = product("Boundary", 1).with_created_at(month_start);
        let c = product("Before", 1).with_created_at(Utc.with_ymd_and_hms(2026, 8, 31, 23, 0, 0).unwrap());
        let out = apply_filters(&[a, b, c], &[DatePreset::LastMonth.criterion("created_at", now)]);
        assert_eq!(names(&out), vec!["Inside"]);
    }
}
