//! Sort comparator registry

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::field::Record;

/// Sort options offered by listing pages. Anything unrecognised is `Unsorted`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    PriceLow,
    PriceHigh,
    Name,
    Newest,
    Oldest,
    #[default]
    Unsorted,
}

pub type Comparator<R> = fn(&R, &R) -> Ordering;

impl SortKey {
    pub const OPTIONS: [SortKey; 5] = [Self::PriceLow, Self::PriceHigh, Self::Name, Self::Newest, Self::Oldest];

    pub fn parse(key: &str) -> Self {
        Self::OPTIONS.into_iter().find(|k| k.as_str() == key.trim()).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Name => "name",
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Unsorted => "none",
        }
    }

    pub fn comparator<R: Record>(self) -> Comparator<R> {
        match self {
            Self::PriceLow => by_price_asc::<R>,
            Self::PriceHigh => by_price_desc::<R>,
            Self::Name => by_name::<R>,
            Self::Newest => by_newest::<R>,
            Self::Oldest => by_oldest::<R>,
            Self::Unsorted => unordered::<R>,
        }
    }
}

impl FromStr for SortKey {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Ok(Self::parse(s)) }
}

impl From<String> for SortKey {
    fn from(key: String) -> Self { Self::parse(&key) }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self { key.as_str().to_string() }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Looks up the comparator for a sort key string; unknown keys compare everything equal.
pub fn get_comparator<R: Record>(key: &str) -> Comparator<R> {
    SortKey::parse(key).comparator()
}

/// Stable in-place sort; ties keep their incoming relative order.
pub fn sort_records<R: Record>(records: &mut [R], key: SortKey) {
    if key == SortKey::Unsorted { return; }
    records.sort_by(key.comparator::<R>());
}

// Records without a value go after those with one, whichever the direction.
fn present_first<T>(a: Option<T>, b: Option<T>, order: impl FnOnce(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => order(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn by_price_asc<R: Record>(a: &R, b: &R) -> Ordering { present_first(a.price(), b.price(), |a, b| a.cmp(&b)) }
fn by_price_desc<R: Record>(a: &R, b: &R) -> Ordering { present_first(a.price(), b.price(), |a, b| b.cmp(&a)) }
fn by_newest<R: Record>(a: &R, b: &R) -> Ordering { present_first(a.created_at(), b.created_at(), |a, b| b.cmp(&a)) }
fn by_oldest<R: Record>(a: &R, b: &R) -> Ordering { present_first(a.created_at(), b.created_at(), |a, b| a.cmp(&b)) }
fn unordered<R: Record>(_: &R, _: &R) -> Ordering { Ordering::Equal }

fn by_name<R: Record>(a: &R, b: &R) -> Ordering {
    collation_key(a.title()).cmp(&collation_key(b.title())).then_with(|| a.title().cmp(b.title()))
}

/// Primary-strength key: case folded and accents dropped, so "Áo Dài" files
/// under "a".
fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| match c { 'đ' => 'd', 'ø' => 'o', 'ł' => 'l', other => other })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::Product;
    use crate::listing::fixtures::{product, products};
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn prices(records: &[Product]) -> Vec<Decimal> { records.iter().filter_map(Record::price).collect() }

    #[test]
    fn test_price_low_and_high() {
        let mut items = vec![product("a", 500), product("b", 100), product("c", 300)];
        items.sort_by(get_comparator::<Product>("price-low"));
        assert_eq!(prices(&items), vec![Decimal::from(100), Decimal::from(300), Decimal::from(500)]);
        items.sort_by(get_comparator::<Product>("price-high"));
        assert_eq!(prices(&items), vec![Decimal::from(500), Decimal::from(300), Decimal::from(100)]);
    }

    #[rstest]
    #[case("price-low", SortKey::PriceLow)]
    #[case("newest", SortKey::Newest)]
    #[case(" name ", SortKey::Name)]
    #[case("popular", SortKey::Unsorted)]
    #[case("", SortKey::Unsorted)]
    fn test_parse(#[case] raw: &str, #[case] expected: SortKey) {
        assert_eq!(raw.parse::<SortKey>(), Ok(expected));
    }

    #[test]
    fn test_unknown_key_keeps_input_order() {
        let mut items = products();
        let before = items.clone();
        items.sort_by(get_comparator::<Product>("bestselling"));
        assert_eq!(items, before);
        sort_records(&mut items, SortKey::parse("bestselling"));
        assert_eq!(items, before);
    }

    #[test]
    fn test_sort_is_stable_for_equal_prices() {
        let mut items = vec![product("first", 200), product("cheap", 100), product("second", 200), product("third", 200)];
        sort_records(&mut items, SortKey::PriceLow);
        let order: Vec<&str> = items.iter().map(|p| p.name()).collect();
        assert_eq!(order, vec!["cheap", "first", "second", "third"]);
    }

    #[test]
    fn test_name_ignores_case() {
        let mut items = vec![product("yukata", 1), product("Obi", 1), product("kimono", 1)];
        sort_records(&mut items, SortKey::Name);
        let order: Vec<&str> = items.iter().map(|p| p.name()).collect();
        assert_eq!(order, vec!["kimono", "Obi", "yukata"]);
    }

    #[test]
    fn test_name_files_accented_titles_by_base_letter() {
        let mut items = vec![product("Yukata Summer", 1), product("Áo Dài Lụa", 1), product("Obi Belt", 1), product("Đầm Suông", 1)];
        sort_records(&mut items, SortKey::Name);
        let order: Vec<&str> = items.iter().map(|p| p.name()).collect();
        assert_eq!(order, vec!["Áo Dài Lụa", "Đầm Suông", "Obi Belt", "Yukata Summer"]);
    }

    #[test]
    fn test_name_ties_break_on_exact_title() {
        let a = product("Ao dai", 1);
        let b = product("Áo Dài", 1);
        assert_eq!(collation_key(a.name()), collation_key(b.name()));
        assert_eq!(get_comparator::<Product>("name")(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_newest_and_oldest() {
        let mut items = products();
        sort_records(&mut items, SortKey::Newest);
        assert!(items.windows(2).all(|w| w[0].created_at() >= w[1].created_at()));
        sort_records(&mut items, SortKey::Oldest);
        assert!(items.windows(2).all(|w| w[0].created_at() <= w[1].created_at()));
    }

    #[test]
    fn test_serde_uses_key_strings() {
        assert_eq!(serde_json::to_string(&SortKey::PriceHigh).unwrap(), "\"price-high\"");
        let key: SortKey = serde_json::from_str("\"whatever\"").unwrap();
        assert_eq!(key, SortKey::Unsorted);
    }
}
