//! Locale message bundles
//!
//! One table per locale, one lookup function. A key missing from the
//! requested locale falls back to the default locale, then to the key itself.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::listing::{DatePreset, SortKey};
use crate::{ListingError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Vi,
    Ja,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Self::En, Self::Vi, Self::Ja];

    pub fn as_str(&self) -> &'static str {
        match self { Self::En => "en", Self::Vi => "vi", Self::Ja => "ja" }
    }
}

impl FromStr for Locale {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == wanted)
            .ok_or_else(|| ListingError::Config(format!("unsupported locale `{s}`")))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageBundle {
    default_locale: Locale,
    messages: HashMap<Locale, HashMap<String, String>>,
}

impl MessageBundle {
    pub fn new(default_locale: Locale) -> Self {
        Self { default_locale, messages: HashMap::new() }
    }

    /// Labels for the listing controls in every supported locale.
    pub fn builtin() -> Self {
        const LABELS: &[(&str, [&str; 3])] = &[
            ("filter.all", ["All", "Tất cả", "すべて"]),
            ("sort.price-low", ["Price: low to high", "Giá: thấp đến cao", "価格の安い順"]),
            ("sort.price-high", ["Price: high to low", "Giá: cao đến thấp", "価格の高い順"]),
            ("sort.name", ["Name", "Tên", "名前順"]),
            ("sort.newest", ["Newest", "Mới nhất", "新着順"]),
            ("sort.oldest", ["Oldest", "Cũ nhất", "古い順"]),
            ("preset.today", ["Today", "Hôm nay", "今日"]),
            ("preset.this_week", ["This week", "Tuần này", "今週"]),
            ("preset.this_month", ["This month", "Tháng này", "今月"]),
            ("preset.last_month", ["Last month", "Tháng trước", "先月"]),
        ];
        let mut bundle = Self::new(Locale::En);
        for (key, texts) in LABELS {
            for (locale, text) in Locale::ALL.into_iter().zip(texts) {
                bundle.insert(locale, *key, *text);
            }
        }
        bundle
    }

    /// Parses `{"en": {"key": "text"}, "vi": {...}}`.
    pub fn from_json(default_locale: Locale, json: &str) -> Result<Self> {
        let messages: HashMap<Locale, HashMap<String, String>> = serde_json::from_str(json)?;
        Ok(Self { default_locale, messages })
    }

    pub fn default_locale(&self) -> Locale { self.default_locale }

    pub fn insert(&mut self, locale: Locale, key: impl Into<String>, text: impl Into<String>) {
        self.messages.entry(locale).or_default().insert(key.into(), text.into());
    }

    /// Adds `other`'s messages, overriding existing keys.
    pub fn merge(&mut self, other: MessageBundle) {
        for (locale, table) in other.messages {
            self.messages.entry(locale).or_default().extend(table);
        }
    }

    pub fn lookup<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        self.get(locale, key)
            .or_else(|| self.get(self.default_locale, key))
            .unwrap_or(key)
    }

    fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.messages.get(&locale)?.get(key).map(String::as_str)
    }

    pub fn sort_label(&self, locale: Locale, key: SortKey) -> String {
        self.lookup(locale, &format!("sort.{}", key.as_str())).to_string()
    }

    pub fn preset_label(&self, locale: Locale, preset: DatePreset) -> String {
        self.lookup(locale, &format!("preset.{}", preset.as_str())).to_string()
    }
}
