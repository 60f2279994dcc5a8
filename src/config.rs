//! Configuration loaded from environment variables.

use std::env;

use crate::i18n::Locale;
use crate::listing::MAX_PER_PAGE;
use crate::{ListingError, Result};

/// Listing defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Locale for labels when none is requested (default: en).
    pub default_locale: Locale,

    /// Rows per page when a listing does not say (default: 20).
    pub page_size: usize,

    /// Upper bound on rows per page (default and ceiling: 100).
    pub max_page_size: usize,

    /// Size of "top N" widgets (default: 8).
    pub top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { default_locale: Locale::En, page_size: 20, max_page_size: 100, top_n: 8 }
    }
}

impl Config {
    /// Reads `STOREFRONT_LOCALE`, `STOREFRONT_PAGE_SIZE`,
    /// `STOREFRONT_MAX_PAGE_SIZE` and `STOREFRONT_TOP_N`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let number = |key: &str, default: usize| -> Result<usize> {
            match lookup(key) {
                None => Ok(default),
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ListingError::Config(format!("{key} must be a positive integer, got `{raw}`"))),
            }
        };

        let config = Self {
            default_locale: match lookup("STOREFRONT_LOCALE") {
                Some(raw) => raw.parse()?,
                None => defaults.default_locale,
            },
            page_size: number("STOREFRONT_PAGE_SIZE", defaults.page_size)?,
            max_page_size: number("STOREFRONT_MAX_PAGE_SIZE", defaults.max_page_size)?,
            top_n: number("STOREFRONT_TOP_N", defaults.top_n)?,
        };

        if config.max_page_size == 0 || config.max_page_size > MAX_PER_PAGE {
            return Err(ListingError::Config(format!("STOREFRONT_MAX_PAGE_SIZE must be between 1 and {MAX_PER_PAGE}")));
        }
        if config.page_size == 0 || config.page_size > config.max_page_size {
            return Err(ListingError::Config(format!(
                "STOREFRONT_PAGE_SIZE must be between 1 and {}",
                config.max_page_size
            )));
        }
        Ok(config)
    }

    /// Clamps a requested page size into `1..=max_page_size`.
    pub fn page_size(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.page_size).clamp(1, self.max_page_size.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Config::from_lookup(lookup(&[])).unwrap(), Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[("STOREFRONT_LOCALE", "vi"), ("STOREFRONT_TOP_N", "10")])).unwrap();
        assert_eq!(config.default_locale, Locale::Vi);
        assert_eq!(config.top_n, 10);
        assert_eq!(config.page_size(Some(500)), 100);
        assert_eq!(config.page_size(None), 20);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(Config::from_lookup(lookup(&[("STOREFRONT_TOP_N", "many")])), Err(ListingError::Config(_))));
        assert!(Config::from_lookup(lookup(&[("STOREFRONT_PAGE_SIZE", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("STOREFRONT_LOCALE", "fr")])).is_err());
    }

    #[test]
    fn test_max_page_size_never_exceeds_page_request_limit() {
        let err = Config::from_lookup(lookup(&[("STOREFRONT_MAX_PAGE_SIZE", "150")])).unwrap_err();
        assert!(matches!(err, ListingError::Config(ref msg) if msg.contains("STOREFRONT_MAX_PAGE_SIZE")));
        assert!(Config::from_lookup(lookup(&[("STOREFRONT_MAX_PAGE_SIZE", "0")])).is_err());

        let config = Config::from_lookup(lookup(&[("STOREFRONT_MAX_PAGE_SIZE", "50")])).unwrap();
        let size = config.page_size(Some(150));
        assert_eq!(size, 50);
        assert!(crate::listing::PageRequest::new(1, size).is_ok());
    }
}
