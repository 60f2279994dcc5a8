//! Aggregates for dashboard widgets ("top customers", "top products")

use std::collections::HashMap;

use serde::Serialize;

use super::projection::top_n;
use crate::domain::value_objects::Money;
use crate::{ListingError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Ranked {
    pub key: String,
    pub total: Money,
    pub count: usize,
}

/// Groups records by `key`, sums `amount` per group and keeps the `n`
/// largest totals. Equal totals stay in first-seen order.
///
/// Fails with `MixedCurrency` when one group holds amounts in more than one
/// currency; filter on `currency` first for mixed collections.
pub fn rank_by<R>(records: &[R], key: impl Fn(&R) -> &str, amount: impl Fn(&R) -> &Money, n: usize) -> Result<Vec<Ranked>> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Ranked> = Vec::new();
    for record in records {
        let k = key(record);
        let value = amount(record);
        match slots.get(k) {
            Some(&slot) => {
                let group = &mut groups[slot];
                group.total = group.total.add(value).map_err(|_| ListingError::MixedCurrency(k.to_string()))?;
                group.count += 1;
            }
            None => {
                slots.insert(k, groups.len());
                groups.push(Ranked { key: k.to_string(), total: value.clone(), count: 1 });
            }
        }
    }
    groups.sort_by(|a, b| b.total.amount().cmp(&a.total.amount()));
    Ok(top_n(&groups, n))
}
