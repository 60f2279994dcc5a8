//! Customer product review

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::listing::field::{FieldValue, Record};
use crate::ListingError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct Review {
    id: String,
    product_name: String,
    #[validate(length(min = 1, max = 120))]
    customer: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    comment: String,
    #[validate(range(min = 1, max = 5))]
    rating: u8,
    #[serde(default)]
    status: ReviewStatus,
    created_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus { #[default] Pending, Approved, Rejected }

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self { Self::Pending => "pending", Self::Approved => "approved", Self::Rejected => "rejected" }
    }
}

impl Review {
    pub fn submit(product_name: impl Into<String>, customer: impl Into<String>, rating: u8, comment: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(), product_name: product_name.into(), customer: customer.into(),
            comment: comment.into(), rating, status: ReviewStatus::Pending, created_at: Utc::now(),
        }
    }

    pub fn approve(&mut self) { self.status = ReviewStatus::Approved; }
    pub fn reject(&mut self) { self.status = ReviewStatus::Rejected; }

    pub fn rating(&self) -> u8 { self.rating }
    pub fn status(&self) -> ReviewStatus { self.status }
    pub fn customer(&self) -> &str { &self.customer }
}

impl Record for Review {
    const SEARCH_FIELDS: &'static [&'static str] = &["product_name", "customer", "comment"];

    fn id(&self) -> &str { &self.id }
    fn title(&self) -> &str { &self.product_name }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "id" => FieldValue::Text(&self.id),
            "product_name" => FieldValue::Text(&self.product_name),
            "customer" => FieldValue::Text(&self.customer),
            "comment" => FieldValue::Text(&self.comment),
            "rating" => FieldValue::Number(Decimal::from(self.rating)),
            "status" => FieldValue::Text(self.status.as_str()),
            "created_at" => FieldValue::Timestamp(self.created_at),
            _ => return None,
        })
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
    fn test_rating_out_of_range_fails_check() {
        assert!(Review::submit("Kimono", "Yui", 5, "Beautiful silk").check().is_ok());
        assert!(matches!(Review::submit("Kimono", "Yui", 0, "").check(), Err(ListingError::InvalidRecord(_))));
        assert!(Review::submit("Kimono", "", 3, "").check().is_err());
    }

    #[test]
    fn test_exact_rating_filter() {
        let reviews = vec![Review::submit("Kimono", "Yui", 5, "Beautiful silk"), Review::submit("Obi", "Lan", 3, "")];
        let out = apply_filters(&reviews, &[FilterCriterion::equals("rating", "5")]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].rating(), 5);
        assert!(apply_filters(&reviews, &[FilterCriterion::equals("rating", "top")]).is_empty());
    }

    #[test]
    fn test_pending_low_ratings() {
        let mut good = Review::submit("Yukata", "An", 5, "Great fit");
        good.approve();
        let reviews = vec![good, Review::submit("Obi", "Hoa", 2, "Colour faded"), Review::submit("Obi", "Lan", 4, "Nice")];
        let criteria = [FilterCriterion::equals("status", "pending"), FilterCriterion::at_most("rating", 3i64)];
        let out = apply_filters(&reviews, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].customer(), "Hoa");
    }
}
