//! Payment transaction

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Money;
use crate::listing::field::{FieldValue, Record};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: String,
    order_number: String,
    customer: String,
    email: String,
    method: PaymentMethod,
    status: TransactionStatus,
    amount: Money,
    created_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod { Card, BankTransfer, Wallet, CashOnDelivery }

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self { Self::Card => "card", Self::BankTransfer => "bank_transfer", Self::Wallet => "wallet", Self::CashOnDelivery => "cash_on_delivery" }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus { Pending, Completed, Failed, Refunded }

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self { Self::Pending => "pending", Self::Completed => "completed", Self::Failed => "failed", Self::Refunded => "refunded" }
    }
}

impl Transaction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>, order_number: impl Into<String>, customer: impl Into<String>, email: impl Into<String>,
        method: PaymentMethod, status: TransactionStatus, amount: Money, created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(), order_number: order_number.into(), customer: customer.into(), email: email.into(),
            method, status, amount, created_at,
        }
    }

    pub fn customer(&self) -> &str { &self.customer }
    pub fn amount(&self) -> &Money { &self.amount }
    pub fn status(&self) -> TransactionStatus { self.status }
}

impl Record for Transaction {
    const SEARCH_FIELDS: &'static [&'static str] = &["order_number", "customer", "email"];

    fn id(&self) -> &str { &self.id }
    fn title(&self) -> &str { &self.order_number }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "id" => FieldValue::Text(&self.id),
            "order_number" => FieldValue::Text(&self.order_number),
            "customer" => FieldValue::Text(&self.customer),
            "email" => FieldValue::Text(&self.email),
            "method" => FieldValue::Text(self.method.as_str()),
            "status" => FieldValue::Text(self.status.as_str()),
            "amount" => FieldValue::Number(self.amount.amount()),
            "currency" => FieldValue::Text(self.amount.currency()),
            "created_at" => FieldValue::Timestamp(self.created_at),
            _ => return None,
        })
    }

    fn price(&self) -> Option<Decimal> { Some(self.amount.amount()) }
    fn created_at(&self) -> Option<DateTime<Utc>> { Some(self.created_at) }
}
