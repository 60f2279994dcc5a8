//! Shared records for unit tests

use chrono::{TimeZone, Utc};

use crate::domain::records::{PaymentMethod, Product, Transaction, TransactionStatus};
use crate::domain::value_objects::{Money, Sku};

pub(crate) fn product(name: &str, price: i64) -> Product {
    Product::create(Sku::new(name).unwrap(), name, "misc", Money::vnd(price))
        .with_created_at(Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap())
}

pub(crate) fn products() -> Vec<Product> {
    let at = |m, d| Utc.with_ymd_and_hms(2026, m, d, 0, 0, 0).unwrap();
    vec![
        Product::create(Sku::new("KIM-001").unwrap(), "Kimono Traditional", "kimono", Money::vnd(450_000))
            .with_description("Silk kimono with crane embroidery")
            .with_colors(&["Red", "Gold"])
            .with_stock(4)
            .with_created_at(at(9, 1)),
        Product::create(Sku::new("YKT-002").unwrap(), "Yukata Summer", "yukata", Money::vnd(250_000))
            .with_description("Light cotton yukata for summer festival nights")
            .with_colors(&["Navy Blue", "White"])
            .with_stock(12)
            .with_created_at(at(9, 15)),
        Product::create(Sku::new("AOD-003").unwrap(), "Áo Dài Lụa", "ao-dai", Money::vnd(900_000))
            .with_description("Hand-sewn silk ao dai")
            .with_colors(&["Red", "Ivory"])
            .with_created_at(at(8, 20)),
        Product::create(Sku::new("HKM-004").unwrap(), "Hakama Pleated", "kimono", Money::vnd(600_000))
            .with_description("Pleated trousers worn over kimono")
            .with_colors(&["Black"])
            .with_stock(2)
            .with_created_at(at(10, 1)),
        Product::create(Sku::new("OBI-005").unwrap(), "Obi Belt", "accessories", Money::vnd(150_000))
            .with_sale_price(Money::vnd(120_000))
            .with_colors(&["Red"])
            .with_tags(&["sale"])
            .with_stock(30)
            .with_created_at(at(10, 10)),
    ]
}

pub(crate) fn transactions() -> Vec<Transaction> {
    let at = |d| Utc.with_ymd_and_hms(2026, 10, d, 10, 0, 0).unwrap();
    use PaymentMethod::*;
    use TransactionStatus::*;
    vec![
        Transaction::new("t1", "ORD-1001", "Tanaka Yui", "yui.tanaka@mail.jp", Card, Completed, Money::vnd(900_000), at(1)),
        Transaction::new("t2", "ORD-1002", "Nguyen Van An", "nguyen.an@mail.vn", BankTransfer, Completed, Money::vnd(600_000), at(2)),
        Transaction::new("t3", "ORD-1003", "Tanaka Yui", "yui.tanaka@mail.jp", Card, Completed, Money::vnd(450_000), at(3)),
        Transaction::new("t4", "ORD-1004", "Le Thi Hoa", "hoa.le@mail.vn", Card, Failed, Money::vnd(300_000), at(4)),
        Transaction::new("t5", "ORD-1005", "Le Thi Hoa", "hoa.le@mail.vn", Wallet, Refunded, Money::vnd(200_000), at(5)),
    ]
}
