//! Product catalog models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    /// External lookup key, not guaranteed unique
    pub barcode: String,
    pub category: String,
    pub supplier: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub cost_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub sell_price: Decimal,
    pub stock: u32,
    pub low_stock_threshold: u32,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

impl Product {
    /// Stock is at or below the alert threshold
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.low_stock_threshold
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// Expiry date is set and strictly before `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date.map_or(false, |expiry| expiry < now)
    }

    /// Value of the stock on hand at cost
    pub fn stock_value(&self) -> Decimal {
        Decimal::from(self.stock) * self.cost_price
    }
}

/// Input for adding a product to the catalog
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    /// Generated from the brand code when absent
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub cost_price: Decimal,
    pub sell_price: Decimal,
    #[serde(default)]
    pub stock: u32,
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub image_path: Option<String>,
}

/// Alert threshold used when a new product does not set one
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

fn default_low_stock_threshold() -> u32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

impl NewProduct {
    /// Minimal input with the required fields set
    pub fn new(name: impl Into<String>, sell_price: Decimal) -> Self {
        Self {
            name: name.into(),
            sku: None,
            barcode: None,
            category: String::new(),
            supplier: None,
            cost_price: Decimal::ZERO,
            sell_price,
            stock: 0,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            expiry_date: None,
            image_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn product(stock: u32, threshold: u32) -> Product {
        Product {
            id: "p1".into(),
            sku: "V254-001".into(),
            name: "Desk Lamp".into(),
            barcode: "123".into(),
            category: "Lighting".into(),
            supplier: "Acme".into(),
            cost_price: Decimal::from(1500),
            sell_price: Decimal::from(3000),
            stock,
            low_stock_threshold: threshold,
            expiry_date: None,
            image_path: None,
        }
    }

    #[test]
    fn test_low_stock_is_inclusive() {
        assert!(product(5, 5).is_low_stock());
        assert!(product(4, 5).is_low_stock());
        assert!(!product(6, 5).is_low_stock());
    }

    #[test]
    fn test_expiry_is_strict() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let mut p = product(1, 0);
        assert!(!p.is_expired(now));

        p.expiry_date = Some(now);
        assert!(!p.is_expired(now));

        p.expiry_date = Some(now - Duration::milliseconds(1));
        assert!(p.is_expired(now));
    }

    #[test]
    fn test_json_shape_matches_storage_format() {
        let json = r#"{
            "id": "p3",
            "sku": "V254-003",
            "name": "Massage Oil",
            "barcode": "456123789",
            "category": "Accessories",
            "supplier": "Local Wellness",
            "costPrice": 800,
            "sellPrice": 1800.5,
            "stock": 25,
            "lowStockThreshold": 10,
            "expiryDate": 1709294400000
        }"#;

        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.cost_price, Decimal::from(800));
        assert_eq!(p.stock, 25);
        assert_eq!(p.expiry_date.unwrap().timestamp_millis(), 1_709_294_400_000);
        assert!(p.image_path.is_none());

        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["lowStockThreshold"], 10);
        assert_eq!(value["expiryDate"], 1_709_294_400_000i64);
    }

    #[test]
    fn test_negative_stock_is_rejected_on_load() {
        let json = r#"{"id":"x","sku":"s","name":"n","barcode":"b","category":"c",
            "supplier":"s","costPrice":1,"sellPrice":2,"stock":-3,
            "lowStockThreshold":1,"expiryDate":null}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }
}
