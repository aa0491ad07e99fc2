//! Derived dashboard models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregates shown on the dashboard, recomputed on every read
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Sum of stock across all products (a unit count, not a SKU count)
    pub total_products: u64,
    pub low_stock_count: usize,
    pub expired_count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
    pub movements_today: usize,
}

/// A product name ranked by total OUT quantity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BestSeller {
    pub name: String,
    pub qty: u64,
}
