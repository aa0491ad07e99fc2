//! Dashboard statistics derived from the product and movement collections

use std::collections::HashMap;

use chrono::{DateTime, Local, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::models::{BestSeller, DashboardStats, MovementType, Product, StockMovement};
use crate::types::start_of_day;

/// Number of entries shown in the best-sellers panel
pub const DEFAULT_BEST_SELLERS: usize = 3;

/// Compute dashboard aggregates against the local clock
pub fn compute_dashboard_stats(products: &[Product], movements: &[StockMovement]) -> DashboardStats {
    compute_dashboard_stats_at(products, movements, &Local::now())
}

/// Compute dashboard aggregates as of `now`; "today" starts at midnight in `now`'s zone
pub fn compute_dashboard_stats_at<Tz: TimeZone>(
    products: &[Product],
    movements: &[StockMovement],
    now: &DateTime<Tz>,
) -> DashboardStats {
    let instant = now.with_timezone(&Utc);
    let today = start_of_day(now);

    DashboardStats {
        total_products: products.iter().map(|p| u64::from(p.stock)).sum(),
        low_stock_count: products.iter().filter(|p| p.is_low_stock()).count(),
        expired_count: products.iter().filter(|p| p.is_expired(instant)).count(),
        total_value: products
            .iter()
            .fold(Decimal::ZERO, |acc, p| acc + p.stock_value()),
        movements_today: movements.iter().filter(|m| m.timestamp >= today).count(),
    }
}

/// Rank product names by total OUT quantity.
///
/// Sales are grouped by the name captured on each movement, so a renamed
/// product splits its history and two products sharing a name are merged.
/// Ties keep the order in which names were first seen.
pub fn compute_best_sellers(movements: &[StockMovement], top_n: usize) -> Vec<BestSeller> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<BestSeller> = Vec::new();

    for movement in movements
        .iter()
        .filter(|m| m.movement_type == MovementType::Out)
    {
        match index.get(movement.product_name.as_str()) {
            Some(&slot) => totals[slot].qty += u64::from(movement.quantity),
            None => {
                index.insert(movement.product_name.as_str(), totals.len());
                totals.push(BestSeller {
                    name: movement.product_name.clone(),
                    qty: u64::from(movement.quantity),
                });
            }
        }
    }

    // sort_by is stable
    totals.sort_by(|a, b| b.qty.cmp(&a.qty));
    totals.truncate(top_n);
    totals
}
