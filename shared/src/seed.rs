//! Seed collections used when storage holds no data yet

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::models::{MovementType, Product, StockMovement, User, UserRole};

/// Static operator list; there is no user management
pub fn initial_users() -> Vec<User> {
    vec![
        User {
            id: "u1".into(),
            name: "Admin User".into(),
            email: "admin@v254.com".into(),
            role: UserRole::Admin,
        },
        User {
            id: "u2".into(),
            name: "Staff Member".into(),
            email: "staff@v254.com".into(),
            role: UserRole::Staff,
        },
    ]
}

pub fn initial_products(now: DateTime<Utc>) -> Vec<Product> {
    vec![
        Product {
            id: "p1".into(),
            sku: "V254-001".into(),
            name: "Wireless Earbuds".into(),
            barcode: "123456789".into(),
            category: "Audio".into(),
            supplier: "Global Imports Ltd".into(),
            cost_price: Decimal::from(1500),
            sell_price: Decimal::from(3000),
            stock: 42,
            low_stock_threshold: 10,
            expiry_date: None,
            image_path: Some("https://picsum.photos/200/200?random=1".into()),
        },
        Product {
            id: "p2".into(),
            sku: "V254-002".into(),
            name: "Bluetooth Speaker".into(),
            barcode: "987654321".into(),
            category: "Audio".into(),
            supplier: "Soundworks Co".into(),
            cost_price: Decimal::from(2500),
            sell_price: Decimal::from(5500),
            stock: 4,
            low_stock_threshold: 5,
            expiry_date: None,
            image_path: Some("https://picsum.photos/200/200?random=2".into()),
        },
        Product {
            id: "p3".into(),
            sku: "V254-003".into(),
            name: "Luxury Massage Oil".into(),
            barcode: "456123789".into(),
            category: "Accessories".into(),
            supplier: "Local Wellness".into(),
            cost_price: Decimal::from(800),
            sell_price: Decimal::from(1800),
            stock: 25,
            low_stock_threshold: 10,
            expiry_date: Some(now + Duration::days(30)),
            image_path: Some("https://picsum.photos/200/200?random=3".into()),
        },
    ]
}

/// Movement history matching the seed balance of the first product
pub fn initial_movements(now: DateTime<Utc>) -> Vec<StockMovement> {
    vec![
        StockMovement {
            id: "m2".into(),
            product_id: "p1".into(),
            product_name: "Wireless Earbuds".into(),
            movement_type: MovementType::Out,
            quantity: 8,
            balance_after: 42,
            user_id: "u2".into(),
            reason: "Sale #1024".into(),
            timestamp: now - Duration::hours(1),
        },
        StockMovement {
            id: "m1".into(),
            product_id: "p1".into(),
            product_name: "Wireless Earbuds".into(),
            movement_type: MovementType::In,
            quantity: 50,
            balance_after: 50,
            user_id: "u1".into(),
            reason: "Initial Import".into(),
            timestamp: now - Duration::days(1),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_history_is_consistent_with_stock() {
        let now = Utc::now();
        let products = initial_products(now);
        let movements = initial_movements(now);

        // Most recent movement first, and its balance matches the product
        assert!(movements[0].timestamp > movements[1].timestamp);
        assert_eq!(movements[0].balance_after, products[0].stock);
    }
}
