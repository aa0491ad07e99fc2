//! Stock ledger tests
//!
//! Tests for movement application including:
//! - Stock never goes negative
//! - IN adds exactly the requested quantity
//! - OUT beyond the balance clamps at zero

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::{apply_movement, MovementType, Product, User, UserRole};

fn product(stock: u32) -> Product {
    Product {
        id: "p1".into(),
        sku: "V254-001".into(),
        name: "Wireless Earbuds".into(),
        barcode: "123456789".into(),
        category: "Audio".into(),
        supplier: "Global Imports Ltd".into(),
        cost_price: Decimal::from(1500),
        sell_price: Decimal::from(3000),
        stock,
        low_stock_threshold: 10,
        expiry_date: None,
        image_path: None,
    }
}

fn operator() -> User {
    User {
        id: "u1".into(),
        name: "Admin User".into(),
        email: "admin@v254.com".into(),
        role: UserRole::Admin,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn test_stock_in_scenario() {
    let (updated, movement) =
        apply_movement(&product(4), 6, MovementType::In, "Restock", &operator(), Utc::now()).unwrap();
    assert_eq!(updated.stock, 10);
    assert_eq!(movement.balance_after, 10);
    assert_eq!(movement.movement_type, MovementType::In);
}

#[test]
fn test_stock_out_beyond_balance() {
    let (updated, movement) =
        apply_movement(&product(4), 50, MovementType::Out, "Sale", &operator(), Utc::now()).unwrap();
    assert_eq!(updated.stock, 0);
    assert_eq!(movement.balance_after, 0);
    assert_eq!(movement.quantity, 50);
}

#[test]
fn test_stock_in_saturates() {
    let (updated, _) =
        apply_movement(&product(u32::MAX - 1), 10, MovementType::In, "Restock", &operator(), Utc::now())
            .unwrap();
    assert_eq!(updated.stock, u32::MAX);
}

// ============================================================================
// Property-Based Tests
// ============================================================================

fn movement_type_strategy() -> impl Strategy<Value = MovementType> {
    prop_oneof![
        Just(MovementType::In),
        Just(MovementType::Out),
        Just(MovementType::Adjust),
    ]
}

proptest! {
    /// balance_after always equals the product's new stock
    #[test]
    fn prop_balance_after_matches_stock(
        stock in 0u32..10_000,
        quantity in 1u32..10_000,
        kind in movement_type_strategy()
    ) {
        let (updated, movement) =
            apply_movement(&product(stock), quantity, kind, "reason", &operator(), Utc::now()).unwrap();
        prop_assert_eq!(updated.stock, movement.balance_after);
    }

    /// IN with quantity q on stock s yields s + q
    #[test]
    fn prop_stock_in_adds(stock in 0u32..1_000_000, quantity in 1u32..1_000_000) {
        let (updated, _) =
            apply_movement(&product(stock), quantity, MovementType::In, "Restock", &operator(), Utc::now()).unwrap();
        prop_assert_eq!(updated.stock, stock + quantity);
    }

    /// OUT yields max(0, s - q)
    #[test]
    fn prop_stock_out_clamps(stock in 0u32..10_000, quantity in 1u32..20_000) {
        let (updated, _) =
            apply_movement(&product(stock), quantity, MovementType::Out, "Sale", &operator(), Utc::now()).unwrap();
        let expected = if quantity > stock { 0 } else { stock - quantity };
        prop_assert_eq!(updated.stock, expected);
    }

    /// Any sequence of movements keeps a consistent, non-negative balance
    #[test]
    fn prop_sequence_tracks_running_balance(
        steps in prop::collection::vec((movement_type_strategy(), 0u32..500), 1..50)
    ) {
        let user = operator();
        let mut current = product(20);
        let mut expected: i64 = 20;

        for (kind, quantity) in steps {
            match apply_movement(&current, quantity, kind, "step", &user, Utc::now()) {
                Some((updated, movement)) => {
                    expected = if kind == MovementType::In {
                        expected + i64::from(quantity)
                    } else {
                        (expected - i64::from(quantity)).max(0)
                    };
                    prop_assert_eq!(i64::from(movement.balance_after), expected);
                    current = updated;
                }
                None => {
                    prop_assert_eq!(quantity, 0);
                }
            }
        }
        prop_assert_eq!(i64::from(current.stock), expected);
    }
}
