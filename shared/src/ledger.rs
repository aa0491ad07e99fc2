//! Stock ledger: applies movements to product balances

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{MovementType, Product, StockMovement, User};

/// Apply a stock movement to a product.
///
/// Returns the updated product together with the movement record, or `None`
/// when `quantity` is zero. IN adds to stock; OUT and ADJUST subtract and
/// clamp at zero. The record keeps the requested quantity even when the
/// decrement was clamped, so `balance_after` is the only reliable delta.
pub fn apply_movement(
    product: &Product,
    quantity: u32,
    movement_type: MovementType,
    reason: &str,
    actor: &User,
    at: DateTime<Utc>,
) -> Option<(Product, StockMovement)> {
    if quantity == 0 {
        tracing::debug!(product_id = %product.id, "Ignoring movement with zero quantity");
        return None;
    }

    let new_stock = if movement_type.is_inbound() {
        product.stock.saturating_add(quantity)
    } else {
        if quantity > product.stock {
            tracing::warn!(
                product_id = %product.id,
                requested = quantity,
                available = product.stock,
                "Stock out exceeds balance, clamping at zero"
            );
        }
        product.stock.saturating_sub(quantity)
    };

    let updated = Product {
        stock: new_stock,
        ..product.clone()
    };

    let movement = StockMovement {
        id: Uuid::new_v4().to_string(),
        product_id: updated.id.clone(),
        product_name: updated.name.clone(),
        movement_type,
        quantity,
        balance_after: new_stock,
        user_id: actor.id.clone(),
        reason: reason.to_string(),
        timestamp: at,
    };

    Some((updated, movement))
}

/// Stock change actually applied by a movement, given the balance before it
pub fn effective_delta(balance_before: u32, movement: &StockMovement) -> i64 {
    i64::from(movement.balance_after) - i64::from(balance_before)
}
