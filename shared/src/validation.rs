//! Validation utilities for catalog and stock input

use rust_decimal::Decimal;

use crate::error::{InventoryError, InventoryResult};
use crate::models::NewProduct;

// ============================================================================
// Product Validations
// ============================================================================

/// Validate the add-product form
pub fn validate_new_product(input: &NewProduct) -> InventoryResult<()> {
    if input.name.trim().is_empty() {
        return Err(InventoryError::validation("name", "Name is required"));
    }
    validate_sell_price(input.sell_price)
        .map_err(|msg| InventoryError::validation("sellPrice", msg))?;
    validate_cost_price(input.cost_price)
        .map_err(|msg| InventoryError::validation("costPrice", msg))?;
    if let Some(sku) = &input.sku {
        if sku.trim().is_empty() {
            return Err(InventoryError::validation("sku", "SKU cannot be blank"));
        }
    }
    Ok(())
}

/// Selling price is required and must be positive
pub fn validate_sell_price(price: Decimal) -> Result<(), &'static str> {
    if price <= Decimal::ZERO {
        return Err("Selling price is required");
    }
    Ok(())
}

pub fn validate_cost_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Cost price cannot be negative");
    }
    Ok(())
}

// ============================================================================
// Stock Input
// ============================================================================

/// Parse a quantity typed by an operator.
///
/// Reads the leading run of digits, so `"3.7"` is 3 and `"5 units"` is 5.
/// Returns `None` when that run is missing, negative or zero; callers drop
/// such input without reporting an error.
pub fn parse_quantity(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse::<u32>().ok().filter(|q| *q > 0)
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("12"), Some(12));
        assert_eq!(parse_quantity(" 3 "), Some(3));
        assert_eq!(parse_quantity("0"), None);
        assert_eq!(parse_quantity("-4"), None);
        assert_eq!(parse_quantity("abc"), None);
        assert_eq!(parse_quantity(""), None);
    }

    #[test]
    fn test_parse_quantity_reads_leading_digits() {
        assert_eq!(parse_quantity("3.7"), Some(3));
        assert_eq!(parse_quantity("5 units"), Some(5));
        assert_eq!(parse_quantity("+8"), Some(8));
        assert_eq!(parse_quantity(".5"), None);
        assert_eq!(parse_quantity("0.9"), None);
        assert_eq!(parse_quantity("-2.5"), None);
    }

    #[test]
    fn test_new_product_requires_name_and_price() {
        let ok = NewProduct::new("Desk Lamp", Decimal::from(10));
        assert!(validate_new_product(&ok).is_ok());

        let blank_name = NewProduct::new("   ", Decimal::from(10));
        match validate_new_product(&blank_name) {
            Err(InventoryError::Validation { field, .. }) => assert_eq!(field, "name"),
            other => panic!("unexpected result: {:?}", other),
        }

        let free = NewProduct::new("Desk Lamp", Decimal::ZERO);
        match validate_new_product(&free) {
            Err(InventoryError::Validation { field, .. }) => assert_eq!(field, "sellPrice"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_negative_cost_rejected() {
        let mut input = NewProduct::new("Desk Lamp", Decimal::from(10));
        input.cost_price = Decimal::from(-1);
        assert!(validate_new_product(&input).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("admin@v254.com").is_ok());
        assert!(validate_email("admin").is_err());
    }
}
