//! Stock movement models

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Direction of a stock movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MovementType {
    In,
    Out,
    /// Reserved; applied as a decrement like `Out`
    Adjust,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::In => "IN",
            MovementType::Out => "OUT",
            MovementType::Adjust => "ADJUST",
        }
    }

    /// Whether the movement adds to stock
    pub fn is_inbound(&self) -> bool {
        matches!(self, MovementType::In)
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementType {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "IN" => Ok(MovementType::In),
            "OUT" => Ok(MovementType::Out),
            "ADJUST" => Ok(MovementType::Adjust),
            _ => Err(InventoryError::validation(
                "type",
                "Movement type must be IN, OUT or ADJUST",
            )),
        }
    }
}

/// An immutable record of a stock change applied to one product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub id: String,
    pub product_id: String,
    /// Product name at the time of the movement, not kept in sync
    pub product_name: String,
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    /// Requested magnitude; may exceed the applied delta when OUT was clamped
    pub quantity: u32,
    pub balance_after: u32,
    pub user_id: String,
    pub reason: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

/// Reasons offered when recording a movement
pub const STOCK_REASONS: [&str; 5] = ["Sale", "Restock", "Return", "Damage/Loss", "Audit Correction"];

/// Reason used for OUT movements when none is given
pub const DEFAULT_OUT_REASON: &str = "Sale";

/// Reason used for IN movements when none is given
pub const DEFAULT_IN_REASON: &str = "Restock";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_type_wire_names() {
        assert_eq!(serde_json::to_string(&MovementType::In).unwrap(), "\"IN\"");
        assert_eq!(serde_json::to_string(&MovementType::Adjust).unwrap(), "\"ADJUST\"");
        assert_eq!("out".parse::<MovementType>().unwrap(), MovementType::Out);
        assert!("sideways".parse::<MovementType>().is_err());
    }

    #[test]
    fn test_movement_json_shape() {
        let json = r#"{
            "id": "m2",
            "productId": "p1",
            "productName": "Desk Lamp",
            "type": "OUT",
            "quantity": 8,
            "balanceAfter": 42,
            "userId": "u2",
            "reason": "Sale #1024",
            "timestamp": 1700000000000
        }"#;

        let m: StockMovement = serde_json::from_str(json).unwrap();
        assert_eq!(m.movement_type, MovementType::Out);
        assert_eq!(m.balance_after, 42);
        assert_eq!(m.timestamp.timestamp_millis(), 1_700_000_000_000);

        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value["type"], "OUT");
        assert_eq!(value["productName"], "Desk Lamp");
    }
}
