//! JSON backup format

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};
use crate::models::{Product, StockMovement, User};
use crate::types::Brand;

/// Full snapshot written by a backup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackupDocument {
    pub products: Vec<Product>,
    pub movements: Vec<StockMovement>,
    pub users: Vec<User>,
}

/// Contents accepted on restore; absent collections are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestorePayload {
    #[serde(default)]
    pub products: Option<Vec<Product>>,
    #[serde(default)]
    pub movements: Option<Vec<StockMovement>>,
}

/// Outcome of a successful restore
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RestoreSummary {
    /// Number of products restored, `None` when the file had no products
    pub products: Option<usize>,
    pub movements: Option<usize>,
}

/// Parse a backup file's text
pub fn parse_backup(raw: &str) -> InventoryResult<RestorePayload> {
    serde_json::from_str(raw).map_err(|e| InventoryError::InvalidBackup(e.to_string()))
}

/// `backup_<brand>_<epoch-ms>.json`
pub fn backup_filename(brand: &Brand, at: DateTime<Utc>) -> String {
    format!(
        "backup_{}_{}.json",
        brand.code().to_lowercase(),
        at.timestamp_millis()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_backup_filename() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(
            backup_filename(&Brand::default(), at),
            "backup_v254_1700000000123.json"
        );
    }

    #[test]
    fn test_partial_payload() {
        let payload = parse_backup(r#"{"movements": []}"#).unwrap();
        assert!(payload.products.is_none());
        assert_eq!(payload.movements.map(|m| m.len()), Some(0));
    }

    #[test]
    fn test_malformed_payload() {
        assert!(matches!(
            parse_backup("not a backup"),
            Err(InventoryError::InvalidBackup(_))
        ));
        // Wrong shape for a present field is also rejected
        assert!(parse_backup(r#"{"products": 7}"#).is_err());
    }
}
