//! Error types for inventory operations

use thiserror::Error;

/// Errors raised by the inventory store and its helpers
#[derive(Error, Debug)]
pub enum InventoryError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Product with barcode {0} not found")]
    BarcodeNotFound(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unknown filter mode: {0}")]
    InvalidFilter(String),

    // Backup errors
    #[error("Invalid backup file: {0}")]
    InvalidBackup(String),

    // Persistence errors
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(String),
}

impl InventoryError {
    /// Shorthand for a field validation failure
    pub fn validation(field: &str, message: &str) -> Self {
        InventoryError::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// Stable machine-readable code for the error
    pub fn code(&self) -> &'static str {
        match self {
            InventoryError::Validation { .. } => "VALIDATION_ERROR",
            InventoryError::DuplicateEntry(_) => "DUPLICATE_ENTRY",
            InventoryError::NotFound(_) => "NOT_FOUND",
            InventoryError::BarcodeNotFound(_) => "BARCODE_NOT_FOUND",
            InventoryError::InvalidCredentials => "INVALID_CREDENTIALS",
            InventoryError::InvalidFilter(_) => "INVALID_FILTER",
            InventoryError::InvalidBackup(_) => "INVALID_BACKUP",
            InventoryError::Storage(_) => "STORAGE_ERROR",
            InventoryError::Serialization(_) => "SERIALIZATION_ERROR",
            InventoryError::Csv(_) => "CSV_ERROR",
        }
    }
}

impl From<csv::Error> for InventoryError {
    fn from(err: csv::Error) -> Self {
        InventoryError::Csv(err.to_string())
    }
}

/// Result type alias for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(InventoryError::InvalidCredentials.code(), "INVALID_CREDENTIALS");
        assert_eq!(
            InventoryError::validation("name", "Name is required").code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            InventoryError::BarcodeNotFound("42".into()).to_string(),
            "Product with barcode 42 not found"
        );
    }
}
