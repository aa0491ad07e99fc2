//! Error handling for the Stockroom CLI

use shared::InventoryError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("Not signed in: {0}")]
    NoSession(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Machine-readable code, shared with the library's error codes
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Inventory(e) => e.code(),
            AppError::NoSession(_) => "NO_SESSION",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Io { .. } => "IO_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Process exit code for the error
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Inventory(InventoryError::Validation { .. })
            | AppError::Inventory(InventoryError::DuplicateEntry(_))
            | AppError::Inventory(InventoryError::InvalidFilter(_)) => 2,
            AppError::Inventory(InventoryError::NotFound(_))
            | AppError::Inventory(InventoryError::BarcodeNotFound(_)) => 3,
            AppError::Inventory(InventoryError::InvalidCredentials) | AppError::NoSession(_) => 4,
            _ => 1,
        }
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_pass_through() {
        let err = AppError::from(InventoryError::BarcodeNotFound("1".into()));
        assert_eq!(err.code(), "BARCODE_NOT_FOUND");
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.to_string(), "Product with barcode 1 not found");
    }
}
