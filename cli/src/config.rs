//! Configuration management for the Stockroom CLI
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with STOCKROOM_ prefix

use std::path::PathBuf;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Where the key-value blobs are written
    pub storage: StorageConfig,

    /// Brand used for generated SKUs and backup names
    pub brand: BrandConfig,

    /// Operator recorded on stock movements
    pub session: SessionConfig,

    /// Log output
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding one `<key>.json` file per stored collection
    pub data_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BrandConfig {
    pub code: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// `EnvFilter` directive used when RUST_LOG is unset
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("STOCKROOM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("storage.data_dir", ".stockroom")?
            .set_default("brand.code", shared::DEFAULT_BRAND)?
            .set_default("session.email", "admin@v254.com")?
            .set_default("session.password", shared::DEMO_PASSWORD)?
            .set_default("log.filter", "stockroom=info,stockroom_cli=info,shared=info")?
            .set_default("log.json", false)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (STOCKROOM_ prefix)
            .add_source(
                Environment::with_prefix("STOCKROOM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            storage: StorageConfig {
                data_dir: PathBuf::from(".stockroom"),
            },
            brand: BrandConfig {
                code: shared::DEFAULT_BRAND.to_string(),
            },
            session: SessionConfig {
                email: "admin@v254.com".to_string(),
                password: shared::DEMO_PASSWORD.to_string(),
            },
            log: LogConfig {
                filter: "stockroom=info,stockroom_cli=info,shared=info".to_string(),
                json: false,
            },
        }
    }
}
