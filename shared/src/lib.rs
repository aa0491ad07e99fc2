//! Shared types and inventory logic for Stockroom
//!
//! This crate contains the domain model, the stock ledger, dashboard
//! statistics and the application store shared between the CLI and the
//! browser (via WASM) front ends.

pub mod auth;
pub mod backup;
pub mod catalog;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod seed;
pub mod statistics;
pub mod storage;
pub mod store;
pub mod types;
pub mod validation;

pub use auth::*;
pub use backup::*;
pub use catalog::*;
pub use error::*;
pub use export::*;
pub use ledger::*;
pub use models::*;
pub use statistics::*;
pub use storage::*;
pub use store::*;
pub use types::*;
pub use validation::*;
