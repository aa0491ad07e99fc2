//! Stockroom command-line front end
//!
//! Wires the shared inventory store to a file-backed persistence adapter,
//! layered configuration and a `clap` command surface.

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod state;
pub mod storage;
pub mod views;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::{AppState, OutputFormat};
pub use storage::FileStore;
