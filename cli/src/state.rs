//! Application state shared across command handlers

use std::io::Write;

use shared::{authenticate, Brand, InventoryStore, User};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::storage::FileStore;
use crate::views::Render;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Open store plus the signed-in operator
pub struct AppState {
    pub store: InventoryStore<FileStore>,
    /// `None` when the configured credentials were rejected
    pub session: Option<User>,
    pub format: OutputFormat,
}

impl AppState {
    /// Open the data directory and sign in with the given credentials
    pub fn open(config: &Config, format: OutputFormat) -> AppResult<Self> {
        let storage = FileStore::open(&config.storage.data_dir)?;
        let store = InventoryStore::open(storage, Brand::new(config.brand.code.as_str()))?;

        let session = match authenticate(store.users(), &config.session.email, &config.session.password) {
            Ok(user) => {
                tracing::debug!(user_id = %user.id, role = user.role.as_str(), "Signed in");
                Some(user.clone())
            }
            Err(e) => {
                tracing::warn!(email = %config.session.email, error = %e, "Sign-in failed");
                None
            }
        };

        Ok(Self {
            store,
            session,
            format,
        })
    }

    /// Signed-in operator, for commands that cannot run anonymously
    pub fn require_session(&self) -> AppResult<&User> {
        self.session
            .as_ref()
            .ok_or_else(|| AppError::NoSession("check session.email and session.password".into()))
    }

    /// Print a result in the selected format
    pub fn emit<T: Render>(&self, value: &T) -> AppResult<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let text = match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
            OutputFormat::Text => value.render_text(),
        };
        writeln!(out, "{}", text).map_err(|e| AppError::io("<stdout>", e))
    }
}
