//! Handlers for backup, restore and CSV export

use std::fs;
use std::path::Path;

use shared::now_millis;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::FileWritten;

/// Write `backup_<brand>_<epoch-ms>.json` into `dir`
pub fn write_backup(state: &mut AppState, dir: &Path) -> AppResult<()> {
    let (name, json) = state.store.export_backup(now_millis())?;
    let written = write_file(dir, &name, &json)?;
    tracing::info!(path = %written.path, "Backup written");
    state.emit(&written)
}

/// Replace products and movements from a backup file
pub fn restore_backup(state: &mut AppState, file: &Path) -> AppResult<()> {
    let raw = fs::read_to_string(file).map_err(|e| AppError::io(file, e))?;
    let summary = state.store.restore_backup(&raw)?;
    state.emit(&summary)
}

/// Write `inventory_export_<date>.csv` into `dir`
pub fn write_csv(state: &mut AppState, dir: &Path) -> AppResult<()> {
    let (name, csv) = state.store.export_csv(now_millis())?;
    let written = write_file(dir, &name, &csv)?;
    tracing::info!(path = %written.path, "CSV export written");
    state.emit(&written)
}

fn write_file(dir: &Path, name: &str, contents: &str) -> AppResult<FileWritten> {
    fs::create_dir_all(dir).map_err(|e| AppError::io(dir, e))?;
    let path = dir.join(name);
    fs::write(&path, contents).map_err(|e| AppError::io(&path, e))?;
    Ok(FileWritten {
        path: path.display().to_string(),
        bytes: contents.len(),
    })
}
