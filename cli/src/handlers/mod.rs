//! Command handlers for the Stockroom CLI

pub mod backup;
pub mod catalog;
pub mod dashboard;
pub mod stock;

use crate::cli::Command;
use crate::error::AppResult;
use crate::state::AppState;

/// Run one parsed command against the open state
pub fn dispatch(state: &mut AppState, command: Command) -> AppResult<()> {
    match command {
        Command::Dashboard { top } => dashboard::show_dashboard(state, top),
        Command::List { search, filter } => catalog::list_products(state, &search, filter),
        Command::Show { product_id } => catalog::show_product(state, &product_id),
        Command::Scan { barcode } => catalog::scan_barcode(state, &barcode),
        Command::Add(args) => catalog::add_product(state, args),
        Command::StockIn(args) => stock::stock_in(state, args),
        Command::StockOut(args) => stock::stock_out(state, args),
        Command::History { product, limit } => stock::history(state, product.as_deref(), limit),
        Command::Users => dashboard::list_users(state),
        Command::Whoami => dashboard::whoami(state),
        Command::Backup { output } => backup::write_backup(state, &output),
        Command::Restore { file } => backup::restore_backup(state, &file),
        Command::ExportCsv { output } => backup::write_csv(state, &output),
    }
}
