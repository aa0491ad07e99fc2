//! Command-line interface definition

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use shared::{FilterMode, DEFAULT_BEST_SELLERS, DEFAULT_LOW_STOCK_THRESHOLD};

#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(about = "Inventory, stock movements and backups for a small shop")]
#[command(version)]
pub struct Cli {
    /// Data directory (overrides storage.data_dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Operator email (overrides session.email)
    #[arg(long, global = true)]
    pub email: Option<String>,

    /// Operator password (overrides session.password)
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summary statistics and best sellers
    Dashboard {
        /// Number of best sellers to show
        #[arg(long, default_value_t = DEFAULT_BEST_SELLERS)]
        top: usize,
    },

    /// List products, optionally filtered
    List {
        /// Matches name, SKU or category
        #[arg(long, short, default_value = "")]
        search: String,

        /// all, low, out or expired
        #[arg(long, short, default_value = "all")]
        filter: FilterMode,
    },

    /// Show one product and its movements
    Show {
        product_id: String,
    },

    /// Look up a product by barcode
    Scan {
        barcode: String,
    },

    /// Add a product to the catalog
    Add(AddArgs),

    /// Record incoming stock
    StockIn(MoveArgs),

    /// Record outgoing stock
    StockOut(MoveArgs),

    /// Movement history
    History {
        /// Only movements of this product
        #[arg(long)]
        product: Option<String>,

        /// Maximum number of movements to print
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List operators
    Users,

    /// Show the signed-in operator
    Whoami,

    /// Write a JSON backup of products, movements and users
    Backup {
        /// Directory for the backup file
        #[arg(long, default_value = ".")]
        output: PathBuf,
    },

    /// Restore products and movements from a JSON backup
    Restore {
        file: PathBuf,
    },

    /// Write the catalog as CSV
    ExportCsv {
        /// Directory for the CSV file
        #[arg(long, default_value = ".")]
        output: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub sell_price: Decimal,

    #[arg(long, default_value = "0")]
    pub cost_price: Decimal,

    /// Generated when omitted
    #[arg(long)]
    pub sku: Option<String>,

    #[arg(long)]
    pub barcode: Option<String>,

    #[arg(long, default_value = "")]
    pub category: String,

    #[arg(long)]
    pub supplier: Option<String>,

    #[arg(long, default_value_t = 0)]
    pub stock: u32,

    #[arg(long, default_value_t = DEFAULT_LOW_STOCK_THRESHOLD)]
    pub low_stock_threshold: u32,

    /// YYYY-MM-DD
    #[arg(long)]
    pub expiry_date: Option<NaiveDate>,

    #[arg(long)]
    pub image_path: Option<String>,
}

#[derive(Args, Debug)]
pub struct MoveArgs {
    pub product_id: String,

    /// Taken as typed; anything but a positive integer records nothing
    #[arg(allow_hyphen_values = true)]
    pub quantity: String,

    /// Defaults to Sale for stock-out and Restock for stock-in
    #[arg(long)]
    pub reason: Option<String>,
}
