//! Stockroom - inventory CLI
//!
//! Browse the catalog, record stock movements, read the dashboard and
//! back up or restore the inventory from the command line.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use stockroom_cli::cli::Cli;
use stockroom_cli::{handlers, AppState, Config, OutputFormat};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    dotenvy::dotenv().ok();
    let mut config = Config::load()?;
    if let Some(dir) = cli.data_dir.clone() {
        config.storage.data_dir = dir;
    }
    if let Some(email) = cli.email.clone() {
        config.session.email = email;
    }
    if let Some(password) = cli.password.clone() {
        config.session.password = password;
    }

    init_tracing(&config);
    tracing::debug!(
        environment = %config.environment,
        data_dir = %config.storage.data_dir.display(),
        "Configuration loaded"
    );

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut state = AppState::open(&config, format)?;

    if let Err(err) = handlers::dispatch(&mut state, cli.command) {
        tracing::error!(code = err.code(), "Command failed: {}", err);
        eprintln!("error: {}", err);
        std::process::exit(err.exit_code());
    }

    Ok(())
}

/// Logs are written to stderr
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log.filter.as_str()));

    let registry = tracing_subscriber::registry().with(filter);
    if config.log.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
