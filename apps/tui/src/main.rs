//! # Shopfront Terminal Storefront
//!
//! Entry point: configures logging, resolves the session catalog, builds
//! the [`CatalogStore`], and hands the terminal to the app shell.
//!
//! ## Startup Sequence
//! ```text
//! 1. Load configuration ── defaults + SHOPFRONT_* env overrides
//! 2. Initialize logging ── tracing to a file (the TUI owns stdout);
//!                          RUST_LOG overrides the default filter
//! 3. Resolve catalog ───── configured JSON file, else built-in seed
//! 4. Build CatalogStore ── the session's single source of truth
//! 5. Run the app ───────── raw-mode terminal until quit
//! ```

mod app;
mod catalog_file;
mod config;
mod error;
mod screens;
mod theme;

use std::fs::File;
use std::sync::Mutex;

use tracing::info;
use tracing_subscriber::EnvFilter;

use shopfront_state::CatalogStore;

use crate::app::App;
use crate::config::ShopConfig;
use crate::error::AppError;

fn main() -> Result<(), AppError> {
    let config = ShopConfig::from_env();
    init_tracing(&config)?;

    info!(store = %config.store_name, "starting Shopfront");

    let products = catalog_file::load_or_seed(&config);
    let store = CatalogStore::new(products);

    let terminal = ratatui::init();
    let result = App::new(store, config).run(terminal);
    ratatui::restore();

    result
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages everywhere
/// - `RUST_LOG=shopfront_state=trace` - Trace the store only
/// - Default: INFO, with the shopfront crates at DEBUG
fn init_tracing(config: &ShopConfig) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shopfront=debug"));

    let log_file = File::create(&config.log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
