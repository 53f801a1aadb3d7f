//! Library Catalog - inventory snapshot
//!
//! Loads configuration, builds the catalog and prints its contents as JSON.

use std::sync::Arc;

use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_catalog::{
    clock::SystemClock,
    config::{AppConfig, LoggingConfig},
    error::ErrorResponse,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_tracing(&config.logging);

    tracing::info!("Starting Library Catalog v{}", env!("CARGO_PKG_VERSION"));

    let state = match AppState::new(config, Arc::new(SystemClock)) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}", serde_json::to_string(&ErrorResponse::from(&e))?);
            std::process::exit(1);
        }
    };

    let services = &state.services;
    let snapshot = json!({
        "books": services.catalog.list_books().await,
        "members": services.members.list_members().await,
        "loans": services.loans.active_loans().await,
        "stats": services.stats.snapshot().await,
    });

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_catalog={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
