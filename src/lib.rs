//! Library Catalog
//!
//! An in-memory library management core: books, members and loans, with
//! loan limits and overdue fines enforced by [`catalog::LibraryCatalog`].

use std::sync::Arc;

pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use catalog::LibraryCatalog;
pub use config::AppConfig;
pub use error::{AppError, AppResult};

use clock::Clock;
use validator::Validate;

/// Application state: configuration plus the services over one catalog
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the catalog described by `config` and wire the services around it.
    /// Fails with `Validation` when the loan policy is out of range.
    pub fn new(config: AppConfig, clock: Arc<dyn Clock>) -> AppResult<Self> {
        config.validate()?;
        let policy = config.loans.clone();
        let catalog = if config.catalog.seed_demo_data {
            LibraryCatalog::with_seed_data(policy, clock.clone())?
        } else {
            LibraryCatalog::new(policy, clock.clone())
        };

        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(catalog, clock)),
        })
    }
}
