//! Configuration management for the library catalog

use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;
use validator::{Validate, ValidationError};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Borrowing rules applied by the catalog
#[derive(Debug, Deserialize, Clone, PartialEq, Validate)]
#[serde(default)]
pub struct LoanPolicy {
    /// Maximum concurrent active loans per member
    #[validate(range(min = 1))]
    pub max_active_loans: usize,
    /// Days between loan date and due date
    #[validate(range(min = 1, max = 3650))]
    pub duration_days: i64,
    /// Fine charged per day late
    #[validate(custom(function = "validate_daily_fine"))]
    pub daily_fine: Decimal,
}

fn validate_daily_fine(fine: &Decimal) -> Result<(), ValidationError> {
    if *fine < Decimal::ZERO {
        return Err(ValidationError::new("negative_daily_fine"));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    /// Load the demo books and the admin member at startup
    pub seed_demo_data: bool,
}

#[derive(Debug, Deserialize, Clone, Default, Validate)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    #[validate(nested)]
    pub loans: LoanPolicy,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // LIBRARY_LOANS__MAX_ACTIVE_LOANS=5 -> loans.max_active_loans
            .add_source(
                Environment::with_prefix("LIBRARY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            max_active_loans: 3,
            duration_days: 30,
            daily_fine: Decimal::from(1000),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
        }
    }
}
