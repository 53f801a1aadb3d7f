//! Business logic services
//!
//! Every service shares the same catalog behind one mutex, so multi-step
//! operations such as lending (check limits, check stock, record the loan)
//! run atomically with respect to each other.

pub mod catalog;
pub mod loans;
pub mod members;
pub mod stats;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{catalog::LibraryCatalog, clock::Clock};

/// The catalog, shared behind a single coarse lock
pub type SharedCatalog = Arc<Mutex<LibraryCatalog>>;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub members: members::MembersService,
    pub loans: loans::LoansService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services over the given catalog
    pub fn new(catalog: LibraryCatalog, clock: Arc<dyn Clock>) -> Self {
        let shared: SharedCatalog = Arc::new(Mutex::new(catalog));
        Self {
            catalog: catalog::CatalogService::new(shared.clone()),
            members: members::MembersService::new(shared.clone()),
            loans: loans::LoansService::new(shared.clone(), clock.clone()),
            stats: stats::StatsService::new(shared, clock),
        }
    }
}
