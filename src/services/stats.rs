//! Statistics service

use std::sync::Arc;

use crate::{clock::Clock, models::stats::CatalogStats};

use super::SharedCatalog;

#[derive(Clone)]
pub struct StatsService {
    catalog: SharedCatalog,
    clock: Arc<dyn Clock>,
}

impl StatsService {
    pub fn new(catalog: SharedCatalog, clock: Arc<dyn Clock>) -> Self {
        Self { catalog, clock }
    }

    /// Counters as of today
    pub async fn snapshot(&self) -> CatalogStats {
        let today = self.clock.today();
        self.catalog.lock().await.stats(today)
    }
}
