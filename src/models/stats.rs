//! Catalog statistics

use rust_decimal::Decimal;
use serde::Serialize;

/// Point-in-time counters over the whole catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub books: usize,
    pub available_copies: i64,
    pub members: usize,
    pub active_loans: usize,
    pub overdue_loans: usize,
    pub members_with_fines: usize,
    pub outstanding_fines: Decimal,
}
