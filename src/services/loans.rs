//! Loan management service

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::{
    clock::Clock,
    error::{AppError, AppResult},
    models::{
        book::Book,
        loan::{Loan, LoanDetails, ReturnReceipt},
    },
};

use super::SharedCatalog;

#[derive(Clone)]
pub struct LoansService {
    catalog: SharedCatalog,
    clock: Arc<dyn Clock>,
}

impl LoansService {
    pub fn new(catalog: SharedCatalog, clock: Arc<dyn Clock>) -> Self {
        Self { catalog, clock }
    }

    /// Lend a book starting today, due after the policy's loan duration
    pub async fn lend_book(&self, isbn: &str, member_id: &str) -> AppResult<Loan> {
        let today = self.clock.today();
        let mut catalog = self.catalog.lock().await;
        let due_date = catalog.due_date_for(today)?;
        catalog
            .lend_book(isbn, member_id, today, due_date)
            .inspect_err(|e| tracing::warn!("Loan of {} to {} refused: {}", isbn, member_id, e))
    }

    /// Return a book today, charging any late fine
    pub async fn return_book(&self, isbn: &str, member_id: &str) -> AppResult<ReturnReceipt> {
        let today = self.clock.today();
        self.catalog
            .lock()
            .await
            .return_book(isbn, member_id, today)
            .inspect_err(|e| tracing::warn!("Return of {} by {} refused: {}", isbn, member_id, e))
    }

    /// Fine owed if the book were returned today
    pub async fn compute_fine(&self, isbn: &str, member_id: &str) -> Decimal {
        let today = self.clock.today();
        self.catalog.lock().await.compute_fine(isbn, member_id, today)
    }

    pub async fn can_borrow_more(&self, member_id: &str) -> bool {
        self.catalog.lock().await.can_borrow_more(member_id)
    }

    /// All active loans
    pub async fn active_loans(&self) -> Vec<LoanDetails> {
        let today = self.clock.today();
        self.catalog.lock().await.loan_details(today)
    }

    /// Active loans of a member
    pub async fn member_loans(&self, member_id: &str) -> AppResult<Vec<LoanDetails>> {
        let today = self.clock.today();
        let catalog = self.catalog.lock().await;
        if catalog.find_member_by_id(member_id).is_none() {
            return Err(AppError::MemberNotFound(member_id.to_string()));
        }
        Ok(catalog.member_loan_details(member_id, today))
    }

    /// Books currently lent to a member
    pub async fn member_books(&self, member_id: &str) -> Vec<Book> {
        let catalog = self.catalog.lock().await;
        catalog.books_borrowed_by(member_id).into_iter().cloned().collect()
    }

    /// Count active loans
    pub async fn count_active(&self) -> usize {
        self.catalog.lock().await.active_loans().count()
    }

    /// Count overdue loans
    pub async fn count_overdue(&self) -> usize {
        let today = self.clock.today();
        self.catalog
            .lock()
            .await
            .active_loans()
            .filter(|l| l.is_overdue(today))
            .count()
    }
}
