//! Loan model and related types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Active loan. Book and member are referenced by key, never owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub isbn: String,
    pub member_id: String,
    pub loan_date: NaiveDate,
    pub due_date: NaiveDate,
}

impl Loan {
    pub fn matches(&self, isbn: &str, member_id: &str) -> bool {
        self.isbn == isbn && self.member_id == member_id
    }

    /// Whole days past the due date as of `date`, zero when on time
    pub fn days_late(&self, date: NaiveDate) -> i64 {
        if date > self.due_date {
            (date - self.due_date).num_days()
        } else {
            0
        }
    }

    pub fn is_overdue(&self, date: NaiveDate) -> bool {
        self.days_late(date) > 0
    }

    pub fn fine(&self, date: NaiveDate, daily_fine: Decimal) -> Decimal {
        Decimal::from(self.days_late(date))
            .checked_mul(daily_fine)
            .unwrap_or(Decimal::MAX)
    }
}

/// Loan with book and member details for display
#[derive(Debug, Clone, Serialize)]
pub struct LoanDetails {
    pub isbn: String,
    pub title: Option<String>,
    pub member_id: String,
    pub member_name: Option<String>,
    pub loan_date: NaiveDate,
    pub due_date: NaiveDate,
    pub is_overdue: bool,
}

/// Outcome of a return
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnReceipt {
    pub isbn: String,
    pub member_id: String,
    pub returned_on: NaiveDate,
    pub days_late: i64,
    pub fine: Decimal,
}
