//! Error types for the library catalog

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Stable numeric error codes, one per failure family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u32)]
pub enum ErrorCode {
    NoSuchUser = 4,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    Duplicate = 8,
    MaxBorrowsReached = 11,
    NoSuchLoan = 12,
    BadValue = 18,
    UserHasFine = 22,
    ConfigFailure = 23,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("Member not found: {0}")]
    MemberNotFound(String),

    #[error("No active loan of {isbn} for member {member_id}")]
    LoanNotFound { isbn: String, member_id: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Maximum loans reached for member {member_id} ({limit})")]
    MaxLoansReached { member_id: String, limit: usize },

    #[error("Member {member_id} has an outstanding fine of {amount}")]
    OutstandingFine { member_id: String, amount: Decimal },

    #[error("No copies available: {0}")]
    NotAvailable(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::BookNotFound(_) => ErrorCode::NoSuchItem,
            AppError::MemberNotFound(_) => ErrorCode::NoSuchUser,
            AppError::LoanNotFound { .. } => ErrorCode::NoSuchLoan,
            AppError::Conflict(_) => ErrorCode::Duplicate,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::MaxLoansReached { .. } => ErrorCode::MaxBorrowsReached,
            AppError::OutstandingFine { .. } => ErrorCode::UserHasFine,
            AppError::NotAvailable(_) => ErrorCode::ItemNotAvailable,
            AppError::Config(_) => ErrorCode::ConfigFailure,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Error body, as printed by the binary when bootstrapping fails
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let code = err.code();
        Self {
            code: code as u32,
            error: format!("{:?}", code),
            message: err.to_string(),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
