//! Data models for the library catalog

pub mod book;
pub mod loan;
pub mod member;
pub mod stats;

// Re-export commonly used types
pub use book::{Availability, Book, BookUpdate, NewBook};
pub use loan::{Loan, LoanDetails, ReturnReceipt};
pub use member::{Member, MemberType, NewMember};
pub use stats::CatalogStats;
