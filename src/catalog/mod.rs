//! In-memory library catalog
//!
//! [`LibraryCatalog`] owns the three collections (books, members, active loans)
//! and enforces every borrowing rule. Collections are only reachable through
//! its methods; loans refer to books and members by key.

pub mod books;
pub mod loans;
pub mod members;
pub mod search;
pub mod seed;

use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;

use crate::{
    clock::Clock,
    config::LoanPolicy,
    error::{AppError, AppResult},
    models::{
        book::{Availability, Book, BookUpdate},
        loan::{Loan, LoanDetails, ReturnReceipt},
        member::{Member, MemberType},
        stats::CatalogStats,
    },
};

use books::BooksRepository;
use loans::LoansRepository;
use members::MembersRepository;

pub struct LibraryCatalog {
    books: BooksRepository,
    members: MembersRepository,
    loans: LoansRepository,
    policy: LoanPolicy,
    clock: Arc<dyn Clock>,
}

impl LibraryCatalog {
    /// Empty catalog
    pub fn new(policy: LoanPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            books: BooksRepository::new(),
            members: MembersRepository::new(),
            loans: LoansRepository::new(),
            policy,
            clock,
        }
    }

    /// Catalog preloaded with the demo books and the admin member
    pub fn with_seed_data(policy: LoanPolicy, clock: Arc<dyn Clock>) -> AppResult<Self> {
        let mut catalog = Self::new(policy, clock);
        seed::load(&mut catalog)?;
        Ok(catalog)
    }

    pub fn policy(&self) -> &LoanPolicy {
        &self.policy
    }

    /// Due date of a loan starting on `loan_date`
    pub fn due_date_for(&self, loan_date: NaiveDate) -> AppResult<NaiveDate> {
        u64::try_from(self.policy.duration_days)
            .ok()
            .and_then(|days| loan_date.checked_add_days(Days::new(days)))
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Loan duration of {} days is out of range",
                    self.policy.duration_days
                ))
            })
    }

    // =========================================================================
    // BOOKS
    // =========================================================================

    pub fn add_book(&mut self, book: Book) -> AppResult<()> {
        if self.books.contains(&book.isbn) {
            return Err(AppError::Conflict(format!(
                "Book with ISBN {} already exists",
                book.isbn
            )));
        }
        let current_year = self.clock.today().year();
        if book.publication_year > current_year {
            return Err(AppError::Validation(format!(
                "Publication year {} is in the future",
                book.publication_year
            )));
        }
        if book.available_copies < 0 {
            return Err(AppError::Validation("Copies cannot be negative".to_string()));
        }
        self.books.insert(book)
    }

    pub fn remove_book(&mut self, isbn: &str) -> AppResult<Book> {
        self.books.remove(isbn)
    }

    pub fn update_book(&mut self, isbn: &str, update: BookUpdate) -> AppResult<&Book> {
        self.books.update(isbn, update)
    }

    pub fn find_book_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.get(isbn)
    }

    pub fn find_books_by_title(&self, title: &str) -> Vec<&Book> {
        self.books.find_by_title(title)
    }

    pub fn find_books_by_author(&self, author: &str) -> Vec<&Book> {
        self.books.find_by_author(author)
    }

    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn availability(&self, isbn: &str) -> AppResult<Availability> {
        self.books
            .get(isbn)
            .map(Availability::from)
            .ok_or_else(|| AppError::BookNotFound(isbn.to_string()))
    }

    // =========================================================================
    // MEMBERS
    // =========================================================================

    pub fn register_member(&mut self, member: Member) -> AppResult<()> {
        self.members.insert(member)
    }

    pub fn remove_member(&mut self, id: &str) -> AppResult<Member> {
        self.members.remove(id)
    }

    pub fn update_member_type(&mut self, id: &str, member_type: MemberType) -> AppResult<()> {
        self.members.get_mut(id)?.member_type = member_type;
        Ok(())
    }

    pub fn find_member_by_id(&self, id: &str) -> Option<&Member> {
        self.members.get(id)
    }

    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    /// Accrued fine of a member, zero if unknown
    pub fn member_fine(&self, id: &str) -> Decimal {
        self.members
            .get(id)
            .map(|m| m.accrued_fine)
            .unwrap_or(Decimal::ZERO)
    }

    /// Add a fine to a member's balance
    pub fn assess_fine(&mut self, id: &str, amount: Decimal) -> AppResult<()> {
        if amount <= Decimal::ZERO {
            return Err(AppError::Validation("Fine amount must be positive".to_string()));
        }
        self.members.get_mut(id)?.add_fine(amount);
        Ok(())
    }

    /// Pay towards a member's fine; returns the remaining balance
    pub fn pay_fine(&mut self, id: &str, amount: Decimal) -> AppResult<Decimal> {
        let member = self.members.get_mut(id)?;
        if amount <= Decimal::ZERO {
            return Err(AppError::Validation("Payment amount must be positive".to_string()));
        }
        member.pay_fine(amount);
        tracing::info!(
            "Member {} paid {}, remaining fine {}",
            id, amount, member.accrued_fine
        );
        Ok(member.accrued_fine)
    }

    // =========================================================================
    // LOANS
    // =========================================================================

    pub fn can_borrow_more(&self, id: &str) -> bool {
        self.loans.count_for_member(id) < self.policy.max_active_loans
    }

    pub fn lend_book(
        &mut self,
        isbn: &str,
        member_id: &str,
        loan_date: NaiveDate,
        due_date: NaiveDate,
    ) -> AppResult<Loan> {
        let book = self
            .books
            .get(isbn)
            .ok_or_else(|| AppError::BookNotFound(isbn.to_string()))?;
        let member = self
            .members
            .get(member_id)
            .ok_or_else(|| AppError::MemberNotFound(member_id.to_string()))?;

        if !self.can_borrow_more(member_id) {
            return Err(AppError::MaxLoansReached {
                member_id: member_id.to_string(),
                limit: self.policy.max_active_loans,
            });
        }
        if member.has_fine() {
            return Err(AppError::OutstandingFine {
                member_id: member_id.to_string(),
                amount: member.accrued_fine,
            });
        }
        if !book.is_available() {
            return Err(AppError::NotAvailable(isbn.to_string()));
        }

        let loan = Loan {
            isbn: isbn.to_string(),
            member_id: member_id.to_string(),
            loan_date,
            due_date,
        };
        if let Some(book) = self.books.get_mut(isbn) {
            book.check_out();
        }
        self.loans.push(loan.clone());

        tracing::info!("Lent {} to member {}, due {}", isbn, member_id, due_date);
        Ok(loan)
    }

    pub fn return_book(
        &mut self,
        isbn: &str,
        member_id: &str,
        return_date: NaiveDate,
    ) -> AppResult<ReturnReceipt> {
        let loan = self
            .loans
            .remove(isbn, member_id)
            .ok_or_else(|| AppError::LoanNotFound {
                isbn: isbn.to_string(),
                member_id: member_id.to_string(),
            })?;

        match self.books.get_mut(isbn) {
            Some(book) => book.check_in(),
            None => tracing::warn!("Returned book {} is no longer catalogued", isbn),
        }

        let days_late = loan.days_late(return_date);
        let mut fine = loan.fine(return_date, self.policy.daily_fine);
        if fine > Decimal::ZERO {
            match self.members.get_mut(member_id) {
                Ok(member) => {
                    member.add_fine(fine);
                    tracing::info!(
                        "Member {} returned {} {} days late, fined {}",
                        member_id, isbn, days_late, fine
                    );
                }
                Err(_) => {
                    tracing::warn!("Member {} is no longer registered, fine dropped", member_id);
                    fine = Decimal::ZERO;
                }
            }
        } else {
            tracing::info!("Member {} returned {}", member_id, isbn);
        }

        Ok(ReturnReceipt {
            isbn: loan.isbn,
            member_id: loan.member_id,
            returned_on: return_date,
            days_late,
            fine,
        })
    }

    /// Fine the loan would incur if returned on `as_of`. Does not mutate.
    pub fn compute_fine(&self, isbn: &str, member_id: &str, as_of: NaiveDate) -> Decimal {
        self.loans
            .find(isbn, member_id)
            .map(|loan| loan.fine(as_of, self.policy.daily_fine))
            .unwrap_or(Decimal::ZERO)
    }

    pub fn find_active_loan(&self, isbn: &str, member_id: &str) -> Option<&Loan> {
        self.loans.find(isbn, member_id)
    }

    pub fn active_loans(&self) -> impl Iterator<Item = &Loan> {
        self.loans.iter()
    }

    /// Books currently lent to a member
    pub fn books_borrowed_by(&self, member_id: &str) -> Vec<&Book> {
        self.loans
            .for_member(member_id)
            .filter_map(|loan| self.books.get(&loan.isbn))
            .collect()
    }

    pub fn loan_details(&self, as_of: NaiveDate) -> Vec<LoanDetails> {
        self.loans.iter().map(|l| self.describe(l, as_of)).collect()
    }

    pub fn member_loan_details(&self, member_id: &str, as_of: NaiveDate) -> Vec<LoanDetails> {
        self.loans
            .for_member(member_id)
            .map(|l| self.describe(l, as_of))
            .collect()
    }

    fn describe(&self, loan: &Loan, as_of: NaiveDate) -> LoanDetails {
        LoanDetails {
            isbn: loan.isbn.clone(),
            title: self.books.get(&loan.isbn).map(|b| b.title.clone()),
            member_id: loan.member_id.clone(),
            member_name: self.members.get(&loan.member_id).map(|m| m.name.clone()),
            loan_date: loan.loan_date,
            due_date: loan.due_date,
            is_overdue: loan.is_overdue(as_of),
        }
    }

    // =========================================================================
    // STATS
    // =========================================================================

    pub fn stats(&self, as_of: NaiveDate) -> CatalogStats {
        CatalogStats {
            books: self.books.len(),
            available_copies: self.books.iter().map(|b| b.available_copies as i64).sum(),
            members: self.members.len(),
            active_loans: self.loans.len(),
            overdue_loans: self.loans.iter().filter(|l| l.is_overdue(as_of)).count(),
            members_with_fines: self.members.iter().filter(|m| m.has_fine()).count(),
            outstanding_fines: self.members.iter().map(|m| m.accrued_fine).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::clock::FixedClock;

    const ORWELL: &str = "978-0451524935";
    const QUIJOTE: &str = "978-8491050767";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn catalog() -> LibraryCatalog {
        let mut catalog =
            LibraryCatalog::with_seed_data(LoanPolicy::default(), Arc::new(FixedClock(today())))
                .unwrap();
        catalog
            .register_member(Member::new("Ana", "42", MemberType::Student))
            .unwrap();
        catalog
    }

    fn lend(catalog: &mut LibraryCatalog, isbn: &str, member_id: &str) -> AppResult<Loan> {
        let due = catalog.due_date_for(today())?;
        catalog.lend_book(isbn, member_id, today(), due)
    }

    #[test]
    fn test_seed_data() {
        let catalog = catalog();
        assert_eq!(catalog.books().count(), 6);
        assert!(catalog.find_member_by_id(seed::ADMIN_MEMBER_ID).unwrap().is_admin());
        assert_eq!(catalog.find_book_by_isbn(QUIJOTE).unwrap().available_copies, 2);
    }

    #[test]
    fn test_add_book_rejects_future_year() {
        let mut catalog = catalog();
        let err = catalog
            .add_book(Book::new("Future", "Someone", 2026, "X-1", 1))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(catalog.add_book(Book::new("Now", "Someone", 2025, "X-2", 1)).is_ok());
    }

    #[test]
    fn test_due_date_out_of_range() {
        let clock = Arc::new(FixedClock(today()));
        let policy = LoanPolicy { duration_days: 200_000_000, ..LoanPolicy::default() };
        let catalog = LibraryCatalog::new(policy, clock.clone());
        assert!(matches!(catalog.due_date_for(today()), Err(AppError::Validation(_))));

        let policy = LoanPolicy { duration_days: -3, ..LoanPolicy::default() };
        let catalog = LibraryCatalog::new(policy, clock);
        assert!(matches!(catalog.due_date_for(today()), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_add_book_duplicate_isbn() {
        let mut catalog = catalog();
        let err = catalog
            .add_book(Book::new("Copy", "Someone", 2000, ORWELL, 1))
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn test_lend_and_return_adjust_copies() {
        let mut catalog = catalog();
        lend(&mut catalog, ORWELL, "42").unwrap();
        assert_eq!(catalog.find_book_by_isbn(ORWELL).unwrap().available_copies, 2);
        assert!(catalog.find_active_loan(ORWELL, "42").is_some());

        let receipt = catalog.return_book(ORWELL, "42", today()).unwrap();
        assert_eq!(receipt.fine, Decimal::ZERO);
        assert_eq!(catalog.find_book_by_isbn(ORWELL).unwrap().available_copies, 3);
        assert!(catalog.find_active_loan(ORWELL, "42").is_none());
    }

    #[test]
    fn test_lend_checks_in_order() {
        let mut catalog = catalog();
        assert!(matches!(lend(&mut catalog, "nope", "42"), Err(AppError::BookNotFound(_))));
        assert!(matches!(lend(&mut catalog, ORWELL, "nope"), Err(AppError::MemberNotFound(_))));

        lend(&mut catalog, QUIJOTE, "42").unwrap();
        lend(&mut catalog, QUIJOTE, seed::ADMIN_MEMBER_ID).unwrap();
        assert!(matches!(lend(&mut catalog, QUIJOTE, "42"), Err(AppError::NotAvailable(_))));
    }

    #[test]
    fn test_loan_limit() {
        let mut catalog = catalog();
        for isbn in ["978-950-04-0406-9", "978-84-376-0494-7", ORWELL] {
            lend(&mut catalog, isbn, "42").unwrap();
        }
        assert!(!catalog.can_borrow_more("42"));
        let err = lend(&mut catalog, QUIJOTE, "42").unwrap_err();
        assert!(matches!(err, AppError::MaxLoansReached { limit: 3, .. }));
        assert_eq!(catalog.find_book_by_isbn(QUIJOTE).unwrap().available_copies, 2);
    }

    #[test]
    fn test_late_return_fines_member() {
        let mut catalog = catalog();
        let loan = lend(&mut catalog, ORWELL, "42").unwrap();
        let returned_on = loan.due_date + Duration::days(5);

        assert_eq!(catalog.compute_fine(ORWELL, "42", returned_on), Decimal::from(5000));
        assert_eq!(catalog.member_fine("42"), Decimal::ZERO);

        let receipt = catalog.return_book(ORWELL, "42", returned_on).unwrap();
        assert_eq!(receipt.days_late, 5);
        assert_eq!(receipt.fine, Decimal::from(5000));
        assert_eq!(catalog.member_fine("42"), Decimal::from(5000));

        let err = lend(&mut catalog, QUIJOTE, "42").unwrap_err();
        assert!(matches!(err, AppError::OutstandingFine { .. }));

        assert_eq!(catalog.pay_fine("42", Decimal::from(8000)).unwrap(), Decimal::ZERO);
        assert!(lend(&mut catalog, QUIJOTE, "42").is_ok());
    }

    #[test]
    fn test_return_without_loan() {
        let mut catalog = catalog();
        let err = catalog.return_book(ORWELL, "42", today()).unwrap_err();
        assert!(matches!(err, AppError::LoanNotFound { .. }));
        assert_eq!(catalog.find_book_by_isbn(ORWELL).unwrap().available_copies, 3);
    }

    #[test]
    fn test_pay_fine_validation() {
        let mut catalog = catalog();
        assert!(matches!(
            catalog.pay_fine("nope", Decimal::ONE),
            Err(AppError::MemberNotFound(_))
        ));
        assert!(matches!(
            catalog.pay_fine("42", Decimal::ZERO),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_member_type_update() {
        let mut catalog = catalog();
        catalog.update_member_type("42", MemberType::Teacher).unwrap();
        assert_eq!(catalog.find_member_by_id("42").unwrap().member_type, MemberType::Teacher);
        assert!(matches!(
            catalog.update_member_type("nope", MemberType::Admin),
            Err(AppError::MemberNotFound(_))
        ));
    }

    #[test]
    fn test_loan_details_and_stats() {
        let mut catalog = catalog();
        lend(&mut catalog, ORWELL, "42").unwrap();
        catalog.assess_fine(seed::ADMIN_MEMBER_ID, Decimal::from(1500)).unwrap();

        let later = today() + Duration::days(31);
        let details = catalog.member_loan_details("42", later);
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].title.as_deref(), Some("1984"));
        assert_eq!(details[0].member_name.as_deref(), Some("Ana"));
        assert!(details[0].is_overdue);

        let stats = catalog.stats(later);
        assert_eq!(stats.books, 6);
        assert_eq!(stats.available_copies, 19);
        assert_eq!(stats.members, 2);
        assert_eq!(stats.active_loans, 1);
        assert_eq!(stats.overdue_loans, 1);
        assert_eq!(stats.members_with_fines, 1);
        assert_eq!(stats.outstanding_fines, Decimal::from(1500));

        assert_eq!(catalog.books_borrowed_by("42")[0].isbn, ORWELL);
    }
}
