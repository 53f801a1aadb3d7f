//! Active loan collection

use crate::models::loan::Loan;

#[derive(Debug, Clone, Default)]
pub struct LoansRepository {
    loans: Vec<Loan>,
}

impl LoansRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Loan> {
        self.loans.iter()
    }

    /// First active loan of `isbn` held by `member_id`
    pub fn find(&self, isbn: &str, member_id: &str) -> Option<&Loan> {
        self.loans.iter().find(|l| l.matches(isbn, member_id))
    }

    pub fn for_member<'a>(&'a self, member_id: &'a str) -> impl Iterator<Item = &'a Loan> + 'a {
        self.loans.iter().filter(move |l| l.member_id == member_id)
    }

    pub fn count_for_member(&self, member_id: &str) -> usize {
        self.for_member(member_id).count()
    }

    pub(crate) fn push(&mut self, loan: Loan) {
        self.loans.push(loan);
    }

    pub(crate) fn remove(&mut self, isbn: &str, member_id: &str) -> Option<Loan> {
        let pos = self.loans.iter().position(|l| l.matches(isbn, member_id))?;
        Some(self.loans.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn loan(isbn: &str, member_id: &str) -> Loan {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Loan {
            isbn: isbn.into(),
            member_id: member_id.into(),
            loan_date: date,
            due_date: date,
        }
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut repo = LoansRepository::new();
        repo.push(loan("A", "1"));
        repo.push(loan("A", "1"));
        repo.push(loan("B", "2"));

        assert_eq!(repo.count_for_member("1"), 2);
        assert!(repo.remove("A", "1").is_some());
        assert_eq!(repo.count_for_member("1"), 1);
        assert!(repo.remove("A", "2").is_none());
        assert_eq!(repo.len(), 2);
    }
}
