//! Book (catalog entry) model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Catalogued book, keyed by ISBN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub isbn: String,
    pub available_copies: i32,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
        isbn: impl Into<String>,
        available_copies: i32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publication_year,
            isbn: isbn.into(),
            available_copies,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    /// Take one copy off the shelf. Never goes below zero.
    pub(crate) fn check_out(&mut self) {
        if self.available_copies > 0 {
            self.available_copies -= 1;
        }
    }

    /// Put one copy back on the shelf. Saturates at `i32::MAX`.
    pub(crate) fn check_in(&mut self) {
        self.available_copies = self.available_copies.saturating_add(1);
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    #[validate(length(min = 1, message = "ISBN is required"))]
    pub isbn: String,
    #[validate(range(min = 0, message = "Copies cannot be negative"))]
    pub available_copies: i32,
}

impl From<NewBook> for Book {
    fn from(b: NewBook) -> Self {
        Self {
            title: b.title,
            author: b.author,
            publication_year: b.publication_year,
            isbn: b.isbn,
            available_copies: b.available_copies,
        }
    }
}

/// Partial book update.
///
/// A field is applied only when it carries a usable value: non-empty title or
/// author, a publication year above zero, a copy count of zero or more.
/// Anything else leaves the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publication_year: Option<i32>,
    pub available_copies: Option<i32>,
}

impl BookUpdate {
    pub(crate) fn apply_to(self, book: &mut Book) {
        if let Some(title) = self.title.filter(|t| !t.is_empty()) {
            book.title = title;
        }
        if let Some(author) = self.author.filter(|a| !a.is_empty()) {
            book.author = author;
        }
        if let Some(year) = self.publication_year.filter(|y| *y > 0) {
            book.publication_year = year;
        }
        if let Some(copies) = self.available_copies.filter(|c| *c >= 0) {
            book.available_copies = copies;
        }
    }
}

/// Shelf availability of a catalogued book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "copies", rename_all = "lowercase")]
pub enum Availability {
    Available(i32),
    Unavailable,
}

impl From<&Book> for Availability {
    fn from(book: &Book) -> Self {
        if book.is_available() {
            Availability::Available(book.available_copies)
        } else {
            Availability::Unavailable
        }
    }
}
