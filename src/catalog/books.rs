//! In-memory book collection, keyed by ISBN

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookUpdate},
};

use super::search::{author_matches, title_matches};

#[derive(Debug, Clone, Default)]
pub struct BooksRepository {
    books: IndexMap<String, Book>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.books.len()
    }

    pub fn contains(&self, isbn: &str) -> bool {
        self.books.contains_key(isbn)
    }

    pub fn get(&self, isbn: &str) -> Option<&Book> {
        self.books.get(isbn)
    }

    pub(crate) fn get_mut(&mut self, isbn: &str) -> Option<&mut Book> {
        self.books.get_mut(isbn)
    }

    /// Books in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    pub(crate) fn insert(&mut self, book: Book) -> AppResult<()> {
        if self.contains(&book.isbn) {
            return Err(AppError::Conflict(format!(
                "Book with ISBN {} already exists",
                book.isbn
            )));
        }
        self.books.insert(book.isbn.clone(), book);
        Ok(())
    }

    pub(crate) fn remove(&mut self, isbn: &str) -> AppResult<Book> {
        self.books
            .shift_remove(isbn)
            .ok_or_else(|| AppError::BookNotFound(isbn.to_string()))
    }

    pub(crate) fn update(&mut self, isbn: &str, update: BookUpdate) -> AppResult<&Book> {
        let book = self
            .books
            .get_mut(isbn)
            .ok_or_else(|| AppError::BookNotFound(isbn.to_string()))?;
        update.apply_to(book);
        Ok(book)
    }

    pub fn find_by_title(&self, title: &str) -> Vec<&Book> {
        self.iter().filter(|b| title_matches(&b.title, title)).collect()
    }

    pub fn find_by_author(&self, author: &str) -> Vec<&Book> {
        self.iter().filter(|b| author_matches(&b.author, author)).collect()
    }
}
