//! Catalog management service

use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{Availability, Book, BookUpdate, NewBook},
};

use super::SharedCatalog;

#[derive(Clone)]
pub struct CatalogService {
    catalog: SharedCatalog,
}

impl CatalogService {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }

    /// Add a new book after validating the request
    pub async fn add_book(&self, book: NewBook) -> AppResult<Book> {
        book.validate()?;
        let book = Book::from(book);
        self.catalog.lock().await.add_book(book.clone())?;
        tracing::info!("Catalog add: {} ({})", book.title, book.isbn);
        Ok(book)
    }

    pub async fn remove_book(&self, isbn: &str) -> AppResult<Book> {
        let removed = self.catalog.lock().await.remove_book(isbn)?;
        tracing::info!("Catalog remove: {}", isbn);
        Ok(removed)
    }

    pub async fn update_book(&self, isbn: &str, update: BookUpdate) -> AppResult<Book> {
        let mut catalog = self.catalog.lock().await;
        let book = catalog.update_book(isbn, update)?;
        Ok(book.clone())
    }

    pub async fn get_book(&self, isbn: &str) -> Option<Book> {
        self.catalog.lock().await.find_book_by_isbn(isbn).cloned()
    }

    pub async fn search_by_title(&self, title: &str) -> Vec<Book> {
        tracing::debug!("Title search: {:?}", title);
        let catalog = self.catalog.lock().await;
        catalog.find_books_by_title(title).into_iter().cloned().collect()
    }

    pub async fn search_by_author(&self, author: &str) -> Vec<Book> {
        tracing::debug!("Author search: {:?}", author);
        let catalog = self.catalog.lock().await;
        catalog.find_books_by_author(author).into_iter().cloned().collect()
    }

    pub async fn list_books(&self) -> Vec<Book> {
        self.catalog.lock().await.books().cloned().collect()
    }

    pub async fn availability(&self, isbn: &str) -> AppResult<Availability> {
        self.catalog.lock().await.availability(isbn)
    }
}
