//! # Book Store
//!
//! The process-wide in-memory collection of books.
//!
//! The record sequence and the id counter live together behind a single
//! `RwLock`, so every write operation runs as one critical section. Ids
//! are handed out monotonically and never reused, even after deletion.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use super::book::{Book, BookId, BookPatch, NewBook};
use super::errors::{RegistryError, RegistryResult};

#[derive(Debug)]
struct RegistryState {
    /// Insertion order
    books: Vec<Book>,
    next_id: BookId,
}

impl RegistryState {
    fn position(&self, id: BookId) -> RegistryResult<usize> {
        self.books
            .iter()
            .position(|b| b.id == id)
            .ok_or(RegistryError::NotFound)
    }
}

/// In-memory book registry
#[derive(Debug)]
pub struct BookRegistry {
    state: RwLock<RegistryState>,
}

impl BookRegistry {
    /// Registry holding the three seed books (ids 1-3)
    pub fn seeded() -> Self {
        Self::with_books(vec![
            Book::new(1, "The Great Gatsby", "F. Scott Fitzgerald"),
            Book::new(2, "1984", "George Orwell"),
            Book::new(3, "To Kill a Mockingbird", "Harper Lee"),
        ])
    }

    pub fn empty() -> Self {
        Self::with_books(Vec::new())
    }

    /// Registry holding the given books, in order.
    ///
    /// The next id is one past the highest id supplied.
    pub fn with_books(books: Vec<Book>) -> Self {
        let next_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            state: RwLock::new(RegistryState { books, next_id }),
        }
    }

    fn read(&self) -> RegistryResult<RwLockReadGuard<'_, RegistryState>> {
        self.state.read().map_err(|_| RegistryError::poisoned())
    }

    fn write(&self) -> RegistryResult<RwLockWriteGuard<'_, RegistryState>> {
        self.state.write().map_err(|_| RegistryError::poisoned())
    }

    /// All books in insertion order
    pub fn list(&self) -> RegistryResult<Vec<Book>> {
        Ok(self.read()?.books.clone())
    }

    pub fn len(&self) -> RegistryResult<usize> {
        Ok(self.read()?.books.len())
    }

    pub fn is_empty(&self) -> RegistryResult<bool> {
        Ok(self.len()? == 0)
    }

    /// The id the next successful create will receive
    pub fn next_id(&self) -> RegistryResult<BookId> {
        Ok(self.read()?.next_id)
    }

    pub fn get(&self, id: BookId) -> RegistryResult<Book> {
        let state = self.read()?;
        let index = state.position(id)?;
        Ok(state.books[index].clone())
    }

    /// Validate and append a new book, assigning it the next id
    pub fn create(&self, new: NewBook) -> RegistryResult<Book> {
        let valid = new.validate()?;

        let mut state = self.write()?;
        let book = Book::new(state.next_id, valid.title, valid.author);
        state.next_id += 1;
        state.books.push(book.clone());

        debug!(id = book.id, "book created");
        Ok(book)
    }

    /// Overwrite the non-empty fields of the patch on an existing book
    pub fn update(&self, id: BookId, patch: BookPatch) -> RegistryResult<Book> {
        let mut state = self.write()?;
        let index = state.position(id)?;

        let book = &mut state.books[index];
        book.apply(patch);

        debug!(id, "book updated");
        Ok(book.clone())
    }

    /// Remove a book, preserving the order of the rest
    pub fn delete(&self, id: BookId) -> RegistryResult<Book> {
        let mut state = self.write()?;
        let index = state.position(id)?;
        let removed = state.books.remove(index);

        debug!(id, "book deleted");
        Ok(removed)
    }
}

impl Default for BookRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}
