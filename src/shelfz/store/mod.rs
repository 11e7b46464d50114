//! # Storage Layer
//!
//! The [`BookStore`] trait is the seam between shelf logic and persistence.
//! The original system talked to a remote table over a network client; here
//! the same three operations are a trait so the command layer never knows
//! which backend it is writing to.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single JSON document
//!   (`books.json`) holding the id counter and every record.
//! - [`memory::InMemoryStore`]: in-memory storage for tests.
//!
//! ## Ordering contract
//!
//! `list_books` returns records sorted by `book_order` ascending with `id`
//! as the tie-break, so every caller sees the same deterministic shelf even
//! if a past partial failure left duplicate order values behind.

use crate::error::Result;
use crate::model::{Book, NewBook};

pub mod fs;
pub mod memory;

/// Abstract interface for the persisted shelf.
pub trait BookStore {
    /// Insert a new record, returning it with its store-assigned id and
    /// creation timestamp.
    fn insert_book(&mut self, book: NewBook) -> Result<Book>;

    /// All records in display order (`book_order` asc, id as tie-break).
    fn list_books(&self) -> Result<Vec<Book>>;

    /// Write new `book_order` values for the given `(id, book_order)` pairs
    /// as one atomic batch. An unknown id fails the whole batch and leaves
    /// the store untouched.
    fn update_orders(&mut self, changes: &[(i64, i64)]) -> Result<()>;
}
