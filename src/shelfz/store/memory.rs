use super::BookStore;
use crate::error::{Result, ShelfError};
use crate::model::{Book, NewBook};
use crate::order::sort_books;
use chrono::Utc;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    next_id: i64,
    books: Vec<Book>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookStore for InMemoryStore {
    fn insert_book(&mut self, book: NewBook) -> Result<Book> {
        self.next_id += 1;
        let record = Book {
            id: self.next_id,
            url: book.url,
            comment: book.comment,
            book_order: book.book_order,
            created_at: Utc::now(),
        };
        self.books.push(record.clone());
        Ok(record)
    }

    fn list_books(&self) -> Result<Vec<Book>> {
        let mut books = self.books.clone();
        sort_books(&mut books);
        Ok(books)
    }

    fn update_orders(&mut self, changes: &[(i64, i64)]) -> Result<()> {
        for &(id, _) in changes {
            if !self.books.iter().any(|b| b.id == id) {
                return Err(ShelfError::BookNotFound(id));
            }
        }
        for &(id, book_order) in changes {
            if let Some(book) = self.books.iter_mut().find(|b| b.id == id) {
                book.book_order = book_order;
            }
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` books with valid catalog identifiers, in order.
        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let url = format!("https://www.amazon.com/dp/B0000000{:02}/", i + 1);
                let book = NewBook::new(url, format!("Book {}", i + 1), i as i64);
                self.store.insert_book(book).unwrap();
            }
            self
        }

        /// Adds one book with a URL that carries no identifier.
        pub fn with_coverless_book(mut self) -> Self {
            let order = self.store.books.len() as i64;
            let book = NewBook::new(
                "https://example.com/some-book".to_string(),
                "no cover".to_string(),
                order,
            );
            self.store.insert_book(book).unwrap();
            self
        }
    }
}
