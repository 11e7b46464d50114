use super::BookStore;
use crate::error::{Result, ShelfError};
use crate::model::{Book, NewBook};
use crate::order::sort_books;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILENAME: &str = "books.json";

/// The on-disk document: an id counter plus every record.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ShelfDoc {
    next_id: i64,
    books: Vec<Book>,
}

/// File-backed store. Each mutation loads the document, applies the change
/// and writes the whole document back, so a batch of order updates lands in
/// a single write.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }

    fn load_doc(&self) -> Result<ShelfDoc> {
        let data_file = self.data_path();
        if !data_file.exists() {
            return Ok(ShelfDoc::default());
        }
        let content = fs::read_to_string(data_file).map_err(ShelfError::Io)?;
        let doc: ShelfDoc = serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(doc)
    }

    fn save_doc(&self, doc: &ShelfDoc) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(doc).map_err(ShelfError::Serialization)?;
        fs::write(self.data_path(), content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl BookStore for FileStore {
    fn insert_book(&mut self, book: NewBook) -> Result<Book> {
        let mut doc = self.load_doc()?;

        doc.next_id += 1;
        let record = Book {
            id: doc.next_id,
            url: book.url,
            comment: book.comment,
            book_order: book.book_order,
            created_at: Utc::now(),
        };

        doc.books.push(record.clone());
        self.save_doc(&doc)?;
        Ok(record)
    }

    fn list_books(&self) -> Result<Vec<Book>> {
        let mut books = self.load_doc()?.books;
        sort_books(&mut books);
        Ok(books)
    }

    fn update_orders(&mut self, changes: &[(i64, i64)]) -> Result<()> {
        let mut doc = self.load_doc()?;

        // Validate the whole batch before touching anything.
        for &(id, _) in changes {
            if !doc.books.iter().any(|b| b.id == id) {
                return Err(ShelfError::BookNotFound(id));
            }
        }

        for &(id, book_order) in changes {
            if let Some(book) = doc.books.iter_mut().find(|b| b.id == id) {
                book.book_order = book_order;
            }
        }

        self.save_doc(&doc)
    }
}
