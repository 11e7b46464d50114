use crate::catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewBook;
use crate::store::BookStore;

use super::helpers::shelf_books;

/// Appends a book to the end of the shelf.
///
/// The new record gets `book_order = count_before_insert`, then the full
/// list is reloaded from the store so the caller sees the store-assigned id.
pub fn run<S: BookStore>(store: &mut S, url: String, comment: String) -> Result<CmdResult> {
    let count = store.list_books()?.len() as i64;

    let identifier = catalog::extract_identifier(&url).map(str::to_string);
    let record = store.insert_book(NewBook::new(url, comment, count))?;

    let mut result = CmdResult::default().with_listed_books(shelf_books(store)?);
    let note = match identifier {
        Some(id) => format!("Added book {} at position {}", id, count + 1),
        None => format!("Added book (no cover) at position {}", count + 1),
    };
    result.add_message(CmdMessage::success(note));
    result.affected_books.push(record);
    Ok(result)
}
