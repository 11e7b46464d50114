use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::order::{index_books, reorder};
use crate::store::BookStore;

/// Moves the book at `source` to `destination` (both zero-based).
///
/// The new arrangement is computed locally, then every changed
/// `(id, book_order)` pair is persisted in one batch. The returned listing
/// is the local arrangement, which matches the store once the batch lands.
pub fn run<S: BookStore>(store: &mut S, source: usize, destination: usize) -> Result<CmdResult> {
    let mut books = store.list_books()?;
    let len = books.len();

    if source >= len || destination >= len {
        return Err(ShelfError::Api(format!(
            "Position out of range: the shelf has {} book(s)",
            len
        )));
    }

    if source == destination {
        let mut result = CmdResult::default().with_listed_books(index_books(books));
        result.add_message(CmdMessage::info("Book is already at that position"));
        return Ok(result);
    }

    let changed = reorder(&mut books, source, destination);
    store.update_orders(&changed)?;

    let mut result = CmdResult::default().with_listed_books(index_books(books));
    result.add_message(CmdMessage::success(format!(
        "Moved book from position {} to {}",
        source + 1,
        destination + 1
    )));
    Ok(result)
}
