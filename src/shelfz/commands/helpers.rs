use crate::error::Result;
use crate::model::Visibility;
use crate::order::{index_books, DisplayBook};
use crate::store::BookStore;

/// The full shelf in display order, with positions and covers assigned.
pub fn shelf_books<S: BookStore>(store: &S) -> Result<Vec<DisplayBook>> {
    let books = store.list_books()?;
    Ok(index_books(books))
}

/// Truncates the shelf to what the given visibility actually shows.
///
/// Returns the visible rows and how many were hidden.
pub fn visible_books(
    books: Vec<DisplayBook>,
    visibility: Visibility,
    collapsed_rows: usize,
) -> (Vec<DisplayBook>, usize) {
    match visibility {
        Visibility::Expanded => (books, 0),
        Visibility::Collapsed => {
            let hidden = books.len().saturating_sub(collapsed_rows);
            let mut books = books;
            books.truncate(collapsed_rows);
            (books, hidden)
        }
    }
}
