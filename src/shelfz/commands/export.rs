use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::Visibility;
use crate::order::DisplayBook;
use crate::store::BookStore;
use std::fs;
use std::path::Path;

use super::helpers::{shelf_books, visible_books};

/// Writes a snapshot of the currently visible shelf to `path`.
///
/// This captures the rendered rows exactly as the list view would show them
/// (collapsed or expanded), not a structured dump of the store.
pub fn run<S: BookStore>(
    store: &S,
    visibility: Visibility,
    collapsed_rows: usize,
    path: &Path,
) -> Result<CmdResult> {
    let books = shelf_books(store)?;
    let (visible, _hidden) = visible_books(books, visibility, collapsed_rows);

    if visible.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No books to export."));
        return Ok(result);
    }

    let snapshot = render_snapshot(&visible);
    fs::write(path, snapshot).map_err(ShelfError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} book(s) to {}",
        visible.len(),
        path.display()
    )));
    Ok(result)
}

fn render_snapshot(books: &[DisplayBook]) -> String {
    let mut out = String::new();
    for db in books {
        out.push_str(&format!("{}. {}\n", db.position, db.book.url));
        if let Some(cover) = &db.cover_url {
            out.push_str(&format!("   cover: {}\n", cover));
        }
        if !db.book.comment.is_empty() {
            out.push_str(&format!("   {}\n", db.book.comment));
        }
    }
    out
}
