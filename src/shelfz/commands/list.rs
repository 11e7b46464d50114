use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Visibility;
use crate::store::BookStore;

use super::helpers::{shelf_books, visible_books};

pub fn run<S: BookStore>(
    store: &S,
    visibility: Visibility,
    collapsed_rows: usize,
) -> Result<CmdResult> {
    let books = shelf_books(store)?;
    let (visible, hidden) = visible_books(books, visibility, collapsed_rows);

    let mut result = CmdResult::default().with_listed_books(visible);
    if hidden > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} more book(s) on the shelf. Use --all to show everything.",
            hidden
        )));
    }
    Ok(result)
}
