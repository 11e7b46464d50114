//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for every
//! shelf operation. It dispatches to command functions, normalizes inputs
//! (user-facing 1-based positions to zero-based indices) and returns
//! structured `Result<CmdResult>` values. No business logic, no I/O
//! formatting, no presentation concerns live here.
//!
//! `ShelfApi<S: BookStore>` is generic over the storage backend:
//! production uses `ShelfApi<FileStore>`, tests use
//! `ShelfApi<InMemoryStore>`.

use crate::commands;
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::model::Visibility;
use crate::store::BookStore;
use std::path::{Path, PathBuf};

/// The main API facade for shelfz operations.
///
/// All UI clients (CLI or otherwise) should interact through this API.
pub struct ShelfApi<S: BookStore> {
    store: S,
    config: ShelfConfig,
    config_dir: PathBuf,
}

impl<S: BookStore> ShelfApi<S> {
    pub fn new(store: S, config: ShelfConfig, config_dir: PathBuf) -> Self {
        Self {
            store,
            config,
            config_dir,
        }
    }

    pub fn add_book(&mut self, url: String, comment: String) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, url, comment)
    }

    pub fn list_shelf(&self, visibility: Visibility) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, visibility, self.config.collapsed_rows)
    }

    /// Moves a book between 1-based shelf positions.
    pub fn move_book(&mut self, from: usize, to: usize) -> Result<commands::CmdResult> {
        let source = to_zero_based(from)?;
        let destination = to_zero_based(to)?;
        commands::move_book::run(&mut self.store, source, destination)
    }

    pub fn export_snapshot(&self, visibility: Visibility) -> Result<commands::CmdResult> {
        let path = Path::new(&self.config.snapshot_file);
        commands::export::run(&self.store, visibility, self.config.collapsed_rows, path)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn collapsed_rows(&self) -> usize {
        self.config.collapsed_rows
    }
}

fn to_zero_based(position: usize) -> Result<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| ShelfError::Api("Positions are numbered from 1".to_string()))
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> ShelfApi<InMemoryStore> {
        let dir = std::env::temp_dir();
        ShelfApi::new(InMemoryStore::new(), ShelfConfig::default(), dir)
    }

    #[test]
    fn move_normalizes_one_based_positions() {
        let mut api = api();
        api.add_book("https://a".into(), "".into()).unwrap();
        api.add_book("https://b".into(), "".into()).unwrap();

        let result = api.move_book(1, 2).unwrap();
        let ids: Vec<_> = result.listed_books.iter().map(|b| b.book.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn position_zero_is_rejected() {
        let mut api = api();
        api.add_book("https://a".into(), "".into()).unwrap();

        assert!(api.move_book(0, 1).is_err());
        assert!(api.move_book(1, 0).is_err());
    }

    #[test]
    fn list_uses_configured_collapsed_rows() {
        let mut config = ShelfConfig::default();
        config.collapsed_rows = 2;
        let mut api = ShelfApi::new(InMemoryStore::new(), config, std::env::temp_dir());

        for i in 0..4 {
            api.add_book(format!("https://book{}", i), "".into())
                .unwrap();
        }

        let result = api.list_shelf(Visibility::Collapsed).unwrap();
        assert_eq!(result.listed_books.len(), 2);
    }
}
