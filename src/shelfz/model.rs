use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How much of the shelf an operation renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// Show only the first `collapsed_rows` books (default view).
    Collapsed,
    /// Show the whole shelf.
    Expanded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub url: String,
    #[serde(default)]
    pub comment: String,
    pub book_order: i64,
    pub created_at: DateTime<Utc>,
}

/// Insert payload. The store assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub url: String,
    pub comment: String,
    pub book_order: i64,
}

impl NewBook {
    pub fn new(url: String, comment: String, book_order: i64) -> Self {
        Self {
            url,
            comment,
            book_order,
        }
    }
}
