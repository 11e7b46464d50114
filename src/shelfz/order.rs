//! # Shelf Ordering
//!
//! The core of the system: keeping an in-memory sequence of books consistent
//! with the persisted `book_order` field.
//!
//! Invariant: after any completed operation the `book_order` values of the
//! full record set are a dense zero-based permutation of `[0, count)`, equal
//! to each record's positional index. Records that share a `book_order`
//! (possible only if a past partial failure left the store inconsistent)
//! are tie-broken by ascending `id` on every sorted read.

use crate::catalog;
use crate::model::Book;

/// A book annotated with its user-facing shelf position and derived cover.
#[derive(Debug, Clone)]
pub struct DisplayBook {
    pub book: Book,
    /// 1-based shelf position as shown to the user.
    pub position: usize,
    pub cover_url: Option<String>,
}

/// Sorts books into display order: `book_order` ascending, id as tie-break.
pub fn sort_books(books: &mut [Book]) {
    books.sort_by_key(|b| (b.book_order, b.id));
}

/// Assigns 1-based positions and cover URLs to a sorted list of books.
pub fn index_books(mut books: Vec<Book>) -> Vec<DisplayBook> {
    sort_books(&mut books);
    books
        .into_iter()
        .enumerate()
        .map(|(i, book)| {
            let cover_url = catalog::extract_identifier(&book.url).map(catalog::cover_image_url);
            DisplayBook {
                book,
                position: i + 1,
                cover_url,
            }
        })
        .collect()
}

/// Moves the element at `source` to `destination` and renumbers.
///
/// Every element's `book_order` is rewritten to its new positional index,
/// restoring the dense `[0, len)` permutation. Returns the `(id, book_order)`
/// pairs that actually changed, in display order; callers persist exactly
/// those. `source == destination` changes nothing and returns an empty list.
///
/// Both indexes are zero-based and must be in bounds; out-of-bounds input is
/// a caller bug and panics like any slice access would.
pub fn reorder(books: &mut Vec<Book>, source: usize, destination: usize) -> Vec<(i64, i64)> {
    assert!(source < books.len() && destination < books.len());

    if source == destination {
        return Vec::new();
    }

    let moved = books.remove(source);
    books.insert(destination, moved);

    let mut changed = Vec::new();
    for (i, book) in books.iter_mut().enumerate() {
        let new_order = i as i64;
        if book.book_order != new_order {
            book.book_order = new_order;
            changed.push((book.id, new_order));
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_book(id: i64, book_order: i64) -> Book {
        Book {
            id,
            url: format!("https://www.amazon.com/dp/B0000000{:02}/", id),
            comment: String::new(),
            book_order,
            created_at: Utc::now(),
        }
    }

    fn shelf(orders: &[(i64, i64)]) -> Vec<Book> {
        orders
            .iter()
            .map(|&(id, order)| make_book(id, order))
            .collect()
    }

    fn ids(books: &[Book]) -> Vec<i64> {
        books.iter().map(|b| b.id).collect()
    }

    fn orders(books: &[Book]) -> Vec<i64> {
        books.iter().map(|b| b.book_order).collect()
    }

    #[test]
    fn move_first_to_last() {
        // The canonical scenario: [1,2,3] with orders [0,1,2], move 0 -> 2.
        let mut books = shelf(&[(1, 0), (2, 1), (3, 2)]);
        let changed = reorder(&mut books, 0, 2);

        assert_eq!(ids(&books), vec![2, 3, 1]);
        assert_eq!(orders(&books), vec![0, 1, 2]);
        assert_eq!(changed, vec![(2, 0), (3, 1), (1, 2)]);
    }

    #[test]
    fn move_last_to_first() {
        let mut books = shelf(&[(1, 0), (2, 1), (3, 2)]);
        reorder(&mut books, 2, 0);

        assert_eq!(ids(&books), vec![3, 1, 2]);
        assert_eq!(orders(&books), vec![0, 1, 2]);
    }

    #[test]
    fn move_within_middle_only_renumbers_affected_range() {
        let mut books = shelf(&[(1, 0), (2, 1), (3, 2), (4, 3), (5, 4)]);
        let changed = reorder(&mut books, 1, 3);

        assert_eq!(ids(&books), vec![1, 3, 4, 2, 5]);
        assert_eq!(orders(&books), vec![0, 1, 2, 3, 4]);
        // Books outside [source, destination] keep their order and are not
        // reported as changed.
        assert_eq!(changed, vec![(3, 1), (4, 2), (2, 3)]);
    }

    #[test]
    fn same_source_and_destination_is_a_noop() {
        let mut books = shelf(&[(1, 0), (2, 1), (3, 2)]);
        let changed = reorder(&mut books, 1, 1);

        assert_eq!(ids(&books), vec![1, 2, 3]);
        assert_eq!(orders(&books), vec![0, 1, 2]);
        assert!(changed.is_empty());
    }

    #[test]
    fn reorder_is_a_permutation() {
        let mut books = shelf(&[(10, 0), (20, 1), (30, 2), (40, 3)]);
        reorder(&mut books, 3, 1);

        let mut sorted_ids = ids(&books);
        sorted_ids.sort();
        assert_eq!(sorted_ids, vec![10, 20, 30, 40]);
        assert_eq!(orders(&books), vec![0, 1, 2, 3]);
    }

    #[test]
    fn sort_breaks_order_ties_by_id() {
        // A past partial failure can leave duplicate orders in the store.
        let mut books = shelf(&[(7, 1), (3, 1), (5, 0)]);
        sort_books(&mut books);

        assert_eq!(ids(&books), vec![5, 3, 7]);
    }

    #[test]
    fn index_books_assigns_positions_and_covers() {
        let mut books = shelf(&[(2, 1), (1, 0)]);
        books[1].url = "https://example.com/no-identifier".to_string();

        let indexed = index_books(books);
        assert_eq!(indexed.len(), 2);
        assert_eq!(indexed[0].book.id, 1);
        assert_eq!(indexed[0].position, 1);
        assert!(indexed[0].cover_url.is_none());
        assert_eq!(indexed[1].book.id, 2);
        assert_eq!(indexed[1].position, 2);
        assert!(indexed[1]
            .cover_url
            .as_deref()
            .unwrap()
            .contains("B000000002"));
    }
}
