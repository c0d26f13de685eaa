use std::collections::{HashMap, HashSet};

use crate::models::{Book, Bookworm};

use super::ordering::sort_books;

/// Counts, for every book, how many distinct bookworms own it
///
/// A book listed several times on the same shelf counts once for that shelf.
pub fn book_count(bookworms: &[Bookworm]) -> HashMap<Book, u32> {
    let mut count: HashMap<Book, u32> = HashMap::new();
    let mut seen: HashSet<&Book> = HashSet::new();

    for bookworm in bookworms {
        seen.clear();

        for book in &bookworm.books {
            if seen.insert(book) {
                *count.entry(book.clone()).or_insert(0) += 1;
            }
        }
    }

    count
}

/// Returns the books that are on more than one bookworm's shelf,
/// sorted by author and then title
pub fn find_common_books(bookworms: &[Bookworm]) -> Vec<Book> {
    let common: Vec<Book> = book_count(bookworms)
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(book, _)| book)
        .collect();

    tracing::debug!(
        readers = bookworms.len(),
        common = common.len(),
        "Common books found"
    );

    sort_books(common)
}
