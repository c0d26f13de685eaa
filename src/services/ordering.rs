use std::cmp::Ordering;

use crate::models::Book;

/// Canonical book order: author, then title
pub fn compare_books(a: &Book, b: &Book) -> Ordering {
    a.author
        .cmp(&b.author)
        .then_with(|| a.title.cmp(&b.title))
}

/// Sorts books by author and then title
pub fn sort_books(mut books: Vec<Book>) -> Vec<Book> {
    books.sort_by(compare_books);
    books
}

/// Recommendation order: higher score first, then canonical book order
///
/// Scores are sums of whole increments, so exact comparison is safe. NaN never
/// occurs and is treated as equal.
pub fn compare_scored(a: (&Book, f64), b: (&Book, f64)) -> Ordering {
    b.1.partial_cmp(&a.1)
        .unwrap_or(Ordering::Equal)
        .then_with(|| compare_books(a.0, b.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_books_by_author_then_title() {
        let books = vec![
            Book::new("Sylvia Plath", "The Bell Jar"),
            Book::new("Margaret Atwood", "The Handmaid's Tale"),
            Book::new("Margaret Atwood", "Oryx and Crake"),
            Book::new("Charlotte Brontë", "Jane Eyre"),
        ];

        let sorted = sort_books(books);
        let titles: Vec<&str> = sorted.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Jane Eyre", "Oryx and Crake", "The Handmaid's Tale", "The Bell Jar"]
        );
    }

    #[test]
    fn test_sort_books_uses_code_point_order() {
        // Uppercase letters sort before lowercase ones
        let sorted = sort_books(vec![Book::new("atwood", "x"), Book::new("Zola", "x")]);
        assert_eq!(sorted[0].author, "Zola");
    }

    #[test]
    fn test_compare_scored_prefers_higher_score() {
        let a = Book::new("Zola", "Germinal");
        let b = Book::new("Atwood", "Surfacing");
        assert_eq!(compare_scored((&a, 2.0), (&b, 1.0)), Ordering::Less);
        assert_eq!(compare_scored((&a, 1.0), (&b, 2.0)), Ordering::Greater);
    }

    #[test]
    fn test_compare_scored_ties_fall_back_to_author() {
        let a = Book::new("Zola", "Germinal");
        let b = Book::new("Atwood", "Surfacing");
        assert_eq!(compare_scored((&a, 1.0), (&b, 1.0)), Ordering::Greater);
        assert_eq!(compare_scored((&b, 1.0), (&b, 1.0)), Ordering::Equal);
    }
}
