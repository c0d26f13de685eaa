pub mod occurrences;
pub mod ordering;
pub mod recommendations;

pub use occurrences::{book_count, find_common_books};
pub use ordering::{compare_books, compare_scored, sort_books};
pub use recommendations::{recommend_books, CooccurrenceMatrix};
