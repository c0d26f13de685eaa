mod book;
mod bookworm;

pub use book::Book;
pub use bookworm::{Bookworm, Recommendation};
