//! Shelf analytics for bookworms.
//!
//! Given readers and the books on their shelves, finds the books shared by
//! several readers and recommends unread books from shelf co-occurrence.

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod source;

pub use models::{Book, Bookworm, Recommendation};
pub use services::{book_count, find_common_books, recommend_books, CooccurrenceMatrix};
