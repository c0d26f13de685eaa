use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A book on a bookworm's shelf
///
/// Two books are the same book iff both author and title match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub title: String,
}

impl Book {
    /// Creates a new book
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
        }
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}
