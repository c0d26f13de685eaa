use serde::{Deserialize, Deserializer, Serialize};

use super::Book;

/// Reads a missing or `null` shelf as an empty one
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Book>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Book>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A reader and the books on their shelf
///
/// Shelf order carries no ranking. A shelf may be empty and may list the
/// same book more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookworm {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub books: Vec<Book>,
}

impl Bookworm {
    pub fn new(name: impl Into<String>, books: Vec<Book>) -> Self {
        Self {
            name: name.into(),
            books,
        }
    }
}

/// Ranked books suggested to one bookworm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Name of the bookworm the books are recommended to
    pub name: String,
    /// Books ordered from most to least relevant
    pub books: Vec<Book>,
}
