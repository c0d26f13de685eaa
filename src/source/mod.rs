//! Bookworm record loading
//!
//! Sources turn some byte source into the in-memory list of bookworms the
//! analyses run on. Every failure surfaces as a [`LoadError`] before any
//! analysis starts.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Bookworm;

pub mod file;

pub use file::{load_bookworms, JsonFileSource};

/// Error raised when bookworms cannot be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed bookworms: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A place bookworms can be loaded from
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait BookwormSource: Send + Sync {
    /// Loads every bookworm, in source order
    async fn load(&self) -> Result<Vec<Bookworm>, LoadError>;

    /// Human readable description for logging
    fn describe(&self) -> String;
}

/// Decodes a JSON array of bookworms
pub fn parse_bookworms(bytes: &[u8]) -> Result<Vec<Bookworm>, LoadError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Book;

    #[test]
    fn test_parse_bookworms() {
        let json = br#"[
            {"name": "Fadi", "books": [{"author": "Sylvia Plath", "title": "The Bell Jar"}]},
            {"name": "Peggy", "books": []}
        ]"#;

        let bookworms = parse_bookworms(json).unwrap();
        assert_eq!(
            bookworms,
            vec![
                Bookworm::new("Fadi", vec![Book::new("Sylvia Plath", "The Bell Jar")]),
                Bookworm::new("Peggy", vec![]),
            ]
        );
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse_bookworms(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_tolerates_null_and_missing_fields() {
        let json = br#"[
            {"name": "Fadi", "books": null},
            {"books": [{"author": "Sylvia Plath"}]}
        ]"#;

        let bookworms = parse_bookworms(json).unwrap();
        assert_eq!(
            bookworms,
            vec![
                Bookworm::new("Fadi", vec![]),
                Bookworm::new("", vec![Book::new("Sylvia Plath", "")]),
            ]
        );
    }

    #[test]
    fn test_parse_malformed() {
        let result = parse_bookworms(br#"[{"name": "Fadi", "books": [}]"#);
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_parse_wrong_shape() {
        let result = parse_bookworms(br#"{"name": "Fadi", "books": []}"#);
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_mock_source() {
        let mut source = MockBookwormSource::new();
        source
            .expect_load()
            .times(1)
            .returning(|| Ok(vec![Bookworm::new("Fadi", vec![])]));

        let bookworms = tokio_test::block_on(source.load()).unwrap();
        assert_eq!(bookworms.len(), 1);
        assert_eq!(bookworms[0].name, "Fadi");
    }
}
