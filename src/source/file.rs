use std::path::{Path, PathBuf};

use crate::models::Bookworm;

use super::{parse_bookworms, BookwormSource, LoadError};

/// Loads bookworms from a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl BookwormSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<Bookworm>, LoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| read_error(&self.path, source))?;
        decode(&self.path, &bytes)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Reads the file and returns the bookworms found therein
///
/// Blocking counterpart of [`JsonFileSource::load`], decoding the same way.
pub fn load_bookworms(path: impl AsRef<Path>) -> Result<Vec<Bookworm>, LoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| read_error(path, source))?;
    decode(path, &bytes)
}

fn read_error(path: &Path, source: std::io::Error) -> LoadError {
    LoadError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn decode(path: &Path, bytes: &[u8]) -> Result<Vec<Bookworm>, LoadError> {
    let bookworms = parse_bookworms(bytes)?;

    tracing::info!(
        path = %path.display(),
        readers = bookworms.len(),
        "Bookworms loaded"
    );

    Ok(bookworms)
}
