use std::sync::Arc;

use crate::error::AppResult;
use crate::models::Bookworm;
use crate::source::BookwormSource;

/// Shared application state
///
/// Shelves are loaded once at startup and only read afterwards.
#[derive(Clone, Default)]
pub struct AppState {
    pub shelves: Arc<Vec<Bookworm>>,
}

impl AppState {
    /// Creates state serving the given shelves
    pub fn new(shelves: Vec<Bookworm>) -> Self {
        Self {
            shelves: Arc::new(shelves),
        }
    }

    /// Loads the shelves from a source
    pub async fn load(source: &dyn BookwormSource) -> AppResult<Self> {
        tracing::info!(source = %source.describe(), "Loading bookworms");
        let shelves = source.load().await?;
        Ok(Self::new(shelves))
    }
}
