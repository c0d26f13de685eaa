use axum::{extract::State, http::StatusCode, Json};

use crate::error::{AppError, AppResult};
use crate::models::{Book, Bookworm, Recommendation};
use crate::services::{find_common_books, recommend_books};

use super::AppState;

/// Runs an analysis off the async workers
async fn analyze<T, F>(shelves: std::sync::Arc<Vec<Bookworm>>, analysis: F) -> AppResult<T>
where
    T: Send + 'static,
    F: FnOnce(&[Bookworm]) -> T + Send + 'static,
{
    tokio::task::spawn_blocking(move || analysis(shelves.as_slice()))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Books shared by more than one loaded bookworm
pub async fn get_common_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = analyze(state.shelves.clone(), find_common_books).await?;
    Ok(Json(books))
}

/// Recommendations for every loaded bookworm
pub async fn get_recommendations(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let recommendations = analyze(state.shelves.clone(), recommend_books).await?;
    Ok(Json(recommendations))
}

/// Books in common among the bookworms sent in the request
pub async fn post_common_books(
    Json(bookworms): Json<Vec<Bookworm>>,
) -> AppResult<Json<Vec<Book>>> {
    tracing::info!(readers = bookworms.len(), "Finding common books");
    let books = analyze(bookworms.into(), find_common_books).await?;
    Ok(Json(books))
}

/// Recommendations for the bookworms sent in the request
pub async fn post_recommendations(
    Json(bookworms): Json<Vec<Bookworm>>,
) -> AppResult<Json<Vec<Recommendation>>> {
    tracing::info!(readers = bookworms.len(), "Recommending books");
    let recommendations = analyze(bookworms.into(), recommend_books).await?;
    Ok(Json(recommendations))
}
