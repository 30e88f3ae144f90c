//! Statistics endpoint

use axum::{extract::State, Json};

use crate::{models::LibraryStats, AppState};

/// Total number of books and percentage read
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Library statistics", body = LibraryStats)
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> Json<LibraryStats> {
    Json(state.services.library.statistics().await)
}
