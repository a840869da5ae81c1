use axum::{extract::State, Json};

use crate::{models::Movie, state::AppState};

/// Handler for the catalog listing endpoint; the selection surface clients
/// populate their title picker from.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Movie>> {
    Json(state.catalog.movies().to_vec())
}
