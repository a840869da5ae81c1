use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::{RecommendedMovie, ScoredMovie},
    services::PosterResolver,
    state::AppState,
};

const DEFAULT_RESULT_COUNT: usize = 5;

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    title: String,
    #[serde(default = "default_n")]
    n: usize,
}

fn default_n() -> usize {
    DEFAULT_RESULT_COUNT
}

#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub results: Vec<RecommendedMovie>,
}

#[derive(Debug, Serialize)]
pub struct CollaborativeResponse {
    pub results: Vec<RecommendedMovie>,
    /// Set only when the collaborative path failed internally
    pub diagnostic: Option<String>,
}

/// Handler for content-based recommendations
///
/// The title must match a catalog entry exactly; an unknown title is a 404.
pub async fn content(
    State(state): State<AppState>,
    Query(params): Query<RecommendQuery>,
) -> AppResult<Json<ContentResponse>> {
    let title = validated_title(&params)?;

    let ranked = state.content.recommend(title, params.n)?;
    let results = resolve_posters(state.posters.as_ref(), &ranked).await;

    Ok(Json(ContentResponse { results }))
}

/// Handler for collaborative-filtering recommendations
///
/// Always answers 200: no plausible match and internal failure both come back
/// as empty results, the latter with a diagnostic.
pub async fn collaborative(
    State(state): State<AppState>,
    Query(params): Query<RecommendQuery>,
) -> AppResult<Json<CollaborativeResponse>> {
    let title = validated_title(&params)?;

    let outcome = state.collaborative.recommend(title, params.n);
    let results = resolve_posters(state.posters.as_ref(), outcome.results()).await;

    Ok(Json(CollaborativeResponse {
        results,
        diagnostic: outcome.diagnostic().map(str::to_string),
    }))
}

fn validated_title(params: &RecommendQuery) -> AppResult<&str> {
    let title = params.title.trim();
    if title.is_empty() {
        return Err(AppError::InvalidInput(
            "Query title cannot be empty".to_string(),
        ));
    }
    Ok(title)
}

/// Enriches ranked results with poster URLs, one sequential lookup per result
/// in rank order. Failed lookups surface as empty URLs, never as errors.
async fn resolve_posters(
    posters: &dyn PosterResolver,
    ranked: &[ScoredMovie],
) -> Vec<RecommendedMovie> {
    let mut enriched = Vec::with_capacity(ranked.len());
    for movie in ranked {
        let poster_url = posters.resolve(movie.movie_id).await;
        enriched.push(RecommendedMovie {
            movie_id: movie.movie_id,
            title: movie.title.clone(),
            poster_url,
        });
    }
    enriched
}
