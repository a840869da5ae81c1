use std::sync::Arc;

use crate::{
    data::Catalog,
    error::{AppError, AppResult},
    models::ScoredMovie,
};

/// Content-based recommender over the precomputed similarity matrix
///
/// Pure lookup: the input title must match a catalog entry exactly; its
/// similarity row is ranked and the top `n` other movies returned.
#[derive(Clone)]
pub struct ContentRecommender {
    catalog: Arc<Catalog>,
}

impl ContentRecommender {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Ranks all other catalog entries by similarity to `title`, descending.
    ///
    /// Ties are broken by ascending row position so results are stable across
    /// calls. An unknown title is a caller error, not a degraded result.
    pub fn recommend(&self, title: &str, n: usize) -> AppResult<Vec<ScoredMovie>> {
        let position = self.catalog.position_of(title).ok_or_else(|| {
            AppError::NotFound(format!("no movie titled '{}' in the catalog", title))
        })?;

        let row = self.catalog.similarity_row(position);
        let mut ranked: Vec<(usize, f32)> = row
            .iter()
            .copied()
            .enumerate()
            .filter(|&(other, _)| other != position)
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(n);

        let results: Vec<ScoredMovie> = ranked
            .into_iter()
            .filter_map(|(other, score)| {
                self.catalog.movie_at(other).map(|movie| ScoredMovie {
                    movie_id: movie.movie_id,
                    title: movie.title.clone(),
                    score,
                })
            })
            .collect();

        tracing::info!(
            title = %title,
            position,
            results = results.len(),
            "Content-based recommendation completed"
        );

        Ok(results)
    }
}
