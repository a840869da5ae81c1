use std::sync::Arc;

use strsim::normalized_levenshtein;

use crate::{
    data::{Catalog, CfBundle},
    models::{CfOutcome, ScoredMovie},
};

/// Minimum normalized edit-distance similarity for a catalog title to count
/// as a plausible match for the query
const MIN_MATCH_SCORE: f64 = 0.5;

/// Collaborative-filtering recommender
///
/// Matches the query against catalog titles by normalized edit distance
/// (tolerant of misspellings), then runs a brute-force
/// cosine nearest-neighbor search over interaction-matrix columns. Everything
/// past the fuzzy match is fallible and caught at this boundary: callers get
/// empty results plus a diagnostic, never an error.
#[derive(Clone)]
pub struct CollaborativeRecommender {
    catalog: Arc<Catalog>,
    bundle: Arc<CfBundle>,
}

impl CollaborativeRecommender {
    pub fn new(catalog: Arc<Catalog>, bundle: Arc<CfBundle>) -> Self {
        Self { catalog, bundle }
    }

    pub fn recommend(&self, query: &str, n: usize) -> CfOutcome {
        let Some(matched) = self.best_title_match(query) else {
            tracing::info!(query = %query, "No plausible fuzzy match in catalog");
            return CfOutcome::NoMatch;
        };

        match self.nearest_neighbors(matched, n) {
            Ok(results) => {
                tracing::info!(
                    query = %query,
                    matched_position = matched,
                    results = results.len(),
                    "Collaborative recommendation completed"
                );
                CfOutcome::Recommendations(results)
            }
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "Collaborative filtering failed");
                CfOutcome::Failed(format!("collaborative filtering error: {}", e))
            }
        }
    }

    /// Best edit-distance match over all catalog titles, case-insensitive;
    /// ties keep the lowest row position. `None` when no title clears
    /// `MIN_MATCH_SCORE`.
    fn best_title_match(&self, query: &str) -> Option<usize> {
        let query_lower = query.to_lowercase();

        let mut best: Option<(f64, usize)> = None;
        for (position, movie) in self.catalog.movies().iter().enumerate() {
            let score = normalized_levenshtein(&query_lower, &movie.title.to_lowercase());
            match best {
                Some((best_score, _)) if best_score >= score => {}
                _ => best = Some((score, position)),
            }
        }
        best.filter(|&(score, _)| score >= MIN_MATCH_SCORE)
            .map(|(_, position)| position)
    }

    /// Top-`n` nearest interaction columns to `matched`, excluding itself.
    ///
    /// Sorted by ascending cosine distance, ties by ascending column. Each
    /// neighbor is resolved back to a catalog entry by exact title match;
    /// unresolvable neighbors are skipped, so fewer than `n` may come back.
    fn nearest_neighbors(&self, matched: usize, n: usize) -> anyhow::Result<Vec<ScoredMovie>> {
        self.bundle.check_shape()?;
        if self.bundle.n_movies() != self.catalog.len() {
            anyhow::bail!(
                "interaction matrix covers {} movies but the catalog has {}",
                self.bundle.n_movies(),
                self.catalog.len()
            );
        }

        let mut neighbors: Vec<(usize, f32)> = (0..self.bundle.n_movies())
            .filter(|&column| column != matched)
            .map(|column| (column, self.bundle.cosine_distance(matched, column)))
            .collect();
        neighbors.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        neighbors.truncate(n);

        let mut results = Vec::with_capacity(neighbors.len());
        for (column, distance) in neighbors {
            let Some(neighbor) = self.catalog.movie_at(column) else {
                continue;
            };
            // Duplicate titles resolve to the first catalog occurrence, as in
            // the exact-title lookup.
            let Some(entry) = self
                .catalog
                .position_of(&neighbor.title)
                .and_then(|p| self.catalog.movie_at(p))
            else {
                continue;
            };
            results.push(ScoredMovie {
                movie_id: entry.movie_id,
                title: neighbor.title.clone(),
                score: distance,
            });
        }

        Ok(results)
    }
}
