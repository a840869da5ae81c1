use std::collections::HashMap;

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

/// On-disk form of the collaborative-filtering bundle
///
/// Mirrors what the offline pipeline exports: the raw user-movie interaction
/// matrix plus the two movie-index mappings. The fitted state (per-movie
/// vector norms) is derived at load, not shipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CfBundleArtifact {
    /// Interaction strengths, shape (users, movies); 0 = no interaction
    pub interactions: Array2<f32>,
    /// Interaction-matrix column position -> external movie identifier
    pub movie_ids: Vec<u32>,
    /// External movie identifier -> interaction-matrix column position
    pub movie_id_to_idx: HashMap<u32, usize>,
}

/// The loaded collaborative-filtering data
///
/// Each movie's interaction vector is a column of the matrix. Column L2 norms
/// are computed once here; the matrix is immutable after load, so this stands
/// in for refitting a neighbor index on every query.
#[derive(Debug, Clone)]
pub struct CfBundle {
    interactions: Array2<f32>,
    movie_ids: Vec<u32>,
    movie_id_to_idx: HashMap<u32, usize>,
    column_norms: Vec<f32>,
}

impl CfBundle {
    pub fn new(artifact: CfBundleArtifact) -> Self {
        let column_norms = artifact
            .interactions
            .columns()
            .into_iter()
            .map(|col| col.dot(&col).sqrt())
            .collect();
        Self {
            interactions: artifact.interactions,
            movie_ids: artifact.movie_ids,
            movie_id_to_idx: artifact.movie_id_to_idx,
            column_norms,
        }
    }

    /// Number of movies covered by the interaction matrix
    pub fn n_movies(&self) -> usize {
        self.interactions.ncols()
    }

    /// A movie's interaction vector (its column of user interactions)
    pub fn movie_vector(&self, position: usize) -> ArrayView1<'_, f32> {
        self.interactions.column(position)
    }

    /// Checks internal bundle consistency. Deferred to query time rather than
    /// load time so a corrupted bundle yields a diagnostic instead of aborting
    /// the query path.
    pub fn check_shape(&self) -> anyhow::Result<()> {
        if self.movie_ids.len() != self.n_movies() {
            anyhow::bail!(
                "interaction matrix has {} movie columns but {} movie ids",
                self.n_movies(),
                self.movie_ids.len()
            );
        }
        if self.movie_id_to_idx.len() != self.movie_ids.len() {
            anyhow::bail!(
                "movie id index has {} entries for {} movie ids",
                self.movie_id_to_idx.len(),
                self.movie_ids.len()
            );
        }
        Ok(())
    }

    /// Cosine distance between two movie columns; zero-norm vectors (movies
    /// nobody interacted with) are treated as maximally distant.
    pub fn cosine_distance(&self, a: usize, b: usize) -> f32 {
        let norm_a = self.column_norms[a];
        let norm_b = self.column_norms[b];
        if norm_a == 0.0 || norm_b == 0.0 {
            return 1.0;
        }
        let dot = self.movie_vector(a).dot(&self.movie_vector(b));
        1.0 - dot / (norm_a * norm_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    fn bundle(interactions: Array2<f32>, ids: Vec<u32>) -> CfBundle {
        let movie_id_to_idx = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();
        CfBundle::new(CfBundleArtifact {
            interactions,
            movie_ids: ids,
            movie_id_to_idx,
        })
    }

    #[test]
    fn test_cosine_distance_identical_columns() {
        let b = bundle(arr2(&[[1.0, 1.0], [2.0, 2.0]]), vec![10, 20]);
        assert!(b.cosine_distance(0, 1).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_distance_orthogonal_columns() {
        let b = bundle(arr2(&[[1.0, 0.0], [0.0, 1.0]]), vec![10, 20]);
        assert!((b.cosine_distance(0, 1) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_norm_column_is_maximally_distant() {
        let b = bundle(arr2(&[[1.0, 0.0], [1.0, 0.0]]), vec![10, 20]);
        assert_eq!(b.cosine_distance(0, 1), 1.0);
        assert_eq!(b.cosine_distance(1, 1), 1.0);
    }

    #[test]
    fn test_check_shape_detects_id_mismatch() {
        let b = bundle(arr2(&[[1.0, 0.0], [0.0, 1.0]]), vec![10]);
        let err = b.check_shape().unwrap_err().to_string();
        assert!(err.contains("movie columns"));
    }

    #[test]
    fn test_check_shape_ok() {
        let b = bundle(arr2(&[[1.0, 0.0], [0.0, 1.0]]), vec![10, 20]);
        assert!(b.check_shape().is_ok());
    }
}
