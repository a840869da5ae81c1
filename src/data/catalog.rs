use ndarray::{Array2, ArrayView1};

use crate::models::Movie;

/// The static movie catalog plus its precomputed content-similarity matrix
///
/// Both are produced by the offline pipeline and never mutated after load.
/// Row position is the shared index: catalog entry `i` owns similarity row `i`.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
    similarity: Array2<f32>,
}

impl Catalog {
    /// Builds a catalog, checking only that the similarity matrix is square
    /// and sized to the movie list. Cross-artifact consistency beyond shape is
    /// the offline pipeline's responsibility.
    pub fn new(movies: Vec<Movie>, similarity: Array2<f32>) -> anyhow::Result<Self> {
        let (rows, cols) = similarity.dim();
        if rows != cols {
            anyhow::bail!("similarity matrix is not square: {}x{}", rows, cols);
        }
        if rows != movies.len() {
            anyhow::bail!(
                "similarity matrix has {} rows for {} catalog entries",
                rows,
                movies.len()
            );
        }
        Ok(Self { movies, similarity })
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Row position of the first catalog entry with exactly this title.
    ///
    /// Titles are not guaranteed unique; duplicates resolve to the lowest row
    /// position.
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.movies.iter().position(|m| m.title == title)
    }

    pub fn movie_at(&self, position: usize) -> Option<&Movie> {
        self.movies.get(position)
    }

    /// Content-similarity scores of the movie at `position` against every
    /// catalog entry, self included.
    pub fn similarity_row(&self, position: usize) -> ArrayView1<'_, f32> {
        self.similarity.row(position)
    }
}
