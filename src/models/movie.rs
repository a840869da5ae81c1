use serde::{Deserialize, Serialize};

/// A catalog entry: one known movie
///
/// Row position in the catalog is implicit (the entry's index in the loaded
/// vector) and doubles as the row index into the similarity matrix and the
/// column index into the interaction matrix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    /// External metadata-provider (TMDB) identifier
    pub movie_id: u32,
    /// Display title; uniqueness is not guaranteed
    pub title: String,
}

impl Movie {
    pub fn new(movie_id: u32, title: impl Into<String>) -> Self {
        Self {
            movie_id,
            title: title.into(),
        }
    }
}

/// A ranked recommendation produced by either recommender
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredMovie {
    pub movie_id: u32,
    pub title: String,
    /// Content path: similarity score (higher = more similar).
    /// Collaborative path: cosine distance (lower = more similar).
    pub score: f32,
}

/// A recommendation enriched with its poster URL for display
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendedMovie {
    pub movie_id: u32,
    pub title: String,
    /// Empty when the poster could not be resolved
    pub poster_url: String,
}

/// Outcome of a collaborative-filtering query
///
/// The collaborative path never surfaces an error to the caller: a query with
/// no plausible fuzzy match and an internal failure both yield empty results,
/// the latter carrying a short diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub enum CfOutcome {
    Recommendations(Vec<ScoredMovie>),
    NoMatch,
    Failed(String),
}

impl CfOutcome {
    /// Results to display, empty for the two non-result outcomes
    pub fn results(&self) -> &[ScoredMovie] {
        match self {
            CfOutcome::Recommendations(movies) => movies,
            CfOutcome::NoMatch | CfOutcome::Failed(_) => &[],
        }
    }

    /// Diagnostic message, present only for internal failures
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            CfOutcome::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
