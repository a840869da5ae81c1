mod movie;

pub use movie::{CfOutcome, Movie, RecommendedMovie, ScoredMovie};
