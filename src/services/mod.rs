pub mod collaborative;
pub mod content;
pub mod posters;

pub use collaborative::CollaborativeRecommender;
pub use content::ContentRecommender;
pub use posters::{PosterResolver, TmdbPosterResolver};
