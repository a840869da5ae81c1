use std::sync::Arc;

use crate::{
    data::{Catalog, CfBundle},
    services::{CollaborativeRecommender, ContentRecommender, PosterResolver},
};

/// Shared application state
///
/// Everything here is read-only after startup, so handlers share it through
/// plain `Arc`s with no locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub content: ContentRecommender,
    pub collaborative: CollaborativeRecommender,
    pub posters: Arc<dyn PosterResolver>,
}

impl AppState {
    pub fn new(catalog: Catalog, cf_bundle: CfBundle, posters: Arc<dyn PosterResolver>) -> Self {
        let catalog = Arc::new(catalog);
        let cf_bundle = Arc::new(cf_bundle);
        Self {
            content: ContentRecommender::new(Arc::clone(&catalog)),
            collaborative: CollaborativeRecommender::new(Arc::clone(&catalog), cf_bundle),
            catalog,
            posters,
        }
    }
}
