use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::{
    config::Config,
    error::{AppError, AppResult},
};

/// Poster lookup abstraction
///
/// The resolver never fails its caller: any non-success outcome (network
/// error, non-200 status, missing poster field) yields an empty URL, which
/// the display surface renders as a placeholder.
#[async_trait]
pub trait PosterResolver: Send + Sync {
    async fn resolve(&self, movie_id: u32) -> String;
}

/// TMDB movie-details poster resolver
#[derive(Clone)]
pub struct TmdbPosterResolver {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_base_url: String,
}

impl TmdbPosterResolver {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key: config.tmdb_api_key.clone(),
            api_url: config.tmdb_api_url.clone(),
            image_base_url: config.image_base_url.clone(),
        }
    }

    async fn try_resolve(&self, movie_id: u32) -> AppResult<String> {
        let url = format!("{}/3/movie/{}", self.api_url, movie_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[("language", "en-US")])
            .header("accept", "application/json")
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "TMDB returned status {} for movie {}",
                response.status(),
                movie_id
            )));
        }

        #[derive(Deserialize)]
        struct MovieDetails {
            poster_path: Option<String>,
        }

        let details: MovieDetails = response.json().await?;

        details
            .poster_path
            .map(|path| format!("{}{}", self.image_base_url, path))
            .ok_or_else(|| {
                AppError::ExternalApi(format!("movie {} has no poster_path", movie_id))
            })
    }
}

#[async_trait]
impl PosterResolver for TmdbPosterResolver {
    async fn resolve(&self, movie_id: u32) -> String {
        match self.try_resolve(movie_id).await {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(movie_id, error = %e, "Poster lookup failed");
                String::new()
            }
        }
    }
}
