use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API bearer token; may be unset, in which case poster lookups
    /// degrade to empty URLs rather than failing requests
    #[serde(default)]
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Base URL prefixed onto TMDB poster paths
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Path to the catalog artifact (ordered movie list)
    #[serde(default = "default_movies_path")]
    pub movies_path: String,

    /// Path to the precomputed content-similarity matrix artifact
    #[serde(default = "default_similarity_path")]
    pub similarity_path: String,

    /// Path to the collaborative-filtering bundle artifact
    #[serde(default = "default_cf_bundle_path")]
    pub cf_bundle_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_movies_path() -> String {
    "models/movies.bin".to_string()
}

fn default_similarity_path() -> String {
    "models/similarity.bin".to_string()
}

fn default_cf_bundle_path() -> String {
    "models/cf_bundle.bin".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
