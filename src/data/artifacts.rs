//! Static artifact loading
//!
//! The three recommendation artifacts are exported by the offline pipeline as
//! either JSON or bincode blobs, chosen by file extension. Loading happens
//! once at startup and any failure is fatal; nothing here is re-read or
//! refreshed at runtime.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use ndarray::Array2;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::data::{Catalog, CfBundle, CfBundleArtifact};
use crate::models::Movie;

/// Deserializes one artifact, dispatching on extension (`.json`, `.bin`)
pub fn load_artifact<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open artifact {}", path.display()))?;
    let reader = BufReader::new(file);

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match extension {
        "json" => serde_json::from_reader(reader)
            .with_context(|| format!("failed to parse JSON artifact {}", path.display())),
        "bin" | "bincode" => bincode::deserialize_from(reader)
            .with_context(|| format!("failed to parse bincode artifact {}", path.display())),
        other => anyhow::bail!(
            "unsupported artifact format '{}' for {}",
            other,
            path.display()
        ),
    }
}

/// Loads the catalog and similarity matrix artifacts
pub fn load_catalog(config: &Config) -> anyhow::Result<Catalog> {
    let movies: Vec<Movie> = load_artifact(&config.movies_path)?;
    let similarity: Array2<f32> = load_artifact(&config.similarity_path)?;

    tracing::info!(
        movies = movies.len(),
        similarity_shape = ?similarity.dim(),
        "Loaded catalog artifacts"
    );

    Catalog::new(movies, similarity)
}

/// Loads the collaborative-filtering bundle artifact
pub fn load_cf_bundle(config: &Config) -> anyhow::Result<CfBundle> {
    let artifact: CfBundleArtifact = load_artifact(&config.cf_bundle_path)?;

    tracing::info!(
        interactions_shape = ?artifact.interactions.dim(),
        movie_ids = artifact.movie_ids.len(),
        "Loaded collaborative-filtering bundle"
    );

    Ok(CfBundle::new(artifact))
}
