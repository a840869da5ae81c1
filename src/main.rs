use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use cinerec_api::{
    config::Config,
    data,
    routes::create_router,
    services::TmdbPosterResolver,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Artifact load failures are fatal; nothing can be served without them.
    let catalog = data::load_catalog(&config)?;
    let cf_bundle = data::load_cf_bundle(&config)?;
    let posters = Arc::new(TmdbPosterResolver::new(&config));

    let state = AppState::new(catalog, cf_bundle, posters);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(%addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
