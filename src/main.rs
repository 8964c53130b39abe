//! Theme Recommender Service — Binary Entrypoint
//! Boots the Axum HTTP server, wiring config, shared catalog state, and routes.

use country_theme_recommender::api::{self, AppState};
use country_theme_recommender::catalog::Catalog;
use country_theme_recommender::config::RecommenderConfig;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("recommend=info,engine=info,catalog=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = RecommenderConfig::load();
    let catalog = Catalog::load_from_file(&config.catalog_path);
    info!(
        target: "catalog",
        path = %config.catalog_path,
        songs = catalog.len(),
        top_n = config.top_n,
        "catalog loaded"
    );

    let state = AppState::new(catalog, config.catalog_path.clone(), config.top_n);
    let router = api::create_router(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, router).await?;
    Ok(())
}
