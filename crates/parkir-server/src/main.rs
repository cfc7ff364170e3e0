mod routes;

use anyhow::Context;
use parkir_nav::Config;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::var("PARKIR_CONFIG").ok();
    let config = match config_path.as_deref() {
        Some(path) => Config::load_required(path)
            .with_context(|| format!("PARKIR_CONFIG points at an unusable file: {}", path))?,
        None => Config::load_default()?,
    };
    let config_path = config_path.unwrap_or_else(|| "parkir.toml".to_string());

    // A cyclic or otherwise broken table stops the service here, never per request
    let route_map = config
        .navigation
        .route_map()
        .with_context(|| format!("Invalid navigation routes in {}", config_path))?;

    info!(
        "{} v{}: loaded {} navigation routes",
        config.project.name,
        config.project.version,
        route_map.len()
    );

    let state = AppState {
        routes: Arc::new(route_map),
        normalize_paths: config.navigation.normalize_paths,
    };

    let app = routes::router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
