use std::sync::Arc;

use gambit_engine::{Engine, EngineConfig};
use gambit_server::{config, routes};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env();

    let engine_config = EngineConfig::from_env();
    if engine_config.oracle.is_some() {
        tracing::info!("Oracle configured - hard difficulty consults it before searching");
    } else {
        tracing::info!("No oracle credential - using the search engine only");
    }

    let engine = Arc::new(Engine::new(engine_config));
    let app = routes::router(engine);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}
