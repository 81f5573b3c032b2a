pub mod chess;
pub mod health;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use gambit_engine::Engine;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router around a shared engine instance.
pub fn router(engine: Arc<Engine>) -> Router {
    // Browser clients call this from arbitrary origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/chess/move", post(chess::make_move))
        .layer(Extension(engine))
        .layer(cors)
}
