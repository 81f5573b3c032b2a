//! HTTP API integration tests using the Router::oneshot pattern.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use gambit_engine::{Engine, EngineConfig};
use gambit_server::routes;
use serde_json::{json, Value};
use tower::ServiceExt;

const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Router over a deterministic engine with no oracle.
fn test_router() -> Router {
    let engine = Arc::new(Engine::new(EngineConfig {
        randomize: false,
        rng_seed: Some(42),
        ..EngineConfig::default()
    }));
    routes::router(engine)
}

async fn post_move(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chess/move")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn test_health_check() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_move_endpoint_returns_move_and_new_position() {
    let (status, body) = post_move(
        test_router(),
        json!({ "fen": STARTING_FEN, "side": "white", "difficulty": "easy" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["move"].is_string());
    assert_eq!(body["fen"], body["newFen"]);
    // After white's move it is black's turn.
    assert!(body["fen"].as_str().unwrap().contains(" b "));
}

#[tokio::test]
async fn test_side_mismatch_is_bad_request() {
    let (status, body) = post_move(
        test_router(),
        json!({ "fen": STARTING_FEN, "side": "black" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("black"));
}

#[tokio::test]
async fn test_invalid_fen_is_bad_request() {
    let (status, body) = post_move(
        test_router(),
        json!({ "fen": "definitely not chess", "side": "white" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("Invalid FEN"));
}

#[tokio::test]
async fn test_finished_game_is_conflict() {
    // Black is stalemated; no move can be chosen.
    let (status, _body) = post_move(
        test_router(),
        json!({ "fen": "7k/8/6Q1/8/8/8/8/K7 b - - 0 1", "side": "black", "difficulty": "easy" }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
}
