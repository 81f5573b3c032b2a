use std::sync::Arc;

use axum::{Extension, Json};
use gambit_engine::{Difficulty, Engine, Side};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Deserialize)]
pub struct MoveRequest {
    pub fen: String,
    pub side: Side,
    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,
}

fn default_difficulty() -> Difficulty {
    Difficulty::Hard
}

#[derive(Serialize)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub mv: String,
    pub fen: String,
    /// Same value as `fen`; older clients read this name.
    #[serde(rename = "newFen")]
    pub new_fen: String,
    pub success: bool,
}

/// POST /api/chess/move
/// Choose a move for the requested side and return the resulting position.
pub async fn make_move(
    Extension(engine): Extension<Arc<Engine>>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, AppError> {
    tracing::info!(side = %req.side, difficulty = %req.difficulty, "Move request");

    let chosen = engine.choose_move(&req.fen, req.side, req.difficulty).await?;

    Ok(Json(MoveResponse {
        mv: chosen.san,
        fen: chosen.resulting_fen.clone(),
        new_fen: chosen.resulting_fen,
        success: true,
    }))
}
