//! Engine error types

use thiserror::Error;

use crate::types::Side;

/// Failures surfaced to callers of the engine.
///
/// Oracle failures are deliberately absent: the oracle adapter recovers
/// them locally by falling back to the search engine.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid FEN: {0}")]
    InvalidPosition(String),

    #[error("Requested side {requested} but {to_move} is to move")]
    SideMismatch { requested: Side, to_move: Side },

    #[error("No legal moves: the game is already over")]
    NoLegalMoves,
}
