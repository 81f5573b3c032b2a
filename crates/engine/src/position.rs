//! FEN boundary helpers around the shakmaty rules engine.
//!
//! Every simulated move produces a new position value; the engine never
//! mutates a position it was given.

use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{CastlingMode, Chess, EnPassantMode, Move, Position};

use crate::error::EngineError;
use crate::types::LegalMove;

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parse a caller-supplied FEN into a playable position.
pub fn parse_fen(fen: &str) -> Result<Chess, EngineError> {
    let parsed: Fen = fen
        .parse()
        .map_err(|_| EngineError::InvalidPosition(fen.to_string()))?;
    parsed
        .into_position::<Chess>(CastlingMode::Standard)
        .map_err(|_| EngineError::InvalidPosition(fen.to_string()))
}

pub fn to_fen(pos: &Chess) -> String {
    Fen::from_position(pos.clone(), EnPassantMode::Legal).to_string()
}

/// Strips move counters from FEN, keeping only position + side + castling + ep.
pub fn normalize_fen(fen: &str) -> String {
    fen.split_whitespace().take(4).collect::<Vec<_>>().join(" ")
}

/// Apply a legal move, producing the successor position.
pub fn apply(pos: &Chess, mv: &Move) -> Chess {
    let mut next = pos.clone();
    next.play_unchecked(mv);
    next
}

/// Game over by rule: checkmate, stalemate, dead position, or the
/// half-move clock reaching fifty full moves.
pub fn is_terminal(pos: &Chess) -> bool {
    pos.is_game_over() || pos.halfmoves() >= 100
}

/// Drawn (not won) terminal state.
pub fn is_draw(pos: &Chess) -> bool {
    pos.is_stalemate() || pos.is_insufficient_material() || pos.halfmoves() >= 100
}

/// Parse a SAN token into a legal move at `pos`. Check/mate suffixes are
/// tolerated. None if the token does not name a legal move.
pub fn san_to_move(pos: &Chess, san: &str) -> Option<Move> {
    let bare = san.trim().trim_end_matches(['+', '#']);
    let parsed: San = bare.parse().ok()?;
    parsed.to_move(pos).ok()
}

/// Build the typed description of a legal move at `pos`.
pub fn describe_move(pos: &Chess, mv: &Move) -> LegalMove {
    let bare = San::from_move(pos, mv).to_string();
    let after = apply(pos, mv);
    let suffix = if after.is_checkmate() {
        "#"
    } else if after.is_check() {
        "+"
    } else {
        ""
    };
    LegalMove {
        from: mv.from(),
        to: mv.to(),
        san: format!("{bare}{suffix}"),
        uci: mv.to_uci(CastlingMode::Standard).to_string(),
        promotion: mv.promotion(),
        captured: mv.capture(),
        gives_check: !suffix.is_empty(),
    }
}
