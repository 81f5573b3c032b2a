//! Static position evaluation.
//!
//! Material plus mobility, computed white-positive and negated at the end
//! for a black perspective, so the returned score is always "positive is
//! good for the perspective side". Called at every search leaf and cutoff,
//! so it must stay a pure function of the position.

use shakmaty::{Chess, Color, Position, Role};

use crate::position;
use crate::types::Side;

/// Score magnitude reserved for checkmate.
pub const MATE_SCORE: i32 = 20_000;

/// Points per currently-available legal move for the side to move.
const MOBILITY_WEIGHT: i32 = 5;

/// Centipawn piece values.
pub fn piece_value(role: Role) -> i32 {
    match role {
        Role::Pawn => 100,
        Role::Knight => 320,
        Role::Bishop => 330,
        Role::Rook => 500,
        Role::Queen => 900,
        Role::King => 20_000,
    }
}

/// Evaluate `pos` from `perspective`'s point of view.
pub fn evaluate(pos: &Chess, perspective: Side) -> i32 {
    if pos.is_checkmate() {
        // The side to move is the side that has just been mated.
        return if pos.turn() == perspective.color() {
            -MATE_SCORE
        } else {
            MATE_SCORE
        };
    }
    if position::is_draw(pos) {
        return 0;
    }

    let board = pos.board();
    let mut score = 0i32;
    for sq in board.occupied() {
        if let Some(piece) = board.piece_at(sq) {
            let value = piece_value(piece.role);
            score += if piece.color == Color::White {
                value
            } else {
                -value
            };
        }
    }

    let mobility = pos.legal_moves().len() as i32 * MOBILITY_WEIGHT;
    score += if pos.turn() == Color::White {
        mobility
    } else {
        -mobility
    };

    match perspective {
        Side::White => score,
        Side::Black => -score,
    }
}
