//! Bounded-depth minimax search with alpha-beta pruning.
//!
//! The recursion is a plain synchronous depth-first walk; depth is bounded
//! by difficulty (at most 4 plies), so stack growth is bounded too. Child
//! positions are fresh values, never a shared board being mutated and
//! undone.

use rand::rngs::StdRng;
use rand::Rng;
use shakmaty::{Chess, Move, Position};
use tracing::debug;

use crate::error::EngineError;
use crate::eval;
use crate::ordering;
use crate::position;
use crate::types::{Difficulty, Side};

/// Bound beyond any reachable evaluation.
const INF: i32 = 1_000_000;

/// Top-level selection policy knobs.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Upper bound on non-tactical root candidates; tactical moves
    /// (captures and checks) are always searched.
    pub candidate_limit: usize,
    /// Half-width of the uniform score perturbation at the root; 0 makes
    /// selection deterministic.
    pub jitter: i32,
}

/// Minimax over the game tree rooted at `pos`.
///
/// Scores are always from `perspective`'s point of view; `maximizing`
/// says whose turn the current node is in that frame.
pub fn minimax(
    pos: &Chess,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    perspective: Side,
) -> i32 {
    if depth == 0 || position::is_terminal(pos) {
        return eval::evaluate(pos, perspective);
    }

    let mut moves: Vec<Move> = pos.legal_moves().into_iter().collect();
    ordering::order_moves(pos, &mut moves);

    if maximizing {
        let mut best = -INF;
        for mv in &moves {
            let value = minimax(
                &position::apply(pos, mv),
                depth - 1,
                alpha,
                beta,
                false,
                perspective,
            );
            best = best.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = INF;
        for mv in &moves {
            let value = minimax(
                &position::apply(pos, mv),
                depth - 1,
                alpha,
                beta,
                true,
                perspective,
            );
            best = best.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Pick the best move for `side` in `pos` at the depth `difficulty` maps to.
pub fn select_move(
    pos: &Chess,
    side: Side,
    difficulty: Difficulty,
    params: &SearchParams,
    rng: &mut StdRng,
) -> Result<Move, EngineError> {
    let legal: Vec<Move> = pos.legal_moves().into_iter().collect();
    if legal.is_empty() {
        return Err(EngineError::NoLegalMoves);
    }

    // An immediate mate needs no search.
    if let Some(mate) = legal
        .iter()
        .find(|mv| position::apply(pos, mv).is_checkmate())
    {
        return Ok(mate.clone());
    }

    let mut ordered = legal;
    ordering::order_moves(pos, &mut ordered);
    let candidates = candidate_pool(pos, &ordered, params.candidate_limit);

    let depth = difficulty.search_depth();
    let mut best = candidates[0].clone();
    let mut best_value = -INF;
    for mv in &candidates {
        let value = minimax(&position::apply(pos, mv), depth - 1, -INF, INF, false, side);
        let perturbed = if params.jitter > 0 {
            value + rng.random_range(-params.jitter..=params.jitter)
        } else {
            value
        };
        if perturbed > best_value {
            best_value = perturbed;
            best = mv.clone();
        }
    }

    debug!(
        candidates = candidates.len(),
        depth,
        value = best_value,
        "Search complete"
    );
    Ok(best)
}

/// Restrict the root to tactical moves plus the first `limit` of the
/// ordered list. Small move lists are searched in full; the restriction
/// bounds latency, it is not a pruning claim.
fn candidate_pool(pos: &Chess, ordered: &[Move], limit: usize) -> Vec<Move> {
    if ordered.len() <= limit {
        return ordered.to_vec();
    }
    ordered
        .iter()
        .enumerate()
        .filter(|(i, mv)| *i < limit || ordering::is_tactical(pos, mv))
        .map(|(_, mv)| mv.clone())
        .collect()
}
