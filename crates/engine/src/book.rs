//! Fixed opening book.
//!
//! A handful of known early positions mapped to acceptable replies, keyed
//! by normalized FEN (move counters stripped). Consulted only for the
//! first few moves; anything out of book falls through to search.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::Rng;
use shakmaty::{Chess, Move, Position};

use crate::position;

/// Past this full-move number the book is never consulted.
const BOOK_MOVE_LIMIT: u32 = 3;

pub struct OpeningBook {
    entries: HashMap<&'static str, &'static [&'static str]>,
}

impl OpeningBook {
    pub fn new() -> Self {
        let mut entries: HashMap<&'static str, &'static [&'static str]> = HashMap::new();

        // Starting position
        entries.insert(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
            &["e4", "d4", "Nf3", "c4", "g3"],
        );
        // 1. e4
        entries.insert(
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq -",
            &["e5", "c5", "e6"],
        );
        // 1. e4 e5
        entries.insert(
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq -",
            &["Nf3"],
        );
        // 1. e4 e5 2. Nf3
        entries.insert(
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq -",
            &["Nc6"],
        );
        // 1. d4
        entries.insert(
            "rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR b KQkq -",
            &["d5", "Nf6"],
        );
        // 1. d4 d5
        entries.insert(
            "rnbqkbnr/ppp1pppp/8/3p4/3P4/8/PPP1PPPP/RNBQKBNR w KQkq -",
            &["c4", "Nf3"],
        );

        Self { entries }
    }

    /// Book reply for `pos`, or None when the position is out of book.
    /// Replies are drawn uniformly at random among the listed moves.
    pub fn lookup(&self, pos: &Chess, rng: &mut StdRng) -> Option<Move> {
        if pos.fullmoves().get() > BOOK_MOVE_LIMIT {
            return None;
        }
        let key = position::normalize_fen(&position::to_fen(pos));
        let replies = self.entries.get(key.as_str())?;
        let pick = replies[rng.random_range(0..replies.len())];
        position::san_to_move(pos, pick)
    }
}

impl Default for OpeningBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{parse_fen, STARTING_FEN};
    use rand::SeedableRng;
    use shakmaty::san::San;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn test_starting_position_reply_is_listed() {
        let book = OpeningBook::new();
        let pos = parse_fen(STARTING_FEN).unwrap();
        let mv = book.lookup(&pos, &mut rng()).expect("start is in book");
        let san = San::from_move(&pos, &mv).to_string();
        assert!(["e4", "d4", "Nf3", "c4", "g3"].contains(&san.as_str()));
    }

    #[test]
    fn test_unknown_position_misses() {
        let book = OpeningBook::new();
        let pos = parse_fen("rnbqkbnr/1ppppppp/8/p7/8/4P3/PPPP1PPP/RNBQKBNR w KQkq - 0 2").unwrap();
        assert!(book.lookup(&pos, &mut rng()).is_none());
    }

    #[test]
    fn test_late_game_never_consults_book() {
        let book = OpeningBook::new();
        // Same squares as the starting position, but deep into a game.
        let pos =
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 20").unwrap();
        assert!(book.lookup(&pos, &mut rng()).is_none());
    }

    #[test]
    fn test_book_replies_are_legal() {
        let book = OpeningBook::new();
        for (fen, replies) in &book.entries {
            // Book keys are normalized; restore dummy counters to parse.
            let pos = parse_fen(&format!("{fen} 0 1")).unwrap();
            for reply in *replies {
                assert!(
                    position::san_to_move(&pos, reply).is_some(),
                    "illegal book reply {reply} in {fen}"
                );
            }
        }
    }
}
