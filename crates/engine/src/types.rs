//! Shared value types crossing the engine boundary.

use std::fmt;

use serde::{Deserialize, Serialize};
use shakmaty::{Color, Role, Square};

/// Which side a move is requested for. Must match the side to move
/// encoded in the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn color(self) -> Color {
        match self {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }

    pub fn from_color(color: Color) -> Self {
        match color {
            Color::White => Side::White,
            Color::Black => Side::Black,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::White => "white",
            Side::Black => "black",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty level controlling search depth and tie-break randomization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth in plies.
    pub fn search_depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    /// Half-width of the uniform score perturbation applied at the root.
    /// Weaker levels get noisier move selection.
    pub fn jitter(self) -> i32 {
        match self {
            Difficulty::Easy => 50,
            Difficulty::Medium => 25,
            Difficulty::Hard => 10,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A legal move described in every notation the engine needs: typed
/// squares for heuristics, SAN for callers, UCI for oracle validation.
#[derive(Debug, Clone)]
pub struct LegalMove {
    pub from: Option<Square>,
    pub to: Square,
    /// SAN including a `+`/`#` suffix where applicable.
    pub san: String,
    /// Long-algebraic form, e.g. `e2e4` or `e7e8q`.
    pub uci: String,
    pub promotion: Option<Role>,
    pub captured: Option<Role>,
    pub gives_check: bool,
}

/// The engine's answer: the chosen move and the position after playing it.
#[derive(Debug, Clone, Serialize)]
pub struct ChosenMove {
    pub san: String,
    pub resulting_fen: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_serde_forms() {
        assert_eq!(serde_json::to_string(&Side::White).unwrap(), "\"white\"");
        let side: Side = serde_json::from_str("\"black\"").unwrap();
        assert_eq!(side, Side::Black);
    }

    #[test]
    fn test_difficulty_depth_mapping() {
        assert_eq!(Difficulty::Easy.search_depth(), 2);
        assert_eq!(Difficulty::Medium.search_depth(), 3);
        assert_eq!(Difficulty::Hard.search_depth(), 4);
    }

    #[test]
    fn test_jitter_shrinks_with_difficulty() {
        assert!(Difficulty::Hard.jitter() < Difficulty::Medium.jitter());
        assert!(Difficulty::Medium.jitter() < Difficulty::Easy.jitter());
    }
}
