//! Move-selection engine: bounded-depth minimax with alpha-beta pruning,
//! a small opening book, a bounded move cache, and an optional external
//! move-suggestion oracle with local fallback.
//!
//! Chess rules (legality, move application, terminal states, FEN/SAN) are
//! delegated to shakmaty; this crate only decides which legal move to play.

pub mod book;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod oracle;
pub mod ordering;
pub mod position;
pub mod search;
pub mod types;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::EngineError;
pub use types::{ChosenMove, Difficulty, Side};
