use gambit_engine::{Engine, EngineConfig};
use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{CastlingMode, Chess, Position};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Italian game after 3. Bc4, a quiet position outside the opening book.
pub const ITALIAN_FEN: &str =
    "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3";

/// Rook endgame: few pieces, cheap to search even at depth 4.
pub const ROOK_ENDGAME_FEN: &str = "8/8/8/4k3/8/8/4K3/7R w - - 0 1";

/// Engine with randomization off and a fixed seed; no oracle.
pub fn deterministic_engine() -> Engine {
    Engine::new(EngineConfig {
        randomize: false,
        rng_seed: Some(1),
        ..EngineConfig::default()
    })
}

/// Engine with randomization on but a fixed seed; no oracle.
pub fn seeded_engine(seed: u64) -> Engine {
    Engine::new(EngineConfig {
        rng_seed: Some(seed),
        ..EngineConfig::default()
    })
}

pub fn parse(fen: &str) -> Chess {
    fen.parse::<Fen>()
        .expect("valid FEN")
        .into_position(CastlingMode::Standard)
        .expect("playable position")
}

/// The legal SAN set for a position, as the rules engine enumerates it
/// (bare SAN, no check/mate suffixes).
pub fn legal_san(fen: &str) -> Vec<String> {
    let pos = parse(fen);
    pos.legal_moves()
        .iter()
        .map(|mv| San::from_move(&pos, mv).to_string())
        .collect()
}

/// Drop a trailing check/mate marker.
pub fn strip_suffix(san: &str) -> &str {
    san.trim_end_matches(['+', '#'])
}
