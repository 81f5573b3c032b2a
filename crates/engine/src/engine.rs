//! The composed move-selection engine.
//!
//! An `Engine` is an explicitly constructed session value owning its own
//! cache, opening book, RNG, and optional oracle client. Compose one per
//! server process or per logical game session; there is no global state.
//!
//! `choose_move` control flow: validate input, then cache, then opening
//! book, then (hard difficulty only) the oracle, then the search engine.
//! Whatever stage produced the answer, it is cached before returning.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::SeedableRng;
use shakmaty::{Chess, Move, Position};
use tracing::{debug, info};

use crate::book::OpeningBook;
use crate::cache::{CacheKey, MoveCache};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::oracle::OracleClient;
use crate::position;
use crate::search::{self, SearchParams};
use crate::types::{ChosenMove, Difficulty, LegalMove, Side};

pub struct Engine {
    config: EngineConfig,
    book: OpeningBook,
    cache: Mutex<MoveCache>,
    rng: Mutex<StdRng>,
    oracle: Option<OracleClient>,
    searches: AtomicU64,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let oracle = config.oracle.clone().map(OracleClient::new);
        Self {
            book: OpeningBook::new(),
            cache: Mutex::new(MoveCache::new(config.cache_capacity)),
            rng: Mutex::new(rng),
            oracle,
            searches: AtomicU64::new(0),
            config,
        }
    }

    /// How many times the search engine has run. Cache and book hits (and
    /// accepted oracle answers) skip the search entirely.
    pub fn search_count(&self) -> u64 {
        self.searches.load(Ordering::Relaxed)
    }

    /// Choose a move for `side` at `difficulty` in the position `fen`.
    ///
    /// Returns the chosen move in SAN plus the resulting position. Fails
    /// with `SideMismatch` if `side` is not the side to move, and with
    /// `NoLegalMoves` if the game is already over.
    pub async fn choose_move(
        &self,
        fen: &str,
        side: Side,
        difficulty: Difficulty,
    ) -> Result<ChosenMove, EngineError> {
        let pos = position::parse_fen(fen)?;

        if pos.turn() != side.color() {
            return Err(EngineError::SideMismatch {
                requested: side,
                to_move: Side::from_color(pos.turn()),
            });
        }

        let legal: Vec<Move> = pos.legal_moves().into_iter().collect();
        if legal.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        let key: CacheKey = (fen.to_string(), side, difficulty);
        let cached = self.lock_cache().get(&key).cloned();
        if let Some(san) = cached {
            if let Some(mv) = position::san_to_move(&pos, &san) {
                debug!(%san, "Move cache hit");
                return Ok(self.finish(&pos, &mv));
            }
        }

        if let Some(mv) = self.book_move(&pos) {
            let chosen = self.finish(&pos, &mv);
            debug!(san = %chosen.san, "Opening book hit");
            self.remember(key, &chosen.san);
            return Ok(chosen);
        }

        if difficulty == Difficulty::Hard {
            if let Some(oracle) = &self.oracle {
                let described: Vec<LegalMove> = legal
                    .iter()
                    .map(|mv| position::describe_move(&pos, mv))
                    .collect();
                if let Some(san) = oracle.request_move(fen, side, difficulty, &described).await {
                    if let Some(mv) = position::san_to_move(&pos, &san) {
                        let chosen = self.finish(&pos, &mv);
                        info!(san = %chosen.san, "Oracle move accepted");
                        self.remember(key, &chosen.san);
                        return Ok(chosen);
                    }
                }
                debug!("Oracle unavailable, falling back to search");
            }
        }

        self.searches.fetch_add(1, Ordering::Relaxed);
        let params = SearchParams {
            candidate_limit: self.config.candidate_limit,
            jitter: if self.config.randomize {
                difficulty.jitter()
            } else {
                0
            },
        };
        let mv = {
            let mut rng = self.lock_rng();
            search::select_move(&pos, side, difficulty, &params, &mut rng)?
        };
        let chosen = self.finish(&pos, &mv);
        self.remember(key, &chosen.san);
        Ok(chosen)
    }

    fn book_move(&self, pos: &Chess) -> Option<Move> {
        let mut rng = self.lock_rng();
        self.book.lookup(pos, &mut rng)
    }

    fn finish(&self, pos: &Chess, mv: &Move) -> ChosenMove {
        let described = position::describe_move(pos, mv);
        let next = position::apply(pos, mv);
        ChosenMove {
            san: described.san,
            resulting_fen: position::to_fen(&next),
        }
    }

    fn remember(&self, key: CacheKey, san: &str) {
        self.lock_cache().put(key, san.to_string());
    }

    // Cache entries are immutable once written, so a poisoned lock is
    // safe to recover.
    fn lock_cache(&self) -> std::sync::MutexGuard<'_, MoveCache> {
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_rng(&self) -> std::sync::MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(|e| e.into_inner())
    }
}
