//! Engine configuration.

use std::env;

use crate::cache;
use crate::oracle::OracleConfig;

#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Upper bound on non-tactical root candidates searched per move
    /// request. Sensible values sit in the 8-12 band.
    pub candidate_limit: usize,

    /// Move cache capacity in entries.
    pub cache_capacity: usize,

    /// Tie-break randomization at the root. Disable for reproducible play.
    pub randomize: bool,

    /// Fixed RNG seed; None seeds from the OS.
    pub rng_seed: Option<u64>,

    /// External move oracle; None disables the adapter.
    pub oracle: Option<OracleConfig>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            candidate_limit: 10,
            cache_capacity: cache::DEFAULT_CAPACITY,
            randomize: true,
            rng_seed: None,
            oracle: None,
        }
    }
}

impl EngineConfig {
    /// Load engine knobs from environment variables, falling back to the
    /// defaults above. The oracle is configured only when a credential is
    /// present.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            candidate_limit: env::var("CANDIDATE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.candidate_limit),
            cache_capacity: env::var("MOVE_CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_capacity),
            randomize: env::var("DISABLE_MOVE_RANDOMIZATION").is_err(),
            rng_seed: env::var("ENGINE_RNG_SEED").ok().and_then(|v| v.parse().ok()),
            oracle: OracleConfig::from_env(),
        }
    }
}
