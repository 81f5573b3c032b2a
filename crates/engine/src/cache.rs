//! Bounded move cache.
//!
//! Memoizes chosen moves per (position, side, difficulty). Purely an
//! optimization: a miss never changes which move is legal, only how long
//! the answer takes. Eviction is oldest-inserted-first, not LRU.

use std::collections::{HashMap, VecDeque};

use crate::types::{Difficulty, Side};

/// Exact FEN string plus the requested side and difficulty.
pub type CacheKey = (String, Side, Difficulty);

pub const DEFAULT_CAPACITY: usize = 1000;

pub struct MoveCache {
    capacity: usize,
    entries: HashMap<CacheKey, String>,
    insertion_order: VecDeque<CacheKey>,
}

impl MoveCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            insertion_order: VecDeque::new(),
        }
    }

    pub fn get(&self, key: &CacheKey) -> Option<&String> {
        self.entries.get(key)
    }

    /// Insert a chosen move. Entries are immutable once written: a repeat
    /// insert for the same key is a no-op, so racing computations of the
    /// same key cannot disagree with the cache.
    pub fn put(&mut self, key: CacheKey, san: String) {
        if self.entries.contains_key(&key) {
            return;
        }
        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.insertion_order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        self.insertion_order.push_back(key.clone());
        self.entries.insert(key, san);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
