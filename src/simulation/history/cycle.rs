//! Cycle detection over a sliding window of generation hashes.
//!
//! Hashes are SipHash with fixed keys, so collisions are possible but
//! vanishingly rare at these grid sizes.

use std::collections::hash_map::DefaultHasher;
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

pub(crate) fn hash_cells(cells: &[u8]) -> u64 {
    let mut hasher = DefaultHasher::new();
    cells.hash(&mut hasher);
    hasher.finish()
}

pub(crate) struct CycleDetector {
    hashes: VecDeque<u64>,  // oldest first
    depth: usize,
}

impl CycleDetector {
    pub(crate) fn new(depth: usize) -> Self {
        let depth = depth.max(1);
        Self {
            hashes: VecDeque::with_capacity(depth),
            depth,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.hashes.clear();
    }

    /// Remember a generation without checking it.
    pub(crate) fn record(&mut self, hash: u64) {
        if self.hashes.len() == self.depth {
            self.hashes.pop_front();
        }
        self.hashes.push_back(hash);
    }

    /// Check a new generation against the window, then remember it.
    /// Returns how many generations back the most recent match is.
    pub(crate) fn observe(&mut self, hash: u64) -> Option<usize> {
        let period = self
            .hashes
            .iter()
            .rev()
            .position(|&h| h == hash)
            .map(|back| back + 1);
        self.record(hash);
        period
    }
}
