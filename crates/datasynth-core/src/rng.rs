//! Seeded random streams.
//!
//! Every generation run draws from its own [`StdRng`], derived from a master
//! seed and the run index. Runs stay reproducible whatever order, or thread,
//! they execute on.

use std::hash::{DefaultHasher, Hash, Hasher};

use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngFactory {
    master_seed: u64,
}

impl RngFactory {
    pub fn new(seed: u64) -> Self {
        Self { master_seed: seed }
    }

    /// Fresh master seed from the operating system
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    /// Independent stream for the given run index
    pub fn stream(&self, index: u64) -> StdRng {
        let mut hasher = DefaultHasher::new();
        self.master_seed.hash(&mut hasher);
        index.hash(&mut hasher);
        StdRng::seed_from_u64(hasher.finish())
    }

    pub fn seed(&self) -> u64 {
        self.master_seed
    }
}
