use gtl_core::QuestionId;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::BTreeMap;

use super::Mode;

/// How a store chooses which scenario of a pool to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Walk each pool in id order, one cursor per mode.
    #[default]
    RoundRobin,
    /// Seeded uniform choice; reproducible for a given seed and call sequence.
    Random { seed: u64 },
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::RoundRobin => write!(f, "round-robin"),
            Self::Random { seed } => write!(f, "random (seed {:#x})", seed),
        }
    }
}

/// Mutable selection state of a store. Lives behind the store's lock.
#[derive(Debug)]
pub(crate) enum Selector {
    RoundRobin(BTreeMap<Mode, usize>),
    Random(SmallRng),
}

impl From<Policy> for Selector {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::RoundRobin => Self::RoundRobin(BTreeMap::new()),
            Policy::Random { seed } => Self::Random(SmallRng::seed_from_u64(seed)),
        }
    }
}

impl Selector {
    /// Picks from a non-empty pool, advancing the mode's cursor.
    pub(crate) fn pick(&mut self, mode: Mode, pool: &[QuestionId]) -> QuestionId {
        match self {
            Self::RoundRobin(cursors) => {
                let cursor = cursors.entry(mode).or_default();
                let id = pool[*cursor % pool.len()];
                *cursor = (*cursor + 1) % pool.len();
                id
            }
            Self::Random(rng) => pool[rng.random_range(0..pool.len())],
        }
    }
    /// Picks a successor of `current` from non-empty, ascending candidates.
    pub(crate) fn next(&mut self, current: QuestionId, candidates: &[QuestionId]) -> QuestionId {
        match self {
            Self::RoundRobin(_) => candidates
                .iter()
                .copied()
                .find(|id| *id > current)
                .unwrap_or(candidates[0]),
            Self::Random(rng) => candidates[rng.random_range(0..candidates.len())],
        }
    }
}
