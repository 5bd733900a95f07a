//! Identifier generation
//!
//! Account ids and account numbers are drawn from an injected `IdGenerator`
//! rather than from ambient global random state, so callers can substitute a
//! deterministic source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smallest 16-digit identifier (10^15)
pub const ID_MIN: u64 = 1_000_000_000_000_000;

/// Largest 16-digit identifier (10^16 - 1)
pub const ID_MAX: u64 = 9_999_999_999_999_999;

/// Source of fixed-width numeric identifier strings.
pub trait IdGenerator {
    /// Draw the next identifier: 16 decimal digits in [10^15, 10^16 - 1].
    fn next_id(&mut self) -> String;
}

/// Uniformly random identifiers backed by `StdRng`.
pub struct RandomIdGenerator {
    rng: StdRng,
}

impl RandomIdGenerator {
    /// Entropy-seeded generator.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded generator, for reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> String {
        self.rng.gen_range(ID_MIN..=ID_MAX).to_string()
    }
}

/// Monotonic identifiers from a fixed origin. Deterministic, for tests.
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self { next: ID_MIN }
    }

    /// Start the sequence at a specific value, clamped into the id space.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: first.clamp(ID_MIN, ID_MAX),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = self.next;
        // Wraps at the top of the id space instead of widening past 16 digits.
        self.next = if self.next >= ID_MAX { ID_MIN } else { self.next + 1 };
        id.to_string()
    }
}
