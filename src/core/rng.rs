//! Deterministic random source for the automated opponent.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical probe sequences
//! - **Injectable**: The opponent consumes randomness only through the
//!   `ProbeSource` trait, so tests can script exact offsets
//! - **Forkable**: Independent branches for look-ahead or replay
//!
//! ```
//! use dots_engine::core::{GameRng, ProbeSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let offset = a.offset(3);
//! assert!((-3..=3).contains(&offset));
//! assert_eq!(offset, b.offset(3));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of random probe offsets.
///
/// The opponent draws a row offset and then a column offset per probe.
pub trait ProbeSource {
    /// Draw an offset uniformly from `-radius..=radius`.
    fn offset(&mut self, radius: i32) -> i32;
}

/// Deterministic ChaCha8-backed RNG.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent, deterministic branch.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Generate an integer in `low..=high`.
    pub fn gen_range_inclusive(&mut self, low: i32, high: i32) -> i32 {
        self.inner.gen_range(low..=high)
    }
}

impl ProbeSource for GameRng {
    fn offset(&mut self, radius: i32) -> i32 {
        let radius = radius.max(0);
        self.gen_range_inclusive(-radius, radius)
    }
}
