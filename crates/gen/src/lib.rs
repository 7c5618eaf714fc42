//! Deterministic pseudo-random value generation for seeddb
//!
//! `SeededValues` is the stock [`ValueSource`] implementation, backed by
//! `rand`'s `StdRng`. Built from a fixed seed it replays the same value
//! sequence on every run, so two stores seeded identically generate
//! identical records.

#![warn(clippy::all)]

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seeddb_core::ValueSource;

/// Seeded pseudo-random value source backed by `StdRng`
pub struct SeededValues {
    rng: StdRng,
}

impl SeededValues {
    /// Create a source that deterministically replays from `seed`
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl ValueSource for SeededValues {
    fn next_u64(&mut self) -> u64 {
        self.rng.gen()
    }

    fn next_i64(&mut self) -> i64 {
        self.rng.gen()
    }

    fn next_f64(&mut self) -> f64 {
        self.rng.gen()
    }

    fn next_bool(&mut self) -> bool {
        self.rng.gen()
    }

    fn next_string(&mut self, len: usize) -> String {
        (&mut self.rng)
            .sample_iter(Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }

    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Convenience helpers over any [`ValueSource`]
///
/// Blanket-implemented, so the helpers are available on `&mut dyn
/// ValueSource` inside `Storable::generate` without naming a concrete
/// source type.
pub trait ValueSourceExt: ValueSource {
    /// Uniformly pick one element of a non-empty slice
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_index(items.len())]
    }

    /// Integer drawn uniformly-ish from the inclusive range `min..=max`
    fn int_in_range(&mut self, min: i64, max: i64) -> i64 {
        debug_assert!(min <= max);
        let width = max.wrapping_sub(min) as u64;
        if width == u64::MAX {
            return self.next_i64();
        }
        min.wrapping_add((self.next_u64() % (width + 1)) as i64)
    }
}

impl<S: ValueSource + ?Sized> ValueSourceExt for S {}
