//! Deterministic linear congruential generator for puzzle parameters.
//!
//! Implements the classic `state = (state * 9301 + 49297) mod 233280`
//! recurrence. The step is evaluated in IEEE-754 double precision so that
//! large seeds (millisecond timestamps) round the same way the browser build
//! rounded them: a seed shared as a link must reproduce the same puzzles
//! everywhere.

use serde::{Deserialize, Serialize};

const MULTIPLIER: f64 = 9301.0;
const INCREMENT: f64 = 49297.0;
const MODULUS: f64 = 233_280.0;

/// Seeded LCG. Same seed always produces the same sequence.
///
/// The whole state is one integer; [`SeededRandom::reseed`] overwrites it and
/// discards the previous stream position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededRandom {
    state: i64,
}

impl SeededRandom {
    /// Creates a new generator with the given seed.
    pub fn new(seed: i64) -> Self {
        Self { state: seed }
    }

    /// Resets the state to `seed`.
    pub fn reseed(&mut self, seed: i64) {
        self.state = seed;
    }

    /// Current raw state.
    pub fn state(&self) -> i64 {
        self.state
    }

    /// Advances the state and returns it as a fraction in [0, 1).
    ///
    /// Negative seeds are reduced with a Euclidean remainder so the state
    /// always lands in `[0, 233280)`.
    pub fn next_fraction(&mut self) -> f64 {
        let next = (self.state as f64 * MULTIPLIER + INCREMENT).rem_euclid(MODULUS);
        self.state = next as i64;
        next / MODULUS
    }

    /// Returns an integer in `[min, max]` (both inclusive).
    pub fn next_in_range(&mut self, min: i64, max: i64) -> i64 {
        self.next_stepped(min, max, 1)
    }

    /// Returns `min + k * step` for a uniformly drawn `k` such that the
    /// result does not exceed `max`.
    ///
    /// When fewer than one step fits between `min` and `max` this returns
    /// `min` without advancing the state. A `step` of 0 is treated as 1.
    pub fn next_stepped(&mut self, min: i64, max: i64, step: i64) -> i64 {
        let step = if step == 0 { 1 } else { step };
        let delta = (max - min) as f64 / step as f64;
        if delta < 1.0 {
            return min;
        }
        let count = (self.next_fraction() * (delta + 1.0)) as i64;
        min + count * step
    }

    /// Fair coin: `next_in_range(0, 1) == 1`.
    pub fn next_bool(&mut self) -> bool {
        self.next_in_range(0, 1) == 1
    }

    /// Returns an index in `[0, len)`.
    ///
    /// For `len <= 1` this is 0 and consumes nothing.
    pub fn next_index(&mut self, len: usize) -> usize {
        let last = i64::try_from(len).unwrap_or(i64::MAX) - 1;
        // Never negative: a span below one step returns min (0) untouched.
        self.next_in_range(0, last) as usize
    }

    /// Picks one element of `items`, or `None` if the slice is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let index = self.next_index(items.len());
        items.get(index)
    }
}
