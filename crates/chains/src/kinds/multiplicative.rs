//! Chains built by multiplying the previous value.

use super::draw_pair;
use chainmat_core::recurrence::{mul, times_label};
use chainmat_core::{Recurrence, SeededRandom, StepFault};

/// Multiplies by a small factor; with alternation every even step uses
/// the negated factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Multiply {
    start: i64,
    factor: i64,
    alternate: bool,
}

impl Multiply {
    pub fn new(start: i64, factor: i64, alternate: bool) -> Self {
        Self {
            start,
            factor,
            alternate,
        }
    }

    /// Draws factor in [2, 3], start in [1, 5] and the alternation flag.
    pub fn draw(rng: &mut SeededRandom) -> Self {
        let factor = rng.next_in_range(2, 3);
        let start = rng.next_in_range(1, 5);
        let alternate = rng.next_bool();
        Self::new(start, factor, alternate)
    }

    fn factor_at(&self, index: usize) -> i64 {
        if self.alternate && index % 2 == 0 {
            -self.factor
        } else {
            self.factor
        }
    }
}

impl Recurrence for Multiply {
    fn name(&self) -> &'static str {
        "multiply"
    }

    fn identity(&self) -> String {
        format!(
            "multiply,{},{},{}",
            self.start, self.factor, self.alternate
        )
    }

    fn initial_values(&self) -> Vec<i64> {
        vec![self.start]
    }

    fn next_value(&self, index: usize, values: &[i64]) -> Result<i64, StepFault> {
        mul(values[index - 1], self.factor_at(index))
    }

    fn operation(&self, index: usize, _values: &[i64]) -> String {
        times_label(self.factor_at(index + 1))
    }

    fn hint(&self) -> String {
        let mut hint = format!("The previous number is multiplied by {}.", self.factor);
        if self.alternate {
            hint.push_str(" The sign alternates.");
        }
        hint
    }
}

/// Multiplies by two nonzero factors in turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MulPair {
    start: i64,
    factors: [i64; 2],
}

impl MulPair {
    pub fn new(start: i64, factors: [i64; 2]) -> Self {
        Self { start, factors }
    }

    /// Draws the start in [1, 3], then thins -5..=4 (without 0) down to two
    /// factors.
    pub fn draw(rng: &mut SeededRandom) -> Self {
        let start = rng.next_in_range(1, 3);
        let factors = draw_pair(rng, (-5..5).filter(|f| *f != 0).collect());
        Self::new(start, factors)
    }
}

impl Recurrence for MulPair {
    fn name(&self) -> &'static str {
        "mulpair"
    }

    fn identity(&self) -> String {
        format!(
            "mulpair,[{},{}],{}",
            self.factors[0], self.factors[1], self.start
        )
    }

    fn initial_values(&self) -> Vec<i64> {
        vec![self.start]
    }

    fn next_value(&self, index: usize, values: &[i64]) -> Result<i64, StepFault> {
        mul(values[index - 1], self.factors[(index - 1) % 2])
    }

    fn operation(&self, index: usize, _values: &[i64]) -> String {
        times_label(self.factors[index % 2])
    }

    fn hint(&self) -> String {
        format!(
            "The previous number is multiplied by {}, {} in turn.",
            self.factors[0], self.factors[1]
        )
    }
}
