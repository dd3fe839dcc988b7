//! Chains repeating a short fixed pattern of operations.

use chainmat_core::recurrence::{add, div_exact, mul, sub, times_label};
use chainmat_core::{Recurrence, SeededRandom, StepFault};

fn cycle_hint(ops: [String; 3]) -> String {
    format!(
        "The operations {} are repeated in this order.",
        ops.join(", ")
    )
}

/// Repeats `:f`, `±f`, `·f`.
///
/// The start is always a multiple of `f`, so every divide step is exact:
/// after `:f, ±f, ·f` the value is again a multiple of `f`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivideCycle {
    factor: i64,
    start: i64,
    subtract: bool,
}

impl DivideCycle {
    pub const FACTORS: [i64; 4] = [2, 5, 10, 20];

    pub fn new(factor: i64, start: i64, subtract: bool) -> Self {
        Self {
            factor,
            start,
            subtract,
        }
    }

    /// Picks the factor, draws a start multiple of it in [f, 10f], then
    /// decides between adding and subtracting.
    pub fn draw(rng: &mut SeededRandom) -> Self {
        let factor = Self::FACTORS[rng.next_index(Self::FACTORS.len())];
        let start = rng.next_in_range(1, 10) * factor;
        let subtract = rng.next_bool();
        Self::new(factor, start, subtract)
    }

    pub fn factor(&self) -> i64 {
        self.factor
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    fn labels(&self) -> [String; 3] {
        let sign = if self.subtract { '-' } else { '+' };
        [
            format!(":{}", self.factor),
            format!("{sign}{}", self.factor),
            times_label(self.factor),
        ]
    }
}

impl Recurrence for DivideCycle {
    fn name(&self) -> &'static str {
        "muldivadd"
    }

    fn identity(&self) -> String {
        format!(
            "muldivadd,{},{},{}",
            self.factor, self.start, self.subtract
        )
    }

    fn initial_values(&self) -> Vec<i64> {
        vec![self.start]
    }

    fn next_value(&self, index: usize, values: &[i64]) -> Result<i64, StepFault> {
        let prev = values[index - 1];
        match (index - 1) % 3 {
            0 => div_exact(prev, self.factor),
            1 if self.subtract => sub(prev, self.factor),
            1 => add(prev, self.factor),
            _ => mul(prev, self.factor),
        }
    }

    fn operation(&self, index: usize, _values: &[i64]) -> String {
        let [divide, shift, times] = self.labels();
        match index % 3 {
            0 => divide,
            1 => shift,
            _ => times,
        }
    }

    fn hint(&self) -> String {
        cycle_hint(self.labels())
    }
}

/// Alternates `·f` and `-s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MulSub {
    factor: i64,
    subtrahend: i64,
    start: i64,
}

impl MulSub {
    pub fn new(factor: i64, subtrahend: i64, start: i64) -> Self {
        Self {
            factor,
            subtrahend,
            start,
        }
    }

    /// Draws factor in [2, 5], subtrahend in [6, 20], then a start of at
    /// least `s / f` so the first product exceeds the subtrahend.
    pub fn draw(rng: &mut SeededRandom) -> Self {
        let factor = rng.next_in_range(2, 5);
        let subtrahend = rng.next_in_range(6, 20);
        let floor = subtrahend / factor;
        let start = rng.next_in_range(floor, floor + 10);
        Self::new(factor, subtrahend, start)
    }
}

impl Recurrence for MulSub {
    fn name(&self) -> &'static str {
        "mulsub"
    }

    fn identity(&self) -> String {
        format!(
            "mulsub,{},{},{}",
            self.factor, self.subtrahend, self.start
        )
    }

    fn initial_values(&self) -> Vec<i64> {
        vec![self.start]
    }

    fn next_value(&self, index: usize, values: &[i64]) -> Result<i64, StepFault> {
        let prev = values[index - 1];
        if index % 2 == 1 {
            mul(prev, self.factor)
        } else {
            sub(prev, self.subtrahend)
        }
    }

    fn operation(&self, index: usize, _values: &[i64]) -> String {
        if index % 2 == 0 {
            times_label(self.factor)
        } else {
            format!("-{}", self.subtrahend)
        }
    }

    fn hint(&self) -> String {
        format!(
            "The operations {}, -{} are applied alternately.",
            times_label(self.factor),
            self.subtrahend
        )
    }
}

/// Repeats `-sub`, `·f`, `+add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubMulAdd {
    addend: i64,
    subtrahend: i64,
    factor: i64,
    start: i64,
}

impl SubMulAdd {
    pub fn new(addend: i64, subtrahend: i64, factor: i64, start: i64) -> Self {
        Self {
            addend,
            subtrahend,
            factor,
            start,
        }
    }

    /// Draws addend, subtrahend, factor and start, in that order.
    pub fn draw(rng: &mut SeededRandom) -> Self {
        let addend = rng.next_in_range(1, 10);
        let subtrahend = rng.next_in_range(1, 10);
        let factor = rng.next_in_range(2, 3);
        let start = rng.next_in_range(5, 10);
        Self::new(addend, subtrahend, factor, start)
    }

    fn labels(&self) -> [String; 3] {
        [
            format!("-{}", self.subtrahend),
            times_label(self.factor),
            format!("+{}", self.addend),
        ]
    }
}

impl Recurrence for SubMulAdd {
    fn name(&self) -> &'static str {
        "muladdsub"
    }

    fn identity(&self) -> String {
        format!(
            "muladdsub,{},{},{},{}",
            self.addend, self.subtrahend, self.factor, self.start
        )
    }

    fn initial_values(&self) -> Vec<i64> {
        vec![self.start]
    }

    fn next_value(&self, index: usize, values: &[i64]) -> Result<i64, StepFault> {
        let prev = values[index - 1];
        match (index - 1) % 3 {
            0 => sub(prev, self.subtrahend),
            1 => mul(prev, self.factor),
            _ => add(prev, self.addend),
        }
    }

    fn operation(&self, index: usize, _values: &[i64]) -> String {
        let [minus, times, plus] = self.labels();
        match index % 3 {
            0 => minus,
            1 => times,
            _ => plus,
        }
    }

    fn hint(&self) -> String {
        cycle_hint(self.labels())
    }
}
