//! Chains built by adding a varying amount to the previous value.

use super::{draw_pair, nth_prime};
use chainmat_core::recurrence::{add, mul};
use chainmat_core::{Recurrence, SeededRandom, StepFault};

/// Sign applied at `index` when alternation is on: every even index flips.
fn alternating_sign(alternate: bool, index: usize) -> i64 {
    if alternate && index % 2 == 0 {
        -1
    } else {
        1
    }
}

fn step_count(index: usize) -> Result<i64, StepFault> {
    i64::try_from(index - 1).map_err(|_| StepFault::Overflow)
}

/// Adds `d + dd·(i-1)` at step `i`, optionally with alternating sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drift {
    start: i64,
    step: i64,
    drift: i64,
    alternate: bool,
}

impl Drift {
    /// Alternation is suppressed when the step would change sign within
    /// this many transitions.
    pub const SIGN_FLIP_HORIZON: f64 = 6.0;

    pub fn new(start: i64, step: i64, drift: i64, alternate: bool) -> Self {
        Self {
            start,
            step,
            drift,
            alternate,
        }
    }

    /// Draws start, step, an optional drift (half of the time) and the
    /// alternation flag, in that order.
    pub fn draw(rng: &mut SeededRandom) -> Self {
        let start = rng.next_in_range(-100, 100);
        let step = rng.next_in_range(-20, 20);
        let drift = if rng.next_bool() {
            rng.next_in_range(-5, 5)
        } else {
            0
        };
        let mut alternate = rng.next_bool();

        // An early sign change of the step makes alternation unreadable.
        if (step < 0) ^ (drift < 0)
            && (step as f64 / drift as f64).abs() < Self::SIGN_FLIP_HORIZON
        {
            alternate = false;
        }

        Self::new(start, step, drift, alternate)
    }
}

impl Recurrence for Drift {
    fn name(&self) -> &'static str {
        "add"
    }

    fn identity(&self) -> String {
        format!(
            "add,{},{},{},{}",
            self.start, self.step, self.drift, self.alternate
        )
    }

    fn initial_values(&self) -> Vec<i64> {
        vec![self.start]
    }

    fn next_value(&self, index: usize, values: &[i64]) -> Result<i64, StepFault> {
        let amount = add(self.step, mul(self.drift, step_count(index)?)?)?;
        add(
            values[index - 1],
            mul(amount, alternating_sign(self.alternate, index))?,
        )
    }

    fn hint(&self) -> String {
        let mut hint = format!("d={} is added to the previous number.", self.step);
        if self.drift != 0 {
            hint.push_str(&format!(" d changes by {} each step.", self.drift));
        }
        if self.alternate {
            hint.push_str(" The sign alternates.");
        }
        hint
    }
}

/// Adds (or subtracts) consecutive primes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddPrimes {
    start: i64,
    alternate: bool,
    sign: i64,
    offset: usize,
}

impl AddPrimes {
    pub fn new(start: i64, alternate: bool, sign: i64, offset: usize) -> Self {
        Self {
            start,
            alternate,
            sign,
            offset,
        }
    }

    /// Draws start, alternation flag, base sign and the first prime's
    /// position in the table.
    pub fn draw(rng: &mut SeededRandom) -> Self {
        let start = rng.next_in_range(-10, 10);
        let alternate = rng.next_bool();
        let sign = if rng.next_bool() { -1 } else { 1 };
        let offset = rng.next_index(4);
        Self::new(start, alternate, sign, offset)
    }
}

impl Recurrence for AddPrimes {
    fn name(&self) -> &'static str {
        "primes"
    }

    fn identity(&self) -> String {
        format!(
            "primes,{},{},{},{}",
            self.start, self.alternate, self.sign, self.offset
        )
    }

    fn initial_values(&self) -> Vec<i64> {
        vec![self.start]
    }

    fn next_value(&self, index: usize, values: &[i64]) -> Result<i64, StepFault> {
        let prime = nth_prime(self.offset + index - 1);
        let sign = self.sign * alternating_sign(self.alternate, index);
        add(values[index - 1], mul(prime, sign)?)
    }

    fn hint(&self) -> String {
        let verb = if self.sign == 1 {
            "added to"
        } else {
            "subtracted from"
        };
        let mut hint = format!(
            "Prime numbers starting at {} are {verb} the previous number",
            nth_prime(self.offset)
        );
        if self.alternate {
            hint.push_str(" (the sign alternates)");
        }
        hint.push('.');
        hint
    }
}

/// Adds two fixed numbers in turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddPair {
    pair: [i64; 2],
    start: i64,
}

impl AddPair {
    pub fn new(pair: [i64; 2], start: i64) -> Self {
        Self { pair, start }
    }

    /// Thins -10..=10 down to two numbers, then draws the start.
    pub fn draw(rng: &mut SeededRandom) -> Self {
        let pair = draw_pair(rng, (-10..=10).collect());
        let start = rng.next_in_range(-100, 100);
        Self::new(pair, start)
    }
}

impl Recurrence for AddPair {
    fn name(&self) -> &'static str {
        "addtuple"
    }

    fn identity(&self) -> String {
        format!("addtuple,[{},{}],{}", self.pair[0], self.pair[1], self.start)
    }

    fn initial_values(&self) -> Vec<i64> {
        vec![self.start]
    }

    fn next_value(&self, index: usize, values: &[i64]) -> Result<i64, StepFault> {
        add(values[index - 1], self.pair[(index - 1) % 2])
    }

    fn hint(&self) -> String {
        format!(
            "The numbers {}, {} are added to the previous number in turn.",
            self.pair[0], self.pair[1]
        )
    }
}

/// Adds `f·ff^(i-1)` at step `i`: the increment grows geometrically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Growth {
    start: i64,
    base: i64,
    growth: i64,
    alternate: bool,
}

impl Growth {
    pub fn new(start: i64, base: i64, growth: i64, alternate: bool) -> Self {
        Self {
            start,
            base,
            growth,
            alternate,
        }
    }

    /// Draws start, base increment, growth factor and alternation flag.
    pub fn draw(rng: &mut SeededRandom) -> Self {
        let start = rng.next_in_range(-100, 10);
        let base = rng.next_in_range(1, 5);
        let growth = rng.next_in_range(2, 3);
        let alternate = rng.next_bool();
        Self::new(start, base, growth, alternate)
    }
}

impl Recurrence for Growth {
    fn name(&self) -> &'static str {
        "addmul"
    }

    fn identity(&self) -> String {
        format!(
            "addmul,{},{},{},{}",
            self.start, self.base, self.growth, self.alternate
        )
    }

    fn initial_values(&self) -> Vec<i64> {
        vec![self.start]
    }

    fn next_value(&self, index: usize, values: &[i64]) -> Result<i64, StepFault> {
        let exponent = u32::try_from(index - 1).map_err(|_| StepFault::Overflow)?;
        let scale = self
            .growth
            .checked_pow(exponent)
            .ok_or(StepFault::Overflow)?;
        let amount = mul(mul(self.base, scale)?, alternating_sign(self.alternate, index))?;
        add(values[index - 1], amount)
    }

    fn hint(&self) -> String {
        let mut hint = format!(
            "f = {} is added to the previous number. f is multiplied by {} each step.",
            self.base, self.growth
        );
        if self.alternate {
            hint.push_str(" The sign alternates.");
        }
        hint
    }
}
