//! Well-known sequences: Fibonacci-like sums, squares, factorials and
//! primorials.

use super::nth_prime;
use chainmat_core::recurrence::{add, mul, times_label};
use chainmat_core::{Recurrence, SeededRandom, StepFault};

/// Each value is the sum of the two before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fibonacci {
    first: i64,
    second: i64,
}

impl Fibonacci {
    pub fn new(first: i64, second: i64) -> Self {
        Self { first, second }
    }

    /// Draws `first` in [1, 10] and `second` in [first, 10].
    pub fn draw(rng: &mut SeededRandom) -> Self {
        let first = rng.next_in_range(1, 10);
        let second = rng.next_in_range(first, 10);
        Self::new(first, second)
    }
}

impl Recurrence for Fibonacci {
    fn name(&self) -> &'static str {
        "fib"
    }

    fn identity(&self) -> String {
        format!("fib,{},{}", self.first, self.second)
    }

    fn initial_values(&self) -> Vec<i64> {
        vec![self.first, self.second]
    }

    fn next_value(&self, index: usize, values: &[i64]) -> Result<i64, StepFault> {
        add(values[index - 2], values[index - 1])
    }

    fn operation(&self, index: usize, values: &[i64]) -> String {
        // The first two values are given, not derived.
        if index == 0 {
            return "?".to_string();
        }
        format!("+{}", values[index - 1])
    }

    fn hint(&self) -> String {
        "The two preceding numbers add up to the next one.".to_string()
    }
}

/// Ascending squares `(start + i)²`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Squares {
    start: i64,
}

impl Squares {
    pub fn new(start: i64) -> Self {
        Self { start }
    }

    /// Draws the base in [2, 15].
    pub fn draw(rng: &mut SeededRandom) -> Self {
        Self::new(rng.next_in_range(2, 15))
    }

    fn square_at(&self, index: usize) -> Result<i64, StepFault> {
        let offset = i64::try_from(index).map_err(|_| StepFault::Overflow)?;
        let base = add(self.start, offset)?;
        mul(base, base)
    }
}

impl Recurrence for Squares {
    fn name(&self) -> &'static str {
        "squares"
    }

    fn identity(&self) -> String {
        format!("squares,{}", self.start)
    }

    fn initial_values(&self) -> Vec<i64> {
        Vec::new()
    }

    fn next_value(&self, index: usize, _values: &[i64]) -> Result<i64, StepFault> {
        self.square_at(index)
    }

    fn operation(&self, index: usize, _values: &[i64]) -> String {
        format!("= {}²", i128::from(self.start) + index as i128 + 1)
    }

    fn hint(&self) -> String {
        format!("Ascending square numbers starting at {}.", self.start)
    }
}

/// `1, 1·2, 1·2·3, ...`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Factorial;

impl Recurrence for Factorial {
    fn name(&self) -> &'static str {
        "factorial"
    }

    fn identity(&self) -> String {
        "factorial".to_string()
    }

    fn initial_values(&self) -> Vec<i64> {
        vec![1]
    }

    fn next_value(&self, index: usize, values: &[i64]) -> Result<i64, StepFault> {
        let factor = i64::try_from(index + 1).map_err(|_| StepFault::Overflow)?;
        mul(values[index - 1], factor)
    }

    fn operation(&self, index: usize, _values: &[i64]) -> String {
        format!("·{}", index as u128 + 2)
    }

    fn hint(&self) -> String {
        "All numbers are multiplied in ascending order (factorial).".to_string()
    }
}

/// Running product of the primes: `1, 2, 6, 30, 210, ...`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrimeProduct;

impl Recurrence for PrimeProduct {
    fn name(&self) -> &'static str {
        "mulprimes"
    }

    fn identity(&self) -> String {
        "mulprimes".to_string()
    }

    fn initial_values(&self) -> Vec<i64> {
        vec![1]
    }

    fn next_value(&self, index: usize, values: &[i64]) -> Result<i64, StepFault> {
        mul(values[index - 1], nth_prime(index - 1))
    }

    fn operation(&self, index: usize, _values: &[i64]) -> String {
        times_label(nth_prime(index))
    }

    fn hint(&self) -> String {
        "All prime numbers are multiplied one after another.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extend<R: Recurrence>(r: &R, count: usize) -> Vec<i64> {
        let mut values = r.initial_values();
        while values.len() < count {
            let next = r.next_value(values.len(), &values).unwrap();
            values.push(next);
        }
        values
    }

    #[test]
    fn fibonacci_sums_previous_two() {
        let fib = Fibonacci::new(3, 5);
        assert_eq!(extend(&fib, 4), vec![3, 5, 8, 13]);
    }

    #[test]
    fn fibonacci_operations() {
        let fib = Fibonacci::new(1, 5);
        let values = extend(&fib, 6);
        assert_eq!(values, vec![1, 5, 6, 11, 17, 28]);
        let ops: Vec<String> = (0..5).map(|i| fib.operation(i, &values)).collect();
        assert_eq!(ops, vec!["?", "+1", "+5", "+6", "+11"]);
        assert_eq!(fib.identity(), "fib,1,5");
    }

    #[test]
    fn fibonacci_draw_keeps_second_not_below_first() {
        let mut rng = SeededRandom::new(0);
        for _ in 0..200 {
            let fib = Fibonacci::draw(&mut rng);
            assert!((1..=10).contains(&fib.first));
            assert!((fib.first..=10).contains(&fib.second));
        }
    }

    #[test]
    fn squares_from_four() {
        let sq = Squares::new(4);
        let values = extend(&sq, 3);
        assert_eq!(values, vec![16, 25, 36]);
        assert_eq!(sq.operation(0, &values), "= 5²");
        assert_eq!(sq.hint(), "Ascending square numbers starting at 4.");
    }

    #[test]
    fn factorial_values_and_labels() {
        let values = extend(&Factorial, 6);
        assert_eq!(values, vec![1, 2, 6, 24, 120, 720]);
        let ops: Vec<String> = (0..5).map(|i| Factorial.operation(i, &values)).collect();
        assert_eq!(ops, vec!["·2", "·3", "·4", "·5", "·6"]);
    }

    #[test]
    fn factorial_reports_overflow_at_index_twenty() {
        let values = extend(&Factorial, 20);
        assert_eq!(values[19], 2_432_902_008_176_640_000);
        assert_eq!(Factorial.next_value(20, &values), Err(StepFault::Overflow));
    }

    #[test]
    fn prime_product_values_and_labels() {
        let values = extend(&PrimeProduct, 6);
        assert_eq!(values, vec![1, 2, 6, 30, 210, 2310]);
        let ops: Vec<String> = (0..5)
            .map(|i| PrimeProduct.operation(i, &values))
            .collect();
        assert_eq!(ops, vec!["·2", "·3", "·5", "·7", "·11"]);
    }

    #[test]
    fn prime_product_identity_has_no_parameters() {
        assert_eq!(PrimeProduct.identity(), "mulprimes");
        assert_eq!(Factorial.identity(), "factorial");
    }
}
