//! A chain rule plus its memoized values.

use crate::kinds::{ChainKind, Variant};
use chainmat_core::{ChainError, Recurrence, SeededRandom, StepFault};
use std::cell::RefCell;

/// One puzzle chain.
///
/// Parameters are fixed at construction. Values are computed on demand,
/// iteratively, and cached; reading index `n` fills the cache up to `n`.
#[derive(Debug, Clone)]
pub struct Chain {
    kind: ChainKind,
    identity: String,
    visible_length: Option<usize>,
    values: RefCell<Vec<i64>>,
}

impl Chain {
    /// Wraps a constructed rule.
    pub fn new(kind: ChainKind) -> Self {
        Self {
            identity: kind.identity(),
            values: RefCell::new(kind.initial_values()),
            visible_length: None,
            kind,
        }
    }

    /// Picks a variant and draws its parameters, all from `rng`.
    pub fn draw(rng: &mut SeededRandom) -> Self {
        let variant = Variant::pick(rng);
        Self::new(variant.draw(rng))
    }

    pub fn kind(&self) -> &ChainKind {
        &self.kind
    }

    pub fn variant(&self) -> Variant {
        self.kind.variant()
    }

    /// Canonical identity used for deduplication.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Number of values the presentation shows in a solution, if set.
    pub fn visible_length(&self) -> Option<usize> {
        self.visible_length
    }

    pub fn set_visible_length(&mut self, length: usize) {
        self.visible_length = Some(length);
    }

    /// Value at `index`, computing and caching any missing predecessors.
    pub fn value_at(&self, index: usize) -> Result<i64, ChainError> {
        self.fill_to(index)?;
        Ok(self.values.borrow()[index])
    }

    /// The first `count` values.
    pub fn values(&self, count: usize) -> Result<Vec<i64>, ChainError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        self.fill_to(count - 1)?;
        Ok(self.values.borrow()[..count].to_vec())
    }

    /// Label for the transform from `index` to `index + 1`.
    pub fn operation_label(&self, index: usize) -> Result<String, ChainError> {
        self.fill_to(index + 1)?;
        Ok(self.kind.operation(index, &self.values.borrow()))
    }

    /// Prose explanation of the rule.
    pub fn hint(&self) -> String {
        self.kind.hint()
    }

    fn fill_to(&self, index: usize) -> Result<(), ChainError> {
        let mut values = self.values.borrow_mut();
        while values.len() <= index {
            let next = values.len();
            let value = self
                .kind
                .next_value(next, &values)
                .map_err(|fault| self.fault_error(fault, next))?;
            values.push(value);
        }
        Ok(())
    }

    fn fault_error(&self, fault: StepFault, index: usize) -> ChainError {
        let identity = self.identity.clone();
        match fault {
            StepFault::Overflow => ChainError::Overflow { identity, index },
            StepFault::InexactDivision { dividend, divisor } => ChainError::InexactDivision {
                identity,
                index,
                dividend,
                divisor,
            },
        }
    }
}

impl PartialEq for Chain {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for Chain {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{DivideCycle, Factorial, Fibonacci, PrimeProduct, Squares};

    #[test]
    fn fibonacci_golden_values() {
        let chain = Chain::new(ChainKind::Fibonacci(Fibonacci::new(3, 5)));
        assert_eq!(chain.value_at(2), Ok(8));
        assert_eq!(chain.value_at(3), Ok(13));
        assert_eq!(chain.operation_label(0).unwrap(), "?");
        assert_eq!(chain.operation_label(2).unwrap(), "+5");
    }

    #[test]
    fn prime_product_golden_values() {
        let chain = Chain::new(ChainKind::PrimeProduct(PrimeProduct));
        assert_eq!(chain.values(4), Ok(vec![1, 2, 6, 30]));
    }

    #[test]
    fn factorial_golden_values() {
        let chain = Chain::new(ChainKind::Factorial(Factorial));
        assert_eq!(chain.values(4), Ok(vec![1, 2, 6, 24]));
    }

    #[test]
    fn squares_golden_values() {
        let chain = Chain::new(ChainKind::Squares(Squares::new(4)));
        assert_eq!(chain.values(3), Ok(vec![16, 25, 36]));
        assert_eq!(chain.identity(), "squares,4");
    }

    #[test]
    fn random_access_fills_cache_iteratively() {
        let chain = Chain::new(ChainKind::Fibonacci(Fibonacci::new(1, 1)));
        assert_eq!(chain.value_at(80), Ok(37_889_062_373_143_906));
        assert_eq!(chain.value_at(10), Ok(89));
    }

    #[test]
    fn overflow_is_reported_with_identity_and_index() {
        let chain = Chain::new(ChainKind::Factorial(Factorial));
        assert!(chain.value_at(19).is_ok());
        assert_eq!(
            chain.value_at(20),
            Err(ChainError::Overflow {
                identity: "factorial".into(),
                index: 20
            })
        );
        // Earlier values stay readable after a failed read.
        assert_eq!(chain.value_at(3), Ok(24));
    }

    #[test]
    fn inexact_division_is_reported() {
        let chain = Chain::new(ChainKind::DivideCycle(DivideCycle::new(5, 31, false)));
        assert!(matches!(
            chain.value_at(1),
            Err(ChainError::InexactDivision {
                index: 1,
                dividend: 31,
                divisor: 5,
                ..
            })
        ));
    }

    #[test]
    fn values_zero_is_empty() {
        let chain = Chain::new(ChainKind::Factorial(Factorial));
        assert_eq!(chain.values(0), Ok(Vec::new()));
    }

    #[test]
    fn visible_length_is_unset_until_configured() {
        let mut chain = Chain::new(ChainKind::Factorial(Factorial));
        assert_eq!(chain.visible_length(), None);
        chain.set_visible_length(6);
        assert_eq!(chain.visible_length(), Some(6));
    }

    #[test]
    fn draw_picks_variant_then_parameters_from_one_stream() {
        // Seed 42: first draw picks factorial (no parameters), the next
        // picks prime product, the third squares with base 12.
        let mut rng = SeededRandom::new(42);
        let ids: Vec<String> = (0..3)
            .map(|_| Chain::draw(&mut rng).identity().to_string())
            .collect();
        assert_eq!(ids, vec!["factorial", "mulprimes", "squares,12"]);
    }

    #[test]
    fn equality_is_by_identity() {
        let a = Chain::new(ChainKind::Squares(Squares::new(7)));
        let b = Chain::new(ChainKind::Squares(Squares::new(7)));
        let c = Chain::new(ChainKind::Squares(Squares::new(8)));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
