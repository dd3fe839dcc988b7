//! The closed set of chain variants.
//!
//! [`Variant`] names the 13 rules in library order (the order matters: the
//! generator picks a variant by index from the shared random stream).
//! [`ChainKind`] holds one constructed rule with its drawn parameters and
//! delegates [`Recurrence`] to it.

pub mod additive;
pub mod classic;
pub mod cyclic;
pub mod multiplicative;

pub use additive::{AddPair, AddPrimes, Drift, Growth};
pub use classic::{Factorial, Fibonacci, PrimeProduct, Squares};
pub use cyclic::{DivideCycle, MulSub, SubMulAdd};
pub use multiplicative::{MulPair, Multiply};

use chainmat_core::{ChainError, Recurrence, SeededRandom, StepFault};
use std::fmt;

/// The first 16 primes; larger ones are found by trial division.
pub const PRIMES: [i64; 16] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53];

/// Returns the `n`-th prime, 0-based (`nth_prime(0) == 2`).
pub fn nth_prime(n: usize) -> i64 {
    if let Some(&p) = PRIMES.get(n) {
        return p;
    }
    let mut found = PRIMES.len() - 1;
    let mut candidate = PRIMES[PRIMES.len() - 1];
    while found < n {
        candidate += 2;
        if is_prime(candidate) {
            found += 1;
        }
    }
    candidate
}

fn is_prime(n: i64) -> bool {
    n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

/// Removes randomly picked elements until two remain, keeping their order.
fn draw_pair(rng: &mut SeededRandom, mut pool: Vec<i64>) -> [i64; 2] {
    while pool.len() > 2 {
        let index = rng.next_index(pool.len());
        pool.remove(index);
    }
    [pool[0], pool[1]]
}

/// Names of the 13 chain rules, in library order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Fibonacci,
    Drift,
    AddPrimes,
    AddPair,
    Multiply,
    Growth,
    MulPair,
    DivideCycle,
    MulSub,
    SubMulAdd,
    PrimeProduct,
    Factorial,
    Squares,
}

impl Variant {
    /// All variants in library order.
    pub const ALL: [Variant; 13] = [
        Variant::Fibonacci,
        Variant::Drift,
        Variant::AddPrimes,
        Variant::AddPair,
        Variant::Multiply,
        Variant::Growth,
        Variant::MulPair,
        Variant::DivideCycle,
        Variant::MulSub,
        Variant::SubMulAdd,
        Variant::PrimeProduct,
        Variant::Factorial,
        Variant::Squares,
    ];

    /// Identity prefix of chains of this variant.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Fibonacci => "fib",
            Variant::Drift => "add",
            Variant::AddPrimes => "primes",
            Variant::AddPair => "addtuple",
            Variant::Multiply => "multiply",
            Variant::Growth => "addmul",
            Variant::MulPair => "mulpair",
            Variant::DivideCycle => "muldivadd",
            Variant::MulSub => "mulsub",
            Variant::SubMulAdd => "muladdsub",
            Variant::PrimeProduct => "mulprimes",
            Variant::Factorial => "factorial",
            Variant::Squares => "squares",
        }
    }

    /// One-line description for listings.
    pub fn summary(self) -> &'static str {
        match self {
            Variant::Fibonacci => "sum of the two previous values",
            Variant::Drift => "add a step that drifts by a constant",
            Variant::AddPrimes => "add consecutive primes",
            Variant::AddPair => "add two numbers in turn",
            Variant::Multiply => "multiply by 2 or 3",
            Variant::Growth => "add a geometrically growing step",
            Variant::MulPair => "multiply by two factors in turn",
            Variant::DivideCycle => "repeat divide, add or subtract, multiply",
            Variant::MulSub => "multiply and subtract in turn",
            Variant::SubMulAdd => "repeat subtract, multiply, add",
            Variant::PrimeProduct => "running product of the primes",
            Variant::Factorial => "factorials",
            Variant::Squares => "ascending square numbers",
        }
    }

    /// Looks a variant up by its identity prefix.
    pub fn from_name(name: &str) -> Result<Self, ChainError> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == name)
            .ok_or_else(|| ChainError::UnknownVariant(name.to_string()))
    }

    /// Picks a variant with one draw from `rng`.
    pub fn pick(rng: &mut SeededRandom) -> Self {
        Self::ALL[rng.next_index(Self::ALL.len())]
    }

    /// Constructs a chain rule of this variant, drawing its parameters from
    /// `rng` in the variant's fixed order.
    pub fn draw(self, rng: &mut SeededRandom) -> ChainKind {
        match self {
            Variant::Fibonacci => ChainKind::Fibonacci(Fibonacci::draw(rng)),
            Variant::Drift => ChainKind::Drift(Drift::draw(rng)),
            Variant::AddPrimes => ChainKind::AddPrimes(AddPrimes::draw(rng)),
            Variant::AddPair => ChainKind::AddPair(AddPair::draw(rng)),
            Variant::Multiply => ChainKind::Multiply(Multiply::draw(rng)),
            Variant::Growth => ChainKind::Growth(Growth::draw(rng)),
            Variant::MulPair => ChainKind::MulPair(MulPair::draw(rng)),
            Variant::DivideCycle => ChainKind::DivideCycle(DivideCycle::draw(rng)),
            Variant::MulSub => ChainKind::MulSub(MulSub::draw(rng)),
            Variant::SubMulAdd => ChainKind::SubMulAdd(SubMulAdd::draw(rng)),
            Variant::PrimeProduct => ChainKind::PrimeProduct(PrimeProduct),
            Variant::Factorial => ChainKind::Factorial(Factorial),
            Variant::Squares => ChainKind::Squares(Squares::draw(rng)),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A chain rule with its drawn parameters.
///
/// Wraps each variant and delegates [`Recurrence`] methods with an
/// exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainKind {
    Fibonacci(Fibonacci),
    Drift(Drift),
    AddPrimes(AddPrimes),
    AddPair(AddPair),
    Multiply(Multiply),
    Growth(Growth),
    MulPair(MulPair),
    DivideCycle(DivideCycle),
    MulSub(MulSub),
    SubMulAdd(SubMulAdd),
    PrimeProduct(PrimeProduct),
    Factorial(Factorial),
    Squares(Squares),
}

impl ChainKind {
    /// The variant this rule belongs to.
    pub fn variant(&self) -> Variant {
        match self {
            ChainKind::Fibonacci(_) => Variant::Fibonacci,
            ChainKind::Drift(_) => Variant::Drift,
            ChainKind::AddPrimes(_) => Variant::AddPrimes,
            ChainKind::AddPair(_) => Variant::AddPair,
            ChainKind::Multiply(_) => Variant::Multiply,
            ChainKind::Growth(_) => Variant::Growth,
            ChainKind::MulPair(_) => Variant::MulPair,
            ChainKind::DivideCycle(_) => Variant::DivideCycle,
            ChainKind::MulSub(_) => Variant::MulSub,
            ChainKind::SubMulAdd(_) => Variant::SubMulAdd,
            ChainKind::PrimeProduct(_) => Variant::PrimeProduct,
            ChainKind::Factorial(_) => Variant::Factorial,
            ChainKind::Squares(_) => Variant::Squares,
        }
    }

    fn rule(&self) -> &dyn Recurrence {
        match self {
            ChainKind::Fibonacci(r) => r,
            ChainKind::Drift(r) => r,
            ChainKind::AddPrimes(r) => r,
            ChainKind::AddPair(r) => r,
            ChainKind::Multiply(r) => r,
            ChainKind::Growth(r) => r,
            ChainKind::MulPair(r) => r,
            ChainKind::DivideCycle(r) => r,
            ChainKind::MulSub(r) => r,
            ChainKind::SubMulAdd(r) => r,
            ChainKind::PrimeProduct(r) => r,
            ChainKind::Factorial(r) => r,
            ChainKind::Squares(r) => r,
        }
    }
}

impl Recurrence for ChainKind {
    fn name(&self) -> &'static str {
        self.rule().name()
    }

    fn identity(&self) -> String {
        self.rule().identity()
    }

    fn initial_values(&self) -> Vec<i64> {
        self.rule().initial_values()
    }

    fn next_value(&self, index: usize, values: &[i64]) -> Result<i64, StepFault> {
        self.rule().next_value(index, values)
    }

    fn operation(&self, index: usize, values: &[i64]) -> String {
        self.rule().operation(index, values)
    }

    fn hint(&self) -> String {
        self.rule().hint()
    }
}
