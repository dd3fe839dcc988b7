//! Assembles a chain set from a seed.
//!
//! One generation pass reseeds a single random source and then repeatedly
//! picks a variant and draws its parameters from that same stream, keeping
//! only chains whose identity is new. Because duplicates consume draws too,
//! the result depends on the entire sequence of operations.

use crate::chain::Chain;
use chainmat_core::{ChainError, SeededRandom};
use std::collections::HashSet;

/// Number of distinct chains in a set.
pub const CHAIN_SET_SIZE: usize = 25;

/// Upper bound on construction attempts per pass, duplicates included.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Ordered chains produced by one generation pass.
#[derive(Debug, Clone)]
pub struct ChainSet {
    seed: i64,
    chains: Vec<Chain>,
}

impl ChainSet {
    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Chain> {
        self.chains.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chain> {
        self.chains.iter()
    }

    /// Identities in generation order.
    pub fn identities(&self) -> Vec<&str> {
        self.chains.iter().map(Chain::identity).collect()
    }

    pub fn into_chains(self) -> Vec<Chain> {
        self.chains
    }
}

impl<'a> IntoIterator for &'a ChainSet {
    type Item = &'a Chain;
    type IntoIter = std::slice::Iter<'a, Chain>;

    fn into_iter(self) -> Self::IntoIter {
        self.chains.iter()
    }
}

/// Generation settings: target count and attempt bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    target: usize,
    max_attempts: usize,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            target: CHAIN_SET_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the number of distinct chains to collect.
    pub fn with_target(mut self, target: usize) -> Self {
        self.target = target;
        self
    }

    /// Replaces the attempt bound.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Runs one pass on a fresh random source confined to this call.
    pub fn generate(
        &self,
        seed: i64,
        visible_length: Option<usize>,
    ) -> Result<ChainSet, ChainError> {
        let mut rng = SeededRandom::new(seed);
        self.generate_with(&mut rng, seed, visible_length)
    }

    /// Runs one pass on a caller-owned random source, reseeding it first.
    ///
    /// `visible_length` is stored on every chain for the presentation; it
    /// does not affect the recurrences.
    pub fn generate_with(
        &self,
        rng: &mut SeededRandom,
        seed: i64,
        visible_length: Option<usize>,
    ) -> Result<ChainSet, ChainError> {
        if let Some(length) = visible_length {
            if length < 2 {
                return Err(ChainError::InvalidLength(length));
            }
        }

        rng.reseed(seed);
        let mut seen = HashSet::with_capacity(self.target);
        let mut chains = Vec::with_capacity(self.target);
        let mut attempts = 0;

        while chains.len() < self.target {
            if attempts == self.max_attempts {
                tracing::warn!(
                    seed,
                    attempts,
                    collected = chains.len(),
                    target = self.target,
                    "chain set generation hit the attempt bound"
                );
                return Err(ChainError::RetriesExhausted {
                    attempts,
                    collected: chains.len(),
                    target: self.target,
                });
            }
            attempts += 1;

            let mut chain = Chain::draw(rng);
            if !seen.insert(chain.identity().to_string()) {
                tracing::trace!(seed, identity = chain.identity(), "duplicate chain rejected");
                continue;
            }
            if let Some(length) = visible_length {
                chain.set_visible_length(length);
            }
            chains.push(chain);
        }

        tracing::debug!(seed, attempts, count = chains.len(), "generated chain set");
        Ok(ChainSet { seed, chains })
    }
}

/// Generates the standard 25-chain set for `seed`.
pub fn generate(seed: i64, visible_length: Option<usize>) -> Result<ChainSet, ChainError> {
    Generator::default().generate(seed, visible_length)
}
