//! Serializable view of a generated chain set.
//!
//! A snapshot freezes the first `length` values, the `length - 1`
//! operation labels and the hint of every chain so a set can be written
//! out as JSON without the live chains.

use crate::chain::Chain;
use crate::generate::ChainSet;
use chainmat_core::ChainError;
use serde::{Deserialize, Serialize};

/// One chain, fully evaluated up to a visible length.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChainSnapshot {
    pub identity: String,
    pub kind: String,
    pub values: Vec<i64>,
    pub operations: Vec<String>,
    pub hint: String,
}

impl ChainSnapshot {
    /// Evaluates `chain` up to `length` values.
    pub fn capture(chain: &Chain, length: usize) -> Result<Self, ChainError> {
        let values = chain.values(length)?;
        let operations = (0..length.saturating_sub(1))
            .map(|i| chain.operation_label(i))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            identity: chain.identity().to_string(),
            kind: chain.variant().name().to_string(),
            values,
            operations,
            hint: chain.hint(),
        })
    }

    /// Values shown in the task: all but the last.
    pub fn task_values(&self) -> &[i64] {
        &self.values[..self.values.len().saturating_sub(1)]
    }
}

/// A whole chain set with the parameters that reproduce it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChainSetSnapshot {
    pub seed: i64,
    pub length: usize,
    pub chains: Vec<ChainSnapshot>,
}

impl ChainSetSnapshot {
    /// Evaluates every chain of `set` up to `length` values.
    pub fn capture(set: &ChainSet, length: usize) -> Result<Self, ChainError> {
        let chains = set
            .iter()
            .map(|chain| ChainSnapshot::capture(chain, length))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            seed: set.seed(),
            length,
            chains,
        })
    }
}
