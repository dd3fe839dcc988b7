#![deny(unsafe_code)]
//! Number chain variants and the chain set generator.
//!
//! This crate sits on top of `chainmat-core` (which defines the random
//! source and the `Recurrence` trait). [`kinds`] holds the 13 chain rules
//! and the closed [`ChainKind`] sum type, [`chain`] the memoizing
//! [`Chain`] wrapper, [`generate`](mod@generate) the deduplicating generation pass and
//! [`snapshot`] a serializable view of its result.

pub mod chain;
pub mod generate;
pub mod kinds;
pub mod snapshot;

pub use chain::Chain;
pub use generate::{generate, ChainSet, Generator, CHAIN_SET_SIZE};
pub use kinds::{ChainKind, Variant};
pub use snapshot::{ChainSetSnapshot, ChainSnapshot};
