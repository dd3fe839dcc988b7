#![deny(unsafe_code)]
//! Core types for chainmat, a generator of reproducible number chain puzzles.
//!
//! Provides the `SeededRandom` LCG whose stream defines every puzzle, the
//! `Recurrence` trait implemented by each chain variant, the `PuzzleSeed`
//! configuration value, and the shared `ChainError` type.

pub mod error;
pub mod prng;
pub mod recurrence;
pub mod seed;

pub use error::ChainError;
pub use prng::SeededRandom;
pub use recurrence::{Recurrence, StepFault};
pub use seed::PuzzleSeed;
