//! Error types for chainmat.

use thiserror::Error;

/// Errors produced while generating or reading number chains.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// A chain value no longer fits in an `i64`.
    #[error("value {index} of chain '{identity}' overflows a 64-bit integer")]
    Overflow { identity: String, index: usize },

    /// A divide step left a remainder, so the chain would stop being integral.
    #[error("value {index} of chain '{identity}' is not integral: {dividend} is not divisible by {divisor}")]
    InexactDivision {
        identity: String,
        index: usize,
        dividend: i64,
        divisor: i64,
    },

    /// The duplicate-retry loop of a generation pass hit its bound.
    #[error("gave up after {attempts} attempts with {collected} of {target} distinct chains")]
    RetriesExhausted {
        attempts: usize,
        collected: usize,
        target: usize,
    },

    /// A visible chain length too short to show a task and its answer.
    #[error("invalid chain length {0}: at least 2 values are required")]
    InvalidLength(usize),

    /// A variant name was not recognized.
    #[error("unknown chain variant: {0}")]
    UnknownVariant(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_includes_identity_and_index() {
        let err = ChainError::Overflow {
            identity: "factorial".into(),
            index: 20,
        };
        let msg = format!("{err}");
        assert!(msg.contains("factorial"), "missing identity in: {msg}");
        assert!(msg.contains("20"), "missing index in: {msg}");
    }

    #[test]
    fn inexact_division_includes_operands() {
        let err = ChainError::InexactDivision {
            identity: "muldivadd,5,30,true".into(),
            index: 4,
            dividend: 31,
            divisor: 5,
        };
        let msg = format!("{err}");
        assert!(msg.contains("muldivadd,5,30,true"), "missing identity in: {msg}");
        assert!(msg.contains("31"), "missing dividend in: {msg}");
        assert!(msg.contains('5'), "missing divisor in: {msg}");
    }

    #[test]
    fn retries_exhausted_includes_counts() {
        let err = ChainError::RetriesExhausted {
            attempts: 10_000,
            collected: 24,
            target: 25,
        };
        let msg = format!("{err}");
        assert!(msg.contains("10000"), "missing attempts in: {msg}");
        assert!(msg.contains("24"), "missing collected in: {msg}");
        assert!(msg.contains("25"), "missing target in: {msg}");
    }

    #[test]
    fn invalid_length_includes_length() {
        let msg = format!("{}", ChainError::InvalidLength(1));
        assert!(msg.contains('1'), "missing length in: {msg}");
    }

    #[test]
    fn unknown_variant_includes_name() {
        let msg = format!("{}", ChainError::UnknownVariant("cubes".into()));
        assert!(msg.contains("cubes"), "missing name in: {msg}");
    }

    #[test]
    fn chain_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChainError>();
    }

    #[test]
    fn chain_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ChainError>();
    }
}
