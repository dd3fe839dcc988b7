//! Reproducible description of a puzzle page.
//!
//! A [`PuzzleSeed`] is everything needed to recreate a chain set: the seed
//! fed to the random source and the number of values shown per chain.

use crate::error::ChainError;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seed plus visible chain length.
///
/// Two equal `PuzzleSeed` values always produce identical chain sets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PuzzleSeed {
    pub seed: i64,
    pub length: usize,
}

impl PuzzleSeed {
    /// Values shown per chain in the solution; the task shows one fewer.
    pub const DEFAULT_LENGTH: usize = 6;

    /// Creates a seed with the default visible length.
    pub fn new(seed: i64) -> Self {
        Self {
            seed,
            length: Self::DEFAULT_LENGTH,
        }
    }

    /// Replaces the visible length.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Creates a fresh seed from the wall clock (milliseconds since the
    /// Unix epoch). Falls back to 0 if the clock is before the epoch.
    pub fn from_clock() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0);
        Self::new(millis)
    }

    /// Reads a seed leniently, the way seeds arrive from links and cookies.
    ///
    /// Leading whitespace is skipped, an optional sign is accepted, and the
    /// longest run of decimal digits is used; trailing garbage is ignored.
    /// Input without leading digits yields seed 0. Out-of-range values
    /// saturate at `i64::MIN` / `i64::MAX`.
    pub fn parse(input: &str) -> Self {
        Self::new(parse_leading_integer(input))
    }

    /// Checks that the visible length leaves at least one task value and
    /// one value to guess.
    pub fn validate(&self) -> Result<(), ChainError> {
        if self.length < 2 {
            return Err(ChainError::InvalidLength(self.length));
        }
        Ok(())
    }
}

fn parse_leading_integer(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit);

    let mut value: i64 = 0;
    for d in digits {
        let d = i64::from(d - b'0');
        let next = value
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(d) } else { v.checked_add(d) });
        match next {
            Some(v) => value = v,
            None => return if negative { i64::MIN } else { i64::MAX },
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_length() {
        let s = PuzzleSeed::new(42);
        assert_eq!(s.seed, 42);
        assert_eq!(s.length, 6);
    }

    #[test]
    fn with_length_overrides_length() {
        let s = PuzzleSeed::new(42).with_length(8);
        assert_eq!(s.length, 8);
        assert_eq!(s.seed, 42);
    }

    #[test]
    fn json_round_trip() {
        let original = PuzzleSeed::new(1_700_000_000_000).with_length(7);
        let json = serde_json::to_string(&original).unwrap();
        let restored: PuzzleSeed = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn json_contains_expected_keys() {
        let v = serde_json::to_value(PuzzleSeed::new(1)).unwrap();
        assert!(v.get("seed").is_some());
        assert!(v.get("length").is_some());
    }

    #[test]
    fn parse_reads_plain_number() {
        assert_eq!(PuzzleSeed::parse("1234").seed, 1234);
    }

    #[test]
    fn parse_skips_leading_whitespace_and_trailing_garbage() {
        assert_eq!(PuzzleSeed::parse("  987abc").seed, 987);
        assert_eq!(PuzzleSeed::parse("12.5").seed, 12);
    }

    #[test]
    fn parse_accepts_sign() {
        assert_eq!(PuzzleSeed::parse("-17").seed, -17);
        assert_eq!(PuzzleSeed::parse("+17").seed, 17);
    }

    #[test]
    fn parse_falls_back_to_zero() {
        assert_eq!(PuzzleSeed::parse("").seed, 0);
        assert_eq!(PuzzleSeed::parse("seed").seed, 0);
        assert_eq!(PuzzleSeed::parse("-").seed, 0);
    }

    #[test]
    fn parse_saturates_out_of_range_values() {
        assert_eq!(PuzzleSeed::parse("99999999999999999999999").seed, i64::MAX);
        assert_eq!(PuzzleSeed::parse("-99999999999999999999999").seed, i64::MIN);
        assert_eq!(PuzzleSeed::parse("-9223372036854775808").seed, i64::MIN);
    }

    #[test]
    fn from_clock_is_positive_with_default_length() {
        let s = PuzzleSeed::from_clock();
        assert!(s.seed > 0);
        assert_eq!(s.length, PuzzleSeed::DEFAULT_LENGTH);
    }

    #[test]
    fn validate_succeeds_for_default_length() {
        assert!(PuzzleSeed::new(42).validate().is_ok());
        assert!(PuzzleSeed::new(42).with_length(2).validate().is_ok());
    }

    #[test]
    fn validate_fails_for_short_length() {
        assert_eq!(
            PuzzleSeed::new(42).with_length(1).validate(),
            Err(ChainError::InvalidLength(1))
        );
        assert!(PuzzleSeed::new(42).with_length(0).validate().is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn parse_inverts_display(seed: i64) {
                prop_assert_eq!(PuzzleSeed::parse(&seed.to_string()).seed, seed);
            }
        }
    }
}
