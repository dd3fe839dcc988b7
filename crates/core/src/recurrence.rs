//! The `Recurrence` trait every chain variant implements.
//!
//! A recurrence owns only its drawn parameters. Value storage and
//! memoization belong to the caller, which passes the already computed
//! prefix into [`Recurrence::next_value`] and [`Recurrence::operation`].

/// Arithmetic failure while extending a chain by one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepFault {
    /// The next value does not fit in an `i64`.
    Overflow,
    /// A divide step left a remainder.
    InexactDivision { dividend: i64, divisor: i64 },
}

/// A number chain rule with fixed parameters.
///
/// Implementations are pure functions of their parameters: the same
/// parameters always yield the same identity, values, labels and hint.
pub trait Recurrence {
    /// Short variant name, also the identity prefix.
    fn name(&self) -> &'static str;

    /// Canonical string encoding the variant and every drawn parameter.
    fn identity(&self) -> String;

    /// The values fixed at construction. Closed-form rules may return an
    /// empty prefix and compute every value in [`Recurrence::next_value`].
    fn initial_values(&self) -> Vec<i64>;

    /// Computes the value at `index` from `values`, which holds exactly the
    /// values at indices `0..index`.
    fn next_value(&self, index: usize, values: &[i64]) -> Result<i64, StepFault>;

    /// Label for the transform from `index` to `index + 1`.
    ///
    /// `values` holds at least the values at indices `0..=index + 1`. The
    /// default is the signed difference, e.g. `+7` or `-3`.
    fn operation(&self, index: usize, values: &[i64]) -> String {
        signed_delta(values[index], values[index + 1])
    }

    /// Prose explanation of the rule, naming the drawn constants.
    fn hint(&self) -> String;
}

/// Formats `to - from` with an explicit sign. Never overflows.
pub fn signed_delta(from: i64, to: i64) -> String {
    let delta = i128::from(to) - i128::from(from);
    format!("{delta:+}")
}

/// Formats a multiplication label: `·3`, or `· (-3)` for negative factors.
pub fn times_label(factor: i64) -> String {
    if factor < 0 {
        format!("· ({factor})")
    } else {
        format!("·{factor}")
    }
}

/// Checked helpers mapping `None` to [`StepFault::Overflow`].
pub fn add(a: i64, b: i64) -> Result<i64, StepFault> {
    a.checked_add(b).ok_or(StepFault::Overflow)
}

pub fn sub(a: i64, b: i64) -> Result<i64, StepFault> {
    a.checked_sub(b).ok_or(StepFault::Overflow)
}

pub fn mul(a: i64, b: i64) -> Result<i64, StepFault> {
    a.checked_mul(b).ok_or(StepFault::Overflow)
}

/// Exact division; a remainder is reported instead of truncated.
pub fn div_exact(dividend: i64, divisor: i64) -> Result<i64, StepFault> {
    match dividend.checked_rem(divisor) {
        Some(0) => dividend.checked_div(divisor).ok_or(StepFault::Overflow),
        Some(_) => Err(StepFault::InexactDivision { dividend, divisor }),
        None => Err(StepFault::Overflow),
    }
}
