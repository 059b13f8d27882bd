//! Bounded integer arithmetic.

use crate::core::error::DomainError;

/// Largest argument whose factorial still fits in a `u64`.
pub const MAX_FACTORIAL_INPUT: i64 = 20;

/// Compute `n!` for `0 <= n <= 20`.
///
/// Arguments outside that range are refused with
/// [`DomainError::FactorialOutOfRange`] instead of overflowing.
pub fn factorial(n: i64) -> Result<u64, DomainError> {
    if !(0..=MAX_FACTORIAL_INPUT).contains(&n) {
        return Err(DomainError::FactorialOutOfRange(n));
    }
    Ok((2..=n as u64).product())
}
