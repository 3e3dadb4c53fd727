//! Integer division with remainder

use crate::domain::error::DomainError;

/// Result of a truncating integer division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Division {
    pub quotient: i64,
    pub remainder: i64,
}

/// Truncating division with remainder.
///
/// Satisfies `dividend == quotient * divisor + remainder` with
/// `|remainder| < |divisor|`. The remainder carries the sign of the
/// dividend (Rust's native `/` and `%` semantics).
///
/// # Errors
///
/// * [`DomainError::DivisionByZero`] when `divisor` is 0.
/// * [`DomainError::QuotientOverflow`] for `i64::MIN / -1`, the one signed
///   pair whose quotient is unrepresentable.
pub fn divide(dividend: i64, divisor: i64) -> Result<Division, DomainError> {
    if divisor == 0 {
        return Err(DomainError::DivisionByZero(dividend));
    }
    let quotient = dividend
        .checked_div(divisor)
        .ok_or(DomainError::QuotientOverflow { dividend, divisor })?;
    let remainder = dividend
        .checked_rem(divisor)
        .ok_or(DomainError::QuotientOverflow { dividend, divisor })?;
    Ok(Division {
        quotient,
        remainder,
    })
}
