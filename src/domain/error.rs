//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("division by zero: cannot divide {0}")]
    DivisionByZero(i64),

    #[error("quotient overflow: {dividend} / {divisor}")]
    QuotientOverflow { dividend: i64, divisor: i64 },
}
