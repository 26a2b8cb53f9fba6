use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// The kind of failure an engine reports.
///
/// Every failure is a property of the input, so none of these kinds is worth
/// retrying with the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A single value violates its precondition.
    InvalidInput,
    /// A series is too short to compute a meaningful result.
    InsufficientData,
    /// The set of comparable sales is empty or unusable.
    InsufficientComparables,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::InvalidInput => "invalid input",
            ErrorKind::InsufficientData => "insufficient data",
            ErrorKind::InsufficientComparables => "insufficient comparables",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("{0} is outside the computable range")]
    OutOfRange(String),
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

/// Rejects a missing result as `OutOfRange`, for chaining after `checked_*` arithmetic.
pub fn in_range<T>(field: &str, value: Option<T>) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::OutOfRange(field.to_string()))
}

/// Rejects negative values.
pub fn ensure_non_negative(field: &str, value: Decimal) -> Result<(), CoreError> {
    if value < Decimal::ZERO {
        return Err(CoreError::InvalidInput(
            field.to_string(),
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(())
}

/// Rejects zero and negative values.
pub fn ensure_positive(field: &str, value: Decimal) -> Result<(), CoreError> {
    if value <= Decimal::ZERO {
        return Err(CoreError::InvalidInput(
            field.to_string(),
            format!("must be greater than zero, got {}", value),
        ));
    }
    Ok(())
}

/// Rejects values outside the closed interval [0, 1].
pub fn ensure_fraction(field: &str, value: Decimal) -> Result<(), CoreError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(CoreError::InvalidInput(
            field.to_string(),
            format!("must be a fraction between 0 and 1, got {}", value),
        ));
    }
    Ok(())
}
