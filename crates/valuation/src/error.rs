use core_types::{CoreError, ErrorKind};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValuationError {
    #[error("Not enough comparable sales to estimate value: {0}")]
    InsufficientComparables(String),

    #[error(transparent)]
    InvalidInput(#[from] CoreError),

    #[error("Valuation policy is invalid: {0}")]
    InvalidPolicy(String),
}

impl ValuationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValuationError::InsufficientComparables(_) => ErrorKind::InsufficientComparables,
            ValuationError::InvalidInput(_) | ValuationError::InvalidPolicy(_) => {
                ErrorKind::InvalidInput
            }
        }
    }
}
