use core_types::{CoreError, ErrorKind};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketError {
    #[error("Not enough data to classify a trend: need at least {required} observations, got {actual}.")]
    InsufficientData { required: usize, actual: usize },

    #[error(transparent)]
    InvalidInput(#[from] CoreError),

    #[error("Market policy is invalid: {0}")]
    InvalidPolicy(String),
}

impl MarketError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MarketError::InsufficientData { .. } => ErrorKind::InsufficientData,
            MarketError::InvalidInput(_) | MarketError::InvalidPolicy(_) => ErrorKind::InvalidInput,
        }
    }
}
