use core_types::{CoreError, ErrorKind};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NegotiationError {
    #[error("At least one comparable sale is required to judge an offer.")]
    InsufficientComparables,

    #[error(transparent)]
    InvalidInput(#[from] CoreError),

    #[error("Negotiation parameters from configuration are invalid: {0}")]
    InvalidParameters(String),

    #[error("No negotiation rule matched; the rule table needs a catch-all rule.")]
    NoRuleMatched,
}

impl NegotiationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NegotiationError::InsufficientComparables => ErrorKind::InsufficientComparables,
            NegotiationError::InvalidInput(_)
            | NegotiationError::InvalidParameters(_)
            | NegotiationError::NoRuleMatched => ErrorKind::InvalidInput,
        }
    }
}
