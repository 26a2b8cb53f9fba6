use core_types::{CoreError, ErrorKind};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MortgageError {
    #[error(transparent)]
    InvalidInput(#[from] CoreError),

    #[error("Down payment ({down_payment}) cannot exceed the purchase price ({purchase_price}).")]
    DownPaymentExceedsPrice {
        down_payment: Decimal,
        purchase_price: Decimal,
    },

    #[error("Loan parameters are outside the computable range: {0}")]
    OutOfRange(String),

    #[error("Mortgage policy is invalid: {0}")]
    InvalidPolicy(String),
}

impl MortgageError {
    /// Every mortgage failure is a malformed input; there is nothing to retry.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}
