use core_types::{ComparableSale, SubjectProperty};
use rust_decimal::Decimal;
use std::fmt::Debug;

/// Decides how much trust to place in a valuation.
///
/// The `Send + Sync` bounds let one estimator be shared across threads.
pub trait ConfidenceModel: Debug + Send + Sync {
    /// Returns a confidence in `[0, 1]` for valuing `subject` from `comparables`.
    ///
    /// Only called once the inputs have passed validation, so `comparables` is
    /// never empty.
    fn confidence(&self, subject: &SubjectProperty, comparables: &[ComparableSale]) -> Decimal;
}

/// Reports the same confidence for every valuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedConfidence(pub Decimal);

impl ConfidenceModel for FixedConfidence {
    fn confidence(&self, _subject: &SubjectProperty, _comparables: &[ComparableSale]) -> Decimal {
        self.0
    }
}
