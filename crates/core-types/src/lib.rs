pub mod enums;
pub mod error;
pub mod money;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{FactorImpact, SuggestionType, Trend};
pub use error::{CoreError, ErrorKind};
pub use structs::{
    ComparableSale, CostBreakdown, LoanTerms, MarketObservation, MarketSnapshot,
    NegotiationSuggestion, PropertyValuation, SalePrice, SubjectProperty, ValuationFactor,
};
