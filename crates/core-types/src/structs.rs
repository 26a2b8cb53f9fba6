use crate::enums::{FactorImpact, SuggestionType, Trend};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The terms of a fixed-rate loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub loan_amount: Decimal,
    /// Expressed as a fraction (0.065), never as a percentage (6.5).
    pub annual_interest_rate: Decimal,
    pub term_months: u32,
}

/// The full cost summary of a financed purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub purchase_price: Decimal,
    pub down_payment: Decimal,
    pub loan_amount: Decimal,
    pub interest_rate: Decimal,
    pub loan_term_years: u32,
    pub monthly_payment: Decimal,
    pub closing_costs: Decimal,
    pub total_cost: Decimal,
}

/// A recently sold property used as a reference point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparableSale {
    pub price: Decimal,
    pub square_footage: Decimal,
    pub bedrooms: u32,
    pub bathrooms: Decimal,
    pub year_built: i32,
    pub lot_size: Decimal,
    pub date: DateTime<Utc>,
}

/// The property being valued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectProperty {
    pub square_footage: Decimal,
    pub bedrooms: u32,
    pub bathrooms: Decimal,
    pub year_built: i32,
    pub lot_size: Decimal,
}

/// One adjustment that was applied while valuing a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationFactor {
    pub factor: String,
    pub impact: FactorImpact,
    pub weight: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValuation {
    pub estimated_value: Decimal,
    pub confidence: Decimal,
    /// Only the adjustments that actually triggered, in the order applied.
    pub factors: Vec<ValuationFactor>,
}

/// A single point of a historical sale series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketObservation {
    pub price: Decimal,
    pub days_on_market: u32,
    pub date: DateTime<Utc>,
}

/// Summary statistics and trend for a historical sale series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub median_price: Decimal,
    pub average_days_on_market: Decimal,
    pub price_per_square_foot: Decimal,
    pub inventory_count: usize,
    pub trend: Trend,
}

/// The price and date of a comparable sale, which is all the negotiation
/// advisor looks at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalePrice {
    pub price: Decimal,
    pub date: DateTime<Utc>,
}

impl From<&ComparableSale> for SalePrice {
    fn from(sale: &ComparableSale) -> Self {
        Self {
            price: sale.price,
            date: sale.date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationSuggestion {
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    pub reasoning: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub suggested_amount: Option<Decimal>,
    pub confidence: Decimal,
}
