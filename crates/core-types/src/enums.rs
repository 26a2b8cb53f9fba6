use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Direction of a price series, as classified by the market trend analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Falling,
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Trend::Rising => "rising",
            Trend::Falling => "falling",
            Trend::Stable => "stable",
        };
        f.write_str(s)
    }
}

/// How a valuation adjustment moved the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorImpact {
    Positive,
    Negative,
    Neutral,
}

impl FactorImpact {
    /// Classifies a multiplicative adjustment: above one raises the value,
    /// below one lowers it.
    pub fn from_multiplier(multiplier: Decimal) -> Self {
        match multiplier.cmp(&Decimal::ONE) {
            Ordering::Greater => FactorImpact::Positive,
            Ordering::Less => FactorImpact::Negative,
            Ordering::Equal => FactorImpact::Neutral,
        }
    }
}

impl fmt::Display for FactorImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FactorImpact::Positive => "positive",
            FactorImpact::Negative => "negative",
            FactorImpact::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// The negotiation posture recommended to the party reviewing an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionType {
    CounterOffer,
    Accept,
    Reject,
    Wait,
}

impl fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SuggestionType::CounterOffer => "counter_offer",
            SuggestionType::Accept => "accept",
            SuggestionType::Reject => "reject",
            SuggestionType::Wait => "wait",
        };
        f.write_str(s)
    }
}
