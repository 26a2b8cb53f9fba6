use crate::error::ConfigError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The root configuration structure for the whole engine.
///
/// Every section falls back to the baseline policy when it is omitted, so an
/// empty file (or no file at all) reproduces the stock behaviour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mortgage: MortgagePolicy,
    pub market: MarketPolicy,
    pub valuation: ValuationPolicy,
    pub negotiation: NegotiationPolicy,
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates every section, stopping at the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.mortgage.validate()?;
        self.market.validate()?;
        self.valuation.validate()?;
        self.negotiation.validate()?;
        Ok(())
    }
}

/// Parameters for financing and closing-cost estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MortgagePolicy {
    /// Closing costs as a fraction of the purchase price. 0.03 is 3%.
    pub closing_cost_rate: Decimal,
    pub default_loan_term_years: u32,
    /// Used by callers that don't quote a rate of their own.
    pub default_interest_rate: Decimal,
    /// Smallest down payment, as a fraction of price, that lenders accept.
    pub min_down_payment_pct: Decimal,
}

impl Default for MortgagePolicy {
    fn default() -> Self {
        Self {
            closing_cost_rate: dec!(0.03),
            default_loan_term_years: 30,
            default_interest_rate: dec!(0.065),
            min_down_payment_pct: dec!(0.05),
        }
    }
}

impl MortgagePolicy {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_fraction("mortgage.closing_cost_rate", self.closing_cost_rate)?;
        check_fraction("mortgage.default_interest_rate", self.default_interest_rate)?;
        check_fraction("mortgage.min_down_payment_pct", self.min_down_payment_pct)?;
        if self.default_loan_term_years == 0 {
            return Err(ConfigError::ValidationError(
                "mortgage.default_loan_term_years must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Which element represents the median of an even-length series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedianPolicy {
    /// The lower of the two middle elements: `[100, 200, 300, 400]` gives 200.
    #[default]
    LowerMiddle,
    /// The upper of the two middle elements: `[100, 200, 300, 400]` gives 300.
    UpperMiddle,
    /// The mean of the two middle elements: `[100, 200, 300, 400]` gives 250.
    Mean,
}

/// Parameters for trend classification of a sale series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketPolicy {
    /// How many of the most recent points form the "recent" window.
    pub recent_window: usize,
    /// Half-width of the noise band. 0.05 means a move must exceed ±5% to count.
    pub trend_band: Decimal,
    /// Divisor used to turn the median price into a price per square foot.
    pub assumed_average_square_footage: Decimal,
    pub median: MedianPolicy,
}

impl Default for MarketPolicy {
    fn default() -> Self {
        Self {
            recent_window: 6,
            trend_band: dec!(0.05),
            assumed_average_square_footage: dec!(1500),
            median: MedianPolicy::LowerMiddle,
        }
    }
}

impl MarketPolicy {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recent_window == 0 {
            return Err(ConfigError::ValidationError(
                "market.recent_window must be at least 1".to_string(),
            ));
        }
        if self.trend_band < Decimal::ZERO || self.trend_band >= Decimal::ONE {
            return Err(ConfigError::ValidationError(format!(
                "market.trend_band must be in [0, 1), got {}",
                self.trend_band
            )));
        }
        if self.assumed_average_square_footage <= Decimal::ZERO {
            return Err(ConfigError::ValidationError(
                "market.assumed_average_square_footage must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// The predicate half of a valuation adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentRule {
    /// Fires when the subject has strictly more bedrooms than this.
    BedroomsAbove(u32),
    /// Fires when the subject has strictly more bathrooms than this.
    BathroomsAbove(Decimal),
    /// Fires when the subject is strictly older than this many years.
    AgeAbove(i32),
}

/// One step of the multiplicative valuation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub label: String,
    pub rule: AdjustmentRule,
    pub multiplier: Decimal,
}

/// Parameters for comparable-based valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationPolicy {
    pub confidence: Decimal,
    /// Applied in order, each on the running value.
    pub adjustments: Vec<Adjustment>,
}

impl Default for ValuationPolicy {
    fn default() -> Self {
        Self {
            confidence: dec!(0.75),
            adjustments: vec![
                Adjustment {
                    label: "Extra bedrooms".to_string(),
                    rule: AdjustmentRule::BedroomsAbove(3),
                    multiplier: dec!(1.05),
                },
                Adjustment {
                    label: "Extra bathrooms".to_string(),
                    rule: AdjustmentRule::BathroomsAbove(dec!(2)),
                    multiplier: dec!(1.03),
                },
                Adjustment {
                    label: "Older property".to_string(),
                    rule: AdjustmentRule::AgeAbove(20),
                    multiplier: dec!(0.95),
                },
            ],
        }
    }
}

impl ValuationPolicy {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_fraction("valuation.confidence", self.confidence)?;
        for adjustment in &self.adjustments {
            if adjustment.multiplier <= Decimal::ZERO {
                return Err(ConfigError::ValidationError(format!(
                    "valuation adjustment '{}' has a non-positive multiplier {}",
                    adjustment.label, adjustment.multiplier
                )));
            }
            if adjustment.label.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "valuation adjustments must have a label".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Parameters for the negotiation rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NegotiationPolicy {
    /// A listing on the market longer than this many days is considered stale.
    pub stale_listing_days: u32,
    /// Counter at this fraction of the average comparable price when the listing is stale.
    pub market_counter_ratio: Decimal,
    /// Counter at this fraction of the listing price otherwise.
    pub listing_counter_ratio: Decimal,
    pub stale_counter_confidence: Decimal,
    pub accept_confidence: Decimal,
    pub default_counter_confidence: Decimal,
}

impl Default for NegotiationPolicy {
    fn default() -> Self {
        Self {
            stale_listing_days: 30,
            market_counter_ratio: dec!(0.95),
            listing_counter_ratio: dec!(0.98),
            stale_counter_confidence: dec!(0.8),
            accept_confidence: dec!(0.9),
            default_counter_confidence: dec!(0.6),
        }
    }
}

impl NegotiationPolicy {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("negotiation.stale_counter_confidence", self.stale_counter_confidence),
            ("negotiation.accept_confidence", self.accept_confidence),
            ("negotiation.default_counter_confidence", self.default_counter_confidence),
        ] {
            check_fraction(field, value)?;
        }
        for (field, value) in [
            ("negotiation.market_counter_ratio", self.market_counter_ratio),
            ("negotiation.listing_counter_ratio", self.listing_counter_ratio),
        ] {
            if value <= Decimal::ZERO {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be greater than 0, got {}",
                    field, value
                )));
            }
        }
        Ok(())
    }
}

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, used when `RUST_LOG` is not set.
    pub level: String,
    /// When set, logs are also written to a daily-rolling file in this directory.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

fn check_fraction(field: &str, value: Decimal) -> Result<(), ConfigError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(ConfigError::ValidationError(format!(
            "{} must be between 0 and 1, got {}",
            field, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn default_adjustments_run_bedrooms_then_bathrooms_then_age() {
        let labels: Vec<_> = ValuationPolicy::default()
            .adjustments
            .into_iter()
            .map(|a| a.label)
            .collect();
        assert_eq!(labels, ["Extra bedrooms", "Extra bathrooms", "Older property"]);
    }

    #[test]
    fn rejects_percentage_style_closing_rate() {
        let mut config = Config::default();
        config.mortgage.closing_cost_rate = dec!(3);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(msg)) if msg.contains("closing_cost_rate")
        ));
    }

    #[test]
    fn rejects_empty_recent_window() {
        let mut config = Config::default();
        config.market.recent_window = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_multiplier() {
        let mut config = Config::default();
        config.valuation.adjustments[0].multiplier = Decimal::ZERO;
        assert!(config.validate().is_err());
    }
}
