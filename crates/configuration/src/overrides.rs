use crate::error::ConfigError;
use crate::settings::Config;
use rust_decimal::Decimal;

/// Per-invocation adjustments to the loaded policy.
///
/// With the `clap` feature enabled this doubles as a set of global command-line
/// flags, so a binary can flatten it straight into its parser.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct PolicyOverrides {
    /// Closing costs as a fraction of the purchase price (e.g. 0.025).
    #[cfg_attr(feature = "clap", arg(long, global = true))]
    pub closing_cost_rate: Option<Decimal>,

    /// Half-width of the trend noise band (e.g. 0.05 for ±5%).
    #[cfg_attr(feature = "clap", arg(long, global = true))]
    pub trend_band: Option<Decimal>,

    /// Square footage used to derive the market price per square foot.
    #[cfg_attr(feature = "clap", arg(long, global = true))]
    pub assumed_square_footage: Option<Decimal>,

    /// Fixed confidence reported with every valuation.
    #[cfg_attr(feature = "clap", arg(long, global = true))]
    pub valuation_confidence: Option<Decimal>,
}

impl Config {
    /// Returns a copy of this configuration with the overrides applied and
    /// re-validated.
    pub fn apply_overrides(&self, overrides: &PolicyOverrides) -> Result<Config, ConfigError> {
        let mut merged = self.clone();
        if let Some(rate) = overrides.closing_cost_rate {
            merged.mortgage.closing_cost_rate = rate;
        }
        if let Some(band) = overrides.trend_band {
            merged.market.trend_band = band;
        }
        if let Some(sqft) = overrides.assumed_square_footage {
            merged.market.assumed_average_square_footage = sqft;
        }
        if let Some(confidence) = overrides.valuation_confidence {
            merged.valuation.confidence = confidence;
        }
        merged.validate()?;
        Ok(merged)
    }
}
