use crate::error::MarketError;
use crate::stats::median;
use configuration::MarketPolicy;
use core_types::error::{ensure_non_negative, ensure_positive, in_range};
use core_types::money::mean;
use core_types::{MarketObservation, MarketSnapshot, Trend};
use rust_decimal::Decimal;

/// The shortest series for which a trend can be defined.
const MIN_OBSERVATIONS: usize = 2;

/// A stateless classifier of historical sale series.
#[derive(Debug, Clone, Default)]
pub struct MarketTrendAnalyzer {
    policy: MarketPolicy,
}

impl MarketTrendAnalyzer {
    /// Creates a new `MarketTrendAnalyzer`, validating the policy first.
    pub fn new(policy: MarketPolicy) -> Result<Self, MarketError> {
        policy
            .validate()
            .map_err(|e| MarketError::InvalidPolicy(e.to_string()))?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &MarketPolicy {
        &self.policy
    }

    /// Summarises a sale series using the policy's assumed average square footage.
    pub fn analyze(&self, series: &[MarketObservation]) -> Result<MarketSnapshot, MarketError> {
        self.analyze_with_footage(series, self.policy.assumed_average_square_footage)
    }

    /// Summarises a sale series.
    ///
    /// # Arguments
    ///
    /// * `series` - At least two observations. They are stably sorted by date
    ///   before windowing, so an already-ordered series is taken as given.
    /// * `assumed_average_square_footage` - Divisor that turns the median price
    ///   into a price per square foot.
    pub fn analyze_with_footage(
        &self,
        series: &[MarketObservation],
        assumed_average_square_footage: Decimal,
    ) -> Result<MarketSnapshot, MarketError> {
        // --- 1. Validation ---
        if series.len() < MIN_OBSERVATIONS {
            tracing::warn!(observations = series.len(), "Market series too short for a trend.");
            return Err(MarketError::InsufficientData {
                required: MIN_OBSERVATIONS,
                actual: series.len(),
            });
        }
        ensure_positive("assumedAverageSquareFootage", assumed_average_square_footage)?;
        for observation in series {
            ensure_non_negative("price", observation.price)?;
        }

        // --- 2. Order by date ---
        let mut ordered: Vec<&MarketObservation> = series.iter().collect();
        ordered.sort_by_key(|observation| observation.date);
        let prices: Vec<Decimal> = ordered.iter().map(|observation| observation.price).collect();

        // --- 3. Summary statistics ---
        let insufficient = || MarketError::InsufficientData {
            required: MIN_OBSERVATIONS,
            actual: series.len(),
        };
        let median_price = median(&prices, self.policy.median).ok_or_else(insufficient)?;
        let average_days_on_market = mean(
            "daysOnMarket",
            ordered
                .iter()
                .map(|observation| Decimal::from(observation.days_on_market)),
        )?
        .ok_or_else(insufficient)?;
        let price_per_square_foot = in_range(
            "pricePerSquareFoot",
            median_price.checked_div(assumed_average_square_footage),
        )?;

        // --- 4. Trend ---
        let trend = self.classify_trend(&prices)?;

        Ok(MarketSnapshot {
            median_price,
            average_days_on_market,
            price_per_square_foot,
            inventory_count: series.len(),
            trend,
        })
    }

    /// Classifies a date-ordered price series.
    ///
    /// The last `recent_window` prices are compared against everything before
    /// them. The recent average must leave the `±trend_band` corridor around
    /// the older average to count as a move; a series with no older history is
    /// always `Stable`.
    pub fn classify_trend(&self, prices: &[Decimal]) -> Result<Trend, MarketError> {
        let split = prices.len().saturating_sub(self.policy.recent_window);
        let (older, recent) = prices.split_at(split);

        let (Some(older_avg), Some(recent_avg)) = (
            mean("olderWindowAverage", older.iter().copied())?,
            mean("recentWindowAverage", recent.iter().copied())?,
        ) else {
            tracing::debug!("MarketTrend: no older window, reporting stable");
            return Ok(Trend::Stable);
        };

        let upper = in_range(
            "upperTrendBand",
            older_avg.checked_mul(Decimal::ONE + self.policy.trend_band),
        )?;
        let lower = in_range(
            "lowerTrendBand",
            older_avg.checked_mul(Decimal::ONE - self.policy.trend_band),
        )?;

        let trend = if recent_avg > upper {
            Trend::Rising
        } else if recent_avg < lower {
            Trend::Falling
        } else {
            Trend::Stable
        };

        tracing::debug!(
            "MarketTrend: recent_avg={}, older_avg={}, band=[{}, {}], trend={}",
            recent_avg,
            older_avg,
            lower,
            upper,
            trend
        );
        Ok(trend)
    }
}
