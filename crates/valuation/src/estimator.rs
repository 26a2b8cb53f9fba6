use crate::confidence::{ConfidenceModel, FixedConfidence};
use crate::error::ValuationError;
use crate::pipeline::AdjustmentPipeline;
use configuration::ValuationPolicy;
use core_types::error::{ensure_non_negative, ensure_positive, in_range};
use core_types::money::{mean, round_whole};
use core_types::{ComparableSale, CoreError, PropertyValuation, SubjectProperty};
use rust_decimal::Decimal;

/// Estimates fair value from comparable sales.
#[derive(Debug)]
pub struct ValuationEstimator {
    pipeline: AdjustmentPipeline,
    confidence: Box<dyn ConfidenceModel>,
}

impl ValuationEstimator {
    /// Creates a new `ValuationEstimator` from a validated policy, reporting the
    /// policy's fixed confidence.
    pub fn new(policy: ValuationPolicy) -> Result<Self, ValuationError> {
        policy
            .validate()
            .map_err(|e| ValuationError::InvalidPolicy(e.to_string()))?;
        Ok(Self {
            pipeline: AdjustmentPipeline::new(policy.adjustments),
            confidence: Box::new(FixedConfidence(policy.confidence)),
        })
    }

    /// Replaces the confidence model.
    pub fn with_confidence_model(mut self, model: Box<dyn ConfidenceModel>) -> Self {
        self.confidence = model;
        self
    }

    pub fn pipeline(&self) -> &AdjustmentPipeline {
        &self.pipeline
    }

    /// Estimates the value of `subject`.
    ///
    /// The base estimate is the subject's square footage times the mean price
    /// per square foot across `comparables`. The adjustment pipeline is then run
    /// on that base and the result rounded to the nearest whole unit.
    ///
    /// `current_year` is the reference point for property age; passing it in
    /// keeps the estimate independent of the clock.
    pub fn estimate_value(
        &self,
        subject: &SubjectProperty,
        comparables: &[ComparableSale],
        current_year: i32,
    ) -> Result<PropertyValuation, ValuationError> {
        // --- 1. Validation ---
        if comparables.is_empty() {
            tracing::warn!("Valuation requested with no comparable sales.");
            return Err(ValuationError::InsufficientComparables(
                "no comparable sales were supplied".to_string(),
            ));
        }
        if let Some(index) = comparables
            .iter()
            .position(|sale| sale.square_footage <= Decimal::ZERO)
        {
            return Err(ValuationError::InsufficientComparables(format!(
                "comparable #{} has non-positive square footage",
                index
            )));
        }
        for sale in comparables {
            ensure_positive("comparable price", sale.price)?;
        }
        ensure_non_negative("squareFootage", subject.square_footage)?;
        if current_year.checked_sub(subject.year_built).is_none() {
            return Err(CoreError::InvalidInput(
                "yearBuilt".to_string(),
                format!("{} is too far from {}", subject.year_built, current_year),
            )
            .into());
        }

        // --- 2. Base estimate ---
        let price_per_sqft = comparables
            .iter()
            .map(|sale| {
                in_range("comparable price per sqft", sale.price.checked_div(sale.square_footage))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let avg_price_per_sqft = mean("avgPricePerSqFt", price_per_sqft)?.ok_or_else(|| {
            ValuationError::InsufficientComparables("no comparable sales were supplied".to_string())
        })?;
        let base = in_range(
            "base estimate",
            subject.square_footage.checked_mul(avg_price_per_sqft),
        )?;
        tracing::debug!(
            "Valuation: {} comparables, avg_price_per_sqft={}, base={}",
            comparables.len(),
            avg_price_per_sqft,
            base
        );

        // --- 3. Adjustments ---
        let (adjusted, factors) = self.pipeline.apply(base, subject, current_year)?;

        Ok(PropertyValuation {
            estimated_value: round_whole(adjusted),
            confidence: self.confidence.confidence(subject, comparables),
            factors,
        })
    }
}

impl Default for ValuationEstimator {
    fn default() -> Self {
        let policy = ValuationPolicy::default();
        Self {
            pipeline: AdjustmentPipeline::new(policy.adjustments),
            confidence: Box::new(FixedConfidence(policy.confidence)),
        }
    }
}
