use configuration::{Adjustment, AdjustmentRule};
use core_types::error::in_range;
use core_types::{CoreError, FactorImpact, SubjectProperty, ValuationFactor};
use rust_decimal::Decimal;

/// An ordered sequence of multiplicative adjustments.
///
/// Each step whose rule matches the subject multiplies the running value and
/// records a `ValuationFactor`. Steps compound: the second step scales the
/// output of the first, not the original base.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustmentPipeline {
    steps: Vec<Adjustment>,
}

impl AdjustmentPipeline {
    pub fn new(steps: Vec<Adjustment>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Adjustment] {
        &self.steps
    }

    /// Runs every step against `subject`, returning the adjusted value and the
    /// factors that fired, in the order they were applied.
    pub fn apply(
        &self,
        base: Decimal,
        subject: &SubjectProperty,
        current_year: i32,
    ) -> Result<(Decimal, Vec<ValuationFactor>), CoreError> {
        let mut value = base;
        let mut factors = Vec::new();

        for step in &self.steps {
            if !rule_matches(&step.rule, subject, current_year) {
                continue;
            }
            value = in_range(&step.label, value.checked_mul(step.multiplier))?;
            tracing::debug!("Valuation: applied '{}' x{} -> {}", step.label, step.multiplier, value);
            factors.push(ValuationFactor {
                factor: step.label.clone(),
                impact: FactorImpact::from_multiplier(step.multiplier),
                weight: (step.multiplier - Decimal::ONE).abs(),
            });
        }

        Ok((value, factors))
    }
}

/// Whether `rule` fires for `subject`. All thresholds are strict.
///
/// An age that cannot be represented never fires the age rule.
pub fn rule_matches(rule: &AdjustmentRule, subject: &SubjectProperty, current_year: i32) -> bool {
    match *rule {
        AdjustmentRule::BedroomsAbove(limit) => subject.bedrooms > limit,
        AdjustmentRule::BathroomsAbove(limit) => subject.bathrooms > limit,
        AdjustmentRule::AgeAbove(years) => current_year
            .checked_sub(subject.year_built)
            .is_some_and(|age| age > years),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use configuration::ValuationPolicy;
    use rust_decimal_macros::dec;

    fn subject(bedrooms: u32, bathrooms: Decimal, year_built: i32) -> SubjectProperty {
        SubjectProperty {
            square_footage: dec!(1000),
            bedrooms,
            bathrooms,
            year_built,
            lot_size: dec!(5000),
        }
    }

    fn default_pipeline() -> AdjustmentPipeline {
        AdjustmentPipeline::new(ValuationPolicy::default().adjustments)
    }

    #[test]
    fn thresholds_are_strict() {
        let (value, factors) = default_pipeline()
            .apply(dec!(100000), &subject(3, dec!(2), 2004), 2024)
            .unwrap();
        assert_eq!(value, dec!(100000));
        assert!(factors.is_empty());
    }

    #[test]
    fn steps_compound_on_running_value() {
        let (value, factors) = default_pipeline()
            .apply(dec!(100000), &subject(4, dec!(2.5), 2024), 2024)
            .unwrap();
        assert_eq!(value, dec!(108150));
        assert_eq!(factors.len(), 2);
    }

    #[test]
    fn age_factor_is_negative_with_positive_weight() {
        let (_, factors) = default_pipeline()
            .apply(dec!(100000), &subject(2, dec!(1), 1990), 2024)
            .unwrap();
        assert_eq!(
            factors,
            vec![ValuationFactor {
                factor: "Older property".to_string(),
                impact: FactorImpact::Negative,
                weight: dec!(0.05),
            }]
        );
    }

    #[test]
    fn custom_pipeline_runs_in_given_order() {
        let pipeline = AdjustmentPipeline::new(vec![
            Adjustment {
                label: "Historic".to_string(),
                rule: AdjustmentRule::AgeAbove(100),
                multiplier: dec!(1.10),
            },
            Adjustment {
                label: "Compact".to_string(),
                rule: AdjustmentRule::BedroomsAbove(0),
                multiplier: dec!(1),
            },
        ]);
        let (value, factors) = pipeline
            .apply(dec!(200000), &subject(1, dec!(1), 1900), 2024)
            .unwrap();
        assert_eq!(value, dec!(220000));
        assert_eq!(factors[0].factor, "Historic");
        assert_eq!(factors[1].impact, FactorImpact::Neutral);
        assert_eq!(factors[1].weight, Decimal::ZERO);
    }

    #[test]
    fn unrepresentable_age_does_not_fire() {
        let rule = AdjustmentRule::AgeAbove(20);
        assert!(!rule_matches(&rule, &subject(3, dec!(2), i32::MIN), 2024));
        assert!(rule_matches(&rule, &subject(3, dec!(2), 1990), 2024));
    }

    #[test]
    fn adjusted_value_past_decimal_range_names_the_step() {
        let err = default_pipeline()
            .apply(Decimal::MAX, &subject(4, dec!(2), 2024), 2024)
            .unwrap_err();
        assert_eq!(err, CoreError::OutOfRange("Extra bedrooms".to_string()));
    }
}
