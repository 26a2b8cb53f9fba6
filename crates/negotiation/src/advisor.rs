use crate::error::NegotiationError;
use crate::rules::{MarketPosition, NegotiationRule, RuleId, default_rules};
use configuration::NegotiationPolicy;
use core_types::{NegotiationSuggestion, SalePrice};
use rust_decimal::Decimal;

/// Evaluates an ordered rule table against an offer.
///
/// Rules are tried top to bottom and the first whose guard holds decides the
/// recommendation; later rules are never consulted.
#[derive(Debug, Clone)]
pub struct NegotiationAdvisor {
    policy: NegotiationPolicy,
    rules: Vec<NegotiationRule>,
}

impl NegotiationAdvisor {
    /// Creates a new `NegotiationAdvisor` with the baseline rule table.
    pub fn new(policy: NegotiationPolicy) -> Result<Self, NegotiationError> {
        Self::with_rules(policy, default_rules())
    }

    /// Creates an advisor with a custom rule table. The table should end in a
    /// rule whose guard always holds.
    pub fn with_rules(
        policy: NegotiationPolicy,
        rules: Vec<NegotiationRule>,
    ) -> Result<Self, NegotiationError> {
        policy
            .validate()
            .map_err(|e| NegotiationError::InvalidParameters(e.to_string()))?;
        if rules.is_empty() {
            return Err(NegotiationError::InvalidParameters(
                "the rule table is empty".to_string(),
            ));
        }
        Ok(Self { policy, rules })
    }

    pub fn rules(&self) -> &[NegotiationRule] {
        &self.rules
    }

    /// Recommends how to respond to `offer_amount` on a listing.
    pub fn suggest_strategy(
        &self,
        listing_price: Decimal,
        offer_amount: Decimal,
        comparable_sales: &[SalePrice],
        days_on_market: u32,
    ) -> Result<NegotiationSuggestion, NegotiationError> {
        let position =
            MarketPosition::new(listing_price, offer_amount, comparable_sales, days_on_market)?;
        let (_, suggestion) = self.evaluate(&position)?;
        Ok(suggestion)
    }

    /// Runs the rule table, returning the rule that fired with its suggestion.
    pub fn evaluate(
        &self,
        position: &MarketPosition,
    ) -> Result<(RuleId, NegotiationSuggestion), NegotiationError> {
        let rule = self
            .rules
            .iter()
            .find(|rule| (rule.guard)(position, &self.policy))
            .ok_or(NegotiationError::NoRuleMatched)?;

        let suggestion = (rule.outcome)(position, &self.policy)?;
        tracing::debug!(
            "Negotiation: rule={}, market_diff={}, price_diff={}, days={}, type={}, amount={:?}",
            rule.id,
            position.market_difference,
            position.price_difference,
            position.days_on_market,
            suggestion.suggestion_type,
            suggestion.suggested_amount
        );
        Ok((rule.id, suggestion))
    }
}

impl Default for NegotiationAdvisor {
    fn default() -> Self {
        Self {
            policy: NegotiationPolicy::default(),
            rules: default_rules(),
        }
    }
}
