use crate::error::NegotiationError;
use configuration::NegotiationPolicy;
use core_types::error::{ensure_non_negative, ensure_positive, in_range};
use core_types::money::{mean, round_whole};
use core_types::{NegotiationSuggestion, SalePrice, SuggestionType};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Everything the rules look at, computed once per evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketPosition {
    pub listing_price: Decimal,
    pub offer_amount: Decimal,
    pub avg_comparable_price: Decimal,
    /// `offer_amount - avg_comparable_price`; negative when the offer is under market.
    pub market_difference: Decimal,
    /// `offer_amount - listing_price`; positive when the offer is over asking.
    pub price_difference: Decimal,
    pub days_on_market: u32,
}

impl MarketPosition {
    /// Validates the inputs and derives the differences the rules compare.
    pub fn new(
        listing_price: Decimal,
        offer_amount: Decimal,
        comparable_sales: &[SalePrice],
        days_on_market: u32,
    ) -> Result<Self, NegotiationError> {
        if comparable_sales.is_empty() {
            return Err(NegotiationError::InsufficientComparables);
        }
        ensure_non_negative("listingPrice", listing_price)?;
        ensure_non_negative("offerAmount", offer_amount)?;
        for sale in comparable_sales {
            ensure_positive("comparable price", sale.price)?;
        }

        let avg_comparable_price =
            mean("avgComparablePrice", comparable_sales.iter().map(|sale| sale.price))?
                .ok_or(NegotiationError::InsufficientComparables)?;

        Ok(Self {
            listing_price,
            offer_amount,
            avg_comparable_price,
            market_difference: offer_amount - avg_comparable_price,
            price_difference: offer_amount - listing_price,
            days_on_market,
        })
    }
}

/// Identifies a rule in the table, for logging and auditing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    /// Offer under market on a listing that has sat too long.
    StaleOverpricedListing,
    /// Offer over asking yet still under market.
    AboveListingBelowMarket,
    /// Catch-all counter based on the listing price.
    DefaultCounter,
    /// A rule supplied by the caller, named however the caller likes.
    #[serde(untagged)]
    Custom(&'static str),
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RuleId::StaleOverpricedListing => "stale_overpriced_listing",
            RuleId::AboveListingBelowMarket => "above_listing_below_market",
            RuleId::DefaultCounter => "default_counter",
            RuleId::Custom(name) => *name,
        };
        f.write_str(s)
    }
}

pub type Guard = fn(&MarketPosition, &NegotiationPolicy) -> bool;
pub type Outcome =
    fn(&MarketPosition, &NegotiationPolicy) -> Result<NegotiationSuggestion, NegotiationError>;

/// A guarded rule: when `guard` holds, `outcome` is the recommendation.
#[derive(Clone, Copy)]
pub struct NegotiationRule {
    pub id: RuleId,
    pub guard: Guard,
    pub outcome: Outcome,
}

impl fmt::Debug for NegotiationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NegotiationRule").field("id", &self.id).finish()
    }
}

/// The baseline rule table, in priority order.
pub fn default_rules() -> Vec<NegotiationRule> {
    vec![
        NegotiationRule {
            id: RuleId::StaleOverpricedListing,
            guard: |p, policy| {
                p.market_difference < Decimal::ZERO && p.days_on_market > policy.stale_listing_days
            },
            outcome: |p, policy| {
                let amount = in_range(
                    "counter offer",
                    p.avg_comparable_price.checked_mul(policy.market_counter_ratio),
                )?;
                Ok(NegotiationSuggestion {
                    suggestion_type: SuggestionType::CounterOffer,
                    reasoning: "Comparable sales suggest the property is overpriced, and it has \
                                been on the market for an extended time."
                        .to_string(),
                    suggested_amount: Some(round_whole(amount)),
                    confidence: policy.stale_counter_confidence,
                })
            },
        },
        NegotiationRule {
            id: RuleId::AboveListingBelowMarket,
            guard: |p, _| p.price_difference > Decimal::ZERO && p.market_difference < Decimal::ZERO,
            outcome: |_, policy| {
                Ok(NegotiationSuggestion {
                    suggestion_type: SuggestionType::Accept,
                    reasoning: "The offer exceeds the listing price but remains below market value."
                        .to_string(),
                    suggested_amount: None,
                    confidence: policy.accept_confidence,
                })
            },
        },
        NegotiationRule {
            id: RuleId::DefaultCounter,
            guard: |_, _| true,
            outcome: |p, policy| {
                let amount = in_range(
                    "counter offer",
                    p.listing_price.checked_mul(policy.listing_counter_ratio),
                )?;
                Ok(NegotiationSuggestion {
                    suggestion_type: SuggestionType::CounterOffer,
                    reasoning: "Default counter-offer based on the listing price.".to_string(),
                    suggested_amount: Some(round_whole(amount)),
                    confidence: policy.default_counter_confidence,
                })
            },
        },
    ]
}
