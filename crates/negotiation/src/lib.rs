//! # Keystone Negotiation Advisor
//!
//! Recommends a negotiation posture for an offer on a listing, from the
//! listing price, the offer, comparable sales and time on market.
//!
//! The recommendation is a deterministic rule table, not a learned model:
//! guarded rules are evaluated top to bottom and the first match wins.

pub mod advisor;
pub mod error;
pub mod rules;

pub use advisor::NegotiationAdvisor;
pub use error::NegotiationError;
pub use rules::{MarketPosition, NegotiationRule, RuleId, default_rules};
