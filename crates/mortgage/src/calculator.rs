use crate::amortization::compute_monthly_payment;
use crate::error::MortgageError;
use configuration::MortgagePolicy;
use core_types::CostBreakdown;
use core_types::error::{ensure_fraction, ensure_non_negative};
use rust_decimal::Decimal;

const MONTHS_PER_YEAR: u32 = 12;

/// Builds transaction cost summaries under a given mortgage policy.
#[derive(Debug, Clone, Default)]
pub struct MortgageCalculator {
    policy: MortgagePolicy,
}

impl MortgageCalculator {
    /// Creates a new `MortgageCalculator`, validating the policy first.
    pub fn new(policy: MortgagePolicy) -> Result<Self, MortgageError> {
        policy
            .validate()
            .map_err(|e| MortgageError::InvalidPolicy(e.to_string()))?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &MortgagePolicy {
        &self.policy
    }

    /// Combines price, down payment, rate and term into a full cost summary.
    ///
    /// `loan_term_years` falls back to the policy's default term (30 years
    /// unless configured otherwise). Closing costs are the policy's fixed
    /// fraction of the purchase price and are not financed.
    pub fn build_cost_breakdown(
        &self,
        purchase_price: Decimal,
        down_payment: Decimal,
        interest_rate: Decimal,
        loan_term_years: Option<u32>,
    ) -> Result<CostBreakdown, MortgageError> {
        ensure_non_negative("purchasePrice", purchase_price)?;
        ensure_non_negative("downPayment", down_payment)?;
        ensure_fraction("interestRate", interest_rate)?;
        if down_payment > purchase_price {
            tracing::warn!(
                %down_payment,
                %purchase_price,
                "Rejected cost breakdown: down payment exceeds price."
            );
            return Err(MortgageError::DownPaymentExceedsPrice {
                down_payment,
                purchase_price,
            });
        }

        let loan_term_years = loan_term_years.unwrap_or(self.policy.default_loan_term_years);
        let term_months = loan_term_years.checked_mul(MONTHS_PER_YEAR).ok_or_else(|| {
            MortgageError::OutOfRange(format!("a {} year term is too long", loan_term_years))
        })?;

        let loan_amount = purchase_price - down_payment;
        let monthly_payment = compute_monthly_payment(loan_amount, interest_rate, term_months)?;
        let closing_costs = purchase_price
            .checked_mul(self.policy.closing_cost_rate)
            .ok_or_else(|| MortgageError::OutOfRange("closing costs".to_string()))?;
        let total_cost = purchase_price
            .checked_add(closing_costs)
            .ok_or_else(|| MortgageError::OutOfRange("total cost".to_string()))?;

        tracing::debug!(
            "CostBreakdown: price={}, loan={}, payment={}, closing={}",
            purchase_price,
            loan_amount,
            monthly_payment,
            closing_costs
        );

        Ok(CostBreakdown {
            purchase_price,
            down_payment,
            loan_amount,
            interest_rate,
            loan_term_years,
            monthly_payment,
            closing_costs,
            total_cost,
        })
    }

    /// Whether a down payment reaches the policy's minimum share of the price.
    ///
    /// Advisory only: `build_cost_breakdown` accepts any down payment between
    /// zero and the full price.
    pub fn meets_minimum_down_payment(&self, purchase_price: Decimal, down_payment: Decimal) -> bool {
        purchase_price
            .checked_mul(self.policy.min_down_payment_pct)
            .is_some_and(|minimum| down_payment >= minimum)
    }
}
