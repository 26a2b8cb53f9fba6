use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifetime totals of a fixed-rate loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub monthly_payment: Decimal,
    /// The last payment, which absorbs the cents left over from rounding.
    pub final_payment: Decimal,
    pub total_paid: Decimal,
    pub total_interest: Decimal,
}

/// One period of an amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based period number.
    pub period: u32,
    pub payment: Decimal,
    pub principal: Decimal,
    pub interest: Decimal,
    /// Outstanding balance after this payment.
    pub balance: Decimal,
}
