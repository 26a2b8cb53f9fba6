use crate::error::MortgageError;
use crate::report::{LoanSummary, ScheduleEntry};
use core_types::error::{ensure_fraction, ensure_non_negative};
use core_types::money::round_currency;
use core_types::{CoreError, LoanTerms};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Computes the fixed periodic payment that fully repays a loan.
///
/// Uses the standard annuity formula
/// `P · r · (1 + r)^n / ((1 + r)^n − 1)` with `r = annual_interest_rate / 12`.
/// A zero rate is handled as the limit of that formula, `P / n`.
/// The result is rounded half-up to the cent.
pub fn compute_monthly_payment(
    loan_amount: Decimal,
    annual_interest_rate: Decimal,
    term_months: u32,
) -> Result<Decimal, MortgageError> {
    validate_terms(loan_amount, annual_interest_rate, term_months)?;
    let payment = exact_payment(loan_amount, annual_interest_rate, term_months)?;
    tracing::debug!(
        "Amortization: loan={}, rate={}, months={}, payment={}",
        loan_amount,
        annual_interest_rate,
        term_months,
        payment
    );
    Ok(round_currency(payment))
}

/// Produces the period-by-period breakdown of a loan.
///
/// Interest is charged on the outstanding balance and rounded to the cent each
/// period. The final period repays whatever balance remains, so the schedule
/// always closes at exactly zero.
pub fn amortization_schedule(terms: &LoanTerms) -> Result<Vec<ScheduleEntry>, MortgageError> {
    let payment = compute_monthly_payment(
        terms.loan_amount,
        terms.annual_interest_rate,
        terms.term_months,
    )?;
    Ok(build_schedule(terms, payment))
}

/// Lifetime totals of a loan, derived from its schedule.
pub fn summarize_loan(terms: &LoanTerms) -> Result<LoanSummary, MortgageError> {
    let monthly_payment = compute_monthly_payment(
        terms.loan_amount,
        terms.annual_interest_rate,
        terms.term_months,
    )?;
    let schedule = build_schedule(terms, monthly_payment);

    let total_interest = schedule
        .iter()
        .try_fold(Decimal::ZERO, |sum, entry| sum.checked_add(entry.interest))
        .ok_or_else(|| MortgageError::OutOfRange("total interest".to_string()))?;
    let total_paid = terms
        .loan_amount
        .checked_add(total_interest)
        .ok_or_else(|| MortgageError::OutOfRange("total paid".to_string()))?;
    let final_payment = schedule
        .last()
        .map(|entry| entry.payment)
        .unwrap_or(monthly_payment);

    Ok(LoanSummary {
        monthly_payment,
        final_payment,
        total_paid,
        total_interest,
    })
}

fn validate_terms(
    loan_amount: Decimal,
    annual_interest_rate: Decimal,
    term_months: u32,
) -> Result<(), MortgageError> {
    ensure_non_negative("loanAmount", loan_amount)?;
    ensure_fraction("annualInterestRate", annual_interest_rate)?;
    if term_months == 0 {
        return Err(CoreError::InvalidInput(
            "termMonths".to_string(),
            "must be at least one month".to_string(),
        )
        .into());
    }
    Ok(())
}

fn exact_payment(
    loan_amount: Decimal,
    annual_interest_rate: Decimal,
    term_months: u32,
) -> Result<Decimal, MortgageError> {
    let periods = Decimal::from(term_months);
    if annual_interest_rate.is_zero() {
        return Ok(loan_amount / periods);
    }

    let monthly_rate = annual_interest_rate / MONTHS_PER_YEAR;
    let growth = (Decimal::ONE + monthly_rate)
        .checked_powu(u64::from(term_months))
        .ok_or_else(|| out_of_range(annual_interest_rate, term_months))?;

    let denominator = growth - Decimal::ONE;
    if denominator.is_zero() {
        // Rate too small to register at 28 digits: same limit as a zero rate.
        return Ok(loan_amount / periods);
    }

    loan_amount
        .checked_mul(monthly_rate)
        .and_then(|v| v.checked_mul(growth))
        .and_then(|v| v.checked_div(denominator))
        .ok_or_else(|| out_of_range(annual_interest_rate, term_months))
}

fn build_schedule(terms: &LoanTerms, payment: Decimal) -> Vec<ScheduleEntry> {
    let monthly_rate = terms.annual_interest_rate / MONTHS_PER_YEAR;
    let mut balance = terms.loan_amount;
    let mut schedule = Vec::with_capacity(terms.term_months as usize);

    for period in 1..=terms.term_months {
        let interest = round_currency(balance * monthly_rate);
        let mut principal = payment - interest;
        if period == terms.term_months || principal > balance {
            principal = balance;
        }
        balance -= principal;

        schedule.push(ScheduleEntry {
            period,
            payment: principal + interest,
            principal,
            interest,
            balance,
        });
    }

    schedule
}

fn out_of_range(annual_interest_rate: Decimal, term_months: u32) -> MortgageError {
    MortgageError::OutOfRange(format!(
        "rate {} compounded over {} months overflows decimal precision",
        annual_interest_rate, term_months
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::ErrorKind;

    fn terms(loan_amount: Decimal, rate: Decimal, term_months: u32) -> LoanTerms {
        LoanTerms {
            loan_amount,
            annual_interest_rate: rate,
            term_months,
        }
    }

    #[test]
    fn thirty_year_payment_matches_published_tables() {
        assert_eq!(
            compute_monthly_payment(dec!(200000), dec!(0.065), 360).unwrap(),
            dec!(1264.14)
        );
        assert_eq!(
            compute_monthly_payment(dec!(100000), dec!(0.06), 360).unwrap(),
            dec!(599.55)
        );
    }

    #[test]
    fn fifteen_year_payment() {
        assert_eq!(
            compute_monthly_payment(dec!(300000), dec!(0.07), 180).unwrap(),
            dec!(2696.48)
        );
    }

    #[test]
    fn zero_rate_is_straight_division() {
        assert_eq!(
            compute_monthly_payment(dec!(120000), Decimal::ZERO, 360).unwrap(),
            dec!(333.33)
        );
        assert_eq!(
            compute_monthly_payment(dec!(1000), Decimal::ZERO, 3).unwrap(),
            dec!(333.33)
        );
    }

    #[test]
    fn vanishing_rate_falls_back_to_the_zero_rate_limit() {
        let tiny = Decimal::new(1, 28);
        assert_eq!(
            compute_monthly_payment(dec!(3600), tiny, 360).unwrap(),
            dec!(10.00)
        );
    }

    #[test]
    fn zero_loan_costs_nothing() {
        assert_eq!(
            compute_monthly_payment(Decimal::ZERO, dec!(0.05), 360).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn rejects_negative_loan_and_empty_term() {
        let negative = compute_monthly_payment(dec!(-1), dec!(0.05), 360).unwrap_err();
        assert_eq!(negative.kind(), ErrorKind::InvalidInput);

        let empty = compute_monthly_payment(dec!(1000), dec!(0.05), 0).unwrap_err();
        assert!(empty.to_string().contains("termMonths"));
    }

    #[test]
    fn rejects_percentage_rate() {
        assert!(compute_monthly_payment(dec!(1000), dec!(6.5), 360).is_err());
    }

    #[test]
    fn lifetime_totals_past_decimal_range_are_out_of_range() {
        // The payment itself fits; forty years of it does not.
        let loan = terms(Decimal::MAX / dec!(2), dec!(0.12), 480);
        let err = summarize_loan(&loan).unwrap_err();
        assert!(matches!(err, MortgageError::OutOfRange(_)));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn schedule_closes_at_zero_balance() {
        let loan = terms(dec!(240000), dec!(0.05), 12);
        let schedule = amortization_schedule(&loan).unwrap();

        assert_eq!(schedule.len(), 12);
        assert_eq!(schedule[0].payment, dec!(20545.80));
        assert_eq!(schedule[0].interest, dec!(1000.00));
        assert_eq!(schedule.last().unwrap().balance, Decimal::ZERO);

        let repaid: Decimal = schedule.iter().map(|e| e.principal).sum();
        assert_eq!(repaid, dec!(240000));
    }

    #[test]
    fn schedule_balance_never_increases() {
        let schedule = amortization_schedule(&terms(dec!(350000), dec!(0.0675), 360)).unwrap();
        for pair in schedule.windows(2) {
            assert!(pair[1].balance <= pair[0].balance);
        }
    }

    #[test]
    fn summary_totals_are_consistent() {
        let loan = terms(dec!(240000), dec!(0.05), 12);
        let summary = summarize_loan(&loan).unwrap();

        assert_eq!(summary.monthly_payment, dec!(20545.80));
        assert_eq!(summary.total_paid, loan.loan_amount + summary.total_interest);
        assert_eq!(
            summary.total_paid,
            summary.monthly_payment * dec!(11) + summary.final_payment
        );
    }

    #[test]
    fn zero_rate_summary_has_no_interest() {
        let summary = summarize_loan(&terms(dec!(1000), Decimal::ZERO, 3)).unwrap();
        assert_eq!(summary.total_interest, Decimal::ZERO);
        assert_eq!(summary.final_payment, dec!(333.34));
        assert_eq!(summary.total_paid, dec!(1000));
    }
}
