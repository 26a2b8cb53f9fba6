use comfy_table::Table;
use core_types::{CostBreakdown, LoanTerms, MarketSnapshot, NegotiationSuggestion, PropertyValuation};
use mortgage::{LoanSummary, ScheduleEntry};
use serde::Serialize;

/// Prints `value` as pretty JSON, or the table built by `table` otherwise.
pub fn emit<T, F>(value: &T, json: bool, table: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce() -> Table,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", table());
    }
    Ok(())
}

fn key_value(rows: Vec<(&str, String)>) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);
    for (key, value) in rows {
        table.add_row(vec![key.to_string(), value]);
    }
    table
}

pub fn loan_summary_table(terms: &LoanTerms, summary: &LoanSummary) -> Table {
    key_value(vec![
        ("Loan amount", terms.loan_amount.to_string()),
        ("Annual rate", terms.annual_interest_rate.to_string()),
        ("Term (months)", terms.term_months.to_string()),
        ("Monthly payment", summary.monthly_payment.to_string()),
        ("Final payment", summary.final_payment.to_string()),
        ("Total interest", summary.total_interest.to_string()),
        ("Total paid", summary.total_paid.to_string()),
    ])
}

pub fn cost_breakdown_table(breakdown: &CostBreakdown) -> Table {
    key_value(vec![
        ("Purchase price", breakdown.purchase_price.to_string()),
        ("Down payment", breakdown.down_payment.to_string()),
        ("Loan amount", breakdown.loan_amount.to_string()),
        ("Interest rate", breakdown.interest_rate.to_string()),
        ("Term (years)", breakdown.loan_term_years.to_string()),
        ("Monthly payment", breakdown.monthly_payment.to_string()),
        ("Closing costs", breakdown.closing_costs.to_string()),
        ("Total cost", breakdown.total_cost.to_string()),
    ])
}

pub fn schedule_table(schedule: &[ScheduleEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Period", "Payment", "Principal", "Interest", "Balance"]);
    for entry in schedule {
        table.add_row(vec![
            entry.period.to_string(),
            entry.payment.to_string(),
            entry.principal.to_string(),
            entry.interest.to_string(),
            entry.balance.to_string(),
        ]);
    }
    table
}

pub fn snapshot_table(snapshot: &MarketSnapshot) -> Table {
    key_value(vec![
        ("Median price", snapshot.median_price.to_string()),
        ("Avg. days on market", snapshot.average_days_on_market.round_dp(1).to_string()),
        ("Price / sq ft", snapshot.price_per_square_foot.round_dp(2).to_string()),
        ("Inventory", snapshot.inventory_count.to_string()),
        ("Trend", snapshot.trend.to_string()),
    ])
}

pub fn valuation_table(valuation: &PropertyValuation) -> Table {
    let mut table = key_value(vec![
        ("Estimated value", valuation.estimated_value.to_string()),
        ("Confidence", valuation.confidence.to_string()),
    ]);
    for factor in &valuation.factors {
        table.add_row(vec![
            format!("Factor: {}", factor.factor),
            format!("{} ({})", factor.impact, factor.weight),
        ]);
    }
    table
}

pub fn suggestion_table(suggestion: &NegotiationSuggestion) -> Table {
    let amount = suggestion
        .suggested_amount
        .map(|amount| amount.to_string())
        .unwrap_or_else(|| "-".to_string());
    key_value(vec![
        ("Suggestion", suggestion.suggestion_type.to_string()),
        ("Suggested amount", amount),
        ("Confidence", suggestion.confidence.to_string()),
        ("Reasoning", suggestion.reasoning.clone()),
    ])
}
