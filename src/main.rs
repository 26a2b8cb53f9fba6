use anyhow::Context;
use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};
use configuration::{Config, PolicyOverrides};
use core_types::{ComparableSale, LoanTerms, MarketObservation, SalePrice, SubjectProperty};
use market::MarketTrendAnalyzer;
use mortgage::MortgageCalculator;
use negotiation::NegotiationAdvisor;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use valuation::ValuationEstimator;

mod output;

/// The main entry point for the Keystone transaction analytics tool.
fn main() -> anyhow::Result<()> {
    // Policy overrides may live in a .env file as KEYSTONE__* variables.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = configuration::load_config(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?
        .apply_overrides(&cli.overrides)?;
    let _log_guard = configuration::init_tracing(&config.logging)?;
    tracing::debug!(?config, "Configuration loaded.");

    // Execute the appropriate command
    run(cli.command, &config, cli.json)
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Financing, valuation and negotiation analytics for property transactions.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML policy file. A missing file means built-in defaults.
    #[arg(long, global = true, default_value = "keystone.toml")]
    config: PathBuf,

    /// Print results as JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    overrides: PolicyOverrides,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the monthly payment of a fixed-rate loan.
    Payment(LoanArgs),
    /// Build the full cost breakdown of a financed purchase.
    Costs(CostsArgs),
    /// Print the amortization schedule of a fixed-rate loan.
    Schedule(ScheduleArgs),
    /// Classify the trend of a historical sale series.
    Trend(TrendArgs),
    /// Estimate a property's value from comparable sales.
    Value(ValueArgs),
    /// Recommend a response to an offer.
    Negotiate(NegotiateArgs),
}

#[derive(Parser)]
struct LoanArgs {
    /// The amount borrowed.
    #[arg(long)]
    loan_amount: Decimal,

    /// Annual interest rate as a fraction (0.065 for 6.5%).
    #[arg(long)]
    rate: Decimal,

    /// Loan term in months.
    #[arg(long)]
    months: u32,
}

#[derive(Parser)]
struct CostsArgs {
    #[arg(long)]
    price: Decimal,

    #[arg(long)]
    down_payment: Decimal,

    /// Annual interest rate as a fraction. Defaults to the configured rate.
    #[arg(long)]
    rate: Option<Decimal>,

    /// Loan term in years. Defaults to the configured term.
    #[arg(long)]
    years: Option<u32>,
}

#[derive(Parser)]
struct ScheduleArgs {
    #[command(flatten)]
    loan: LoanArgs,

    /// Only print the first N periods.
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Parser)]
struct TrendArgs {
    /// JSON array of observations: `[{"price", "days_on_market", "date"}]`.
    #[arg(long)]
    input: PathBuf,

    /// Square footage used to derive price per square foot.
    #[arg(long)]
    square_footage: Option<Decimal>,
}

#[derive(Parser)]
struct ValueArgs {
    /// JSON document: `{"subject": {...}, "comparables": [...]}`.
    #[arg(long)]
    input: PathBuf,

    /// Reference year for property age. Defaults to the current year.
    #[arg(long)]
    year: Option<i32>,
}

#[derive(Parser)]
struct NegotiateArgs {
    #[arg(long)]
    listing_price: Decimal,

    #[arg(long)]
    offer: Decimal,

    #[arg(long)]
    days_on_market: u32,

    /// JSON array of comparable sales; only `price` and `date` are read.
    #[arg(long)]
    comparables: PathBuf,
}

#[derive(Deserialize)]
struct ValuationRequest {
    subject: SubjectProperty,
    comparables: Vec<ComparableSale>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn run(command: Commands, config: &Config, json: bool) -> anyhow::Result<()> {
    match command {
        Commands::Payment(args) => {
            let terms = args.terms();
            let summary = mortgage::summarize_loan(&terms)?;
            output::emit(&summary, json, || output::loan_summary_table(&terms, &summary))
        }
        Commands::Costs(args) => {
            let calculator = MortgageCalculator::new(config.mortgage.clone())?;
            let rate = args.rate.unwrap_or(config.mortgage.default_interest_rate);
            let breakdown =
                calculator.build_cost_breakdown(args.price, args.down_payment, rate, args.years)?;
            if !calculator.meets_minimum_down_payment(args.price, args.down_payment) {
                tracing::warn!(
                    "Down payment is below the {} minimum most lenders require.",
                    config.mortgage.min_down_payment_pct
                );
            }
            output::emit(&breakdown, json, || output::cost_breakdown_table(&breakdown))
        }
        Commands::Schedule(args) => {
            let mut schedule = mortgage::amortization_schedule(&args.loan.terms())?;
            if let Some(limit) = args.limit {
                schedule.truncate(limit);
            }
            output::emit(&schedule, json, || output::schedule_table(&schedule))
        }
        Commands::Trend(args) => {
            let series: Vec<MarketObservation> = read_json(&args.input)?;
            let analyzer = MarketTrendAnalyzer::new(config.market.clone())?;
            let snapshot = match args.square_footage {
                Some(sqft) => analyzer.analyze_with_footage(&series, sqft)?,
                None => analyzer.analyze(&series)?,
            };
            output::emit(&snapshot, json, || output::snapshot_table(&snapshot))
        }
        Commands::Value(args) => {
            let request: ValuationRequest = read_json(&args.input)?;
            let year = args.year.unwrap_or_else(|| Utc::now().year());
            let valuation = ValuationEstimator::new(config.valuation.clone())?
                .estimate_value(&request.subject, &request.comparables, year)?;
            output::emit(&valuation, json, || output::valuation_table(&valuation))
        }
        Commands::Negotiate(args) => {
            let comparables: Vec<SalePrice> = read_json(&args.comparables)?;
            let suggestion = NegotiationAdvisor::new(config.negotiation.clone())?.suggest_strategy(
                args.listing_price,
                args.offer,
                &comparables,
                args.days_on_market,
            )?;
            output::emit(&suggestion, json, || output::suggestion_table(&suggestion))
        }
    }
}

impl LoanArgs {
    fn terms(&self) -> LoanTerms {
        LoanTerms {
            loan_amount: self.loan_amount,
            annual_interest_rate: self.rate,
            term_months: self.months,
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}
