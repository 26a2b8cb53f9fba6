//! # Keystone Mortgage Crate
//!
//! Financing mathematics for a purchase: the fixed-rate amortization payment,
//! the full cost breakdown of a transaction, and a per-period amortization
//! schedule.
//!
//! ## Architectural Principles
//!
//! - **Pure Calculation:** Nothing here touches I/O or shared state. Every function
//!   is deterministic in its inputs, so results may be cached or compared across
//!   retries by the caller.
//! - **Policy Injection:** The closing-cost rate and default term come from
//!   `configuration::MortgagePolicy`; the calculator is given its policy, it does not
//!   load it.
//!
//! ## Public API
//!
//! - `compute_monthly_payment`: The amortization formula, rounded to the cent.
//! - `MortgageCalculator`: Builds `CostBreakdown`s, loan summaries and schedules.
//! - `LoanSummary` / `ScheduleEntry`: The supplementary loan reports.
//! - `MortgageError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod amortization;
pub mod calculator;
pub mod error;
pub mod report;

// Re-export the key components to provide a clean, public-facing API.
pub use amortization::{amortization_schedule, compute_monthly_payment, summarize_loan};
pub use calculator::MortgageCalculator;
pub use error::MortgageError;
pub use report::{LoanSummary, ScheduleEntry};
