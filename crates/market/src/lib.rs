//! # Keystone Market Analysis
//!
//! Classifies a historical sale series into a trend direction and summary
//! statistics.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It depends only on `core-types`
//!   and `configuration`, and knows nothing of where the series came from.
//! - **Stateless Calculation:** The `MarketTrendAnalyzer` holds only its policy. It
//!   takes a series as input and produces a `MarketSnapshot` as output.
//!
//! ## Public API
//!
//! - `MarketTrendAnalyzer`: The struct that contains the classification logic.
//! - `median`: The median helper, exposed so callers can reuse the same tie-break.
//! - `MarketError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod analyzer;
pub mod error;
pub mod stats;

// Re-export the key components to create a clean, public-facing API.
pub use analyzer::MarketTrendAnalyzer;
pub use error::MarketError;
pub use stats::median;
