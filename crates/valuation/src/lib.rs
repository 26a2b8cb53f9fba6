//! # Keystone Valuation
//!
//! Estimates a fair value for a property from comparable sales, adjusted by
//! the subject's own attributes.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It depends only on `core-types`
//!   and `configuration`, and does no geocoding, deduplication or staleness
//!   filtering. Comparables arrive already filtered by the caller.
//! - **Ordered Pipeline:** Adjustments are data, applied in sequence to a running
//!   value. Their order is significant because they compound.
//! - **Pluggable Confidence:** The reported confidence comes from a
//!   `ConfidenceModel`, so a richer model can replace the fixed default without
//!   touching the estimator.
//!
//! ## Public API
//!
//! - `ValuationEstimator`: Validates input, computes the base estimate and runs the pipeline.
//! - `AdjustmentPipeline`: The ordered multiplicative adjustments.
//! - `ConfidenceModel` / `FixedConfidence`: The confidence seam and its default.
//! - `ValuationError`: The specific error types that can be returned from this crate.

// Declare all the modules that constitute this crate.
pub mod confidence;
pub mod error;
pub mod estimator;
pub mod pipeline;

// Re-export the key components to create a clean, public-facing API.
pub use confidence::{ConfidenceModel, FixedConfidence};
pub use error::ValuationError;
pub use estimator::ValuationEstimator;
pub use pipeline::AdjustmentPipeline;
