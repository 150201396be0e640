//! Confusion matrix reconstruction library
//!
//! Given the two class sizes of a binary classification dataset and the
//! rounded summary metrics a classifier reported, this crate enumerates every
//! confusion matrix (TP, FN, FP, TN) that could have produced them.
//! It supports:
//! - Accuracy as the required anchor metric
//! - Optional sensitivity, specificity, F1 and precision targets
//! - Any rounding precision up to 15 decimal places
//!
//! # Example
//!
//! ```ignore
//! use revmatrix_core::{ReconstructionBuilder, compute};
//!
//! let config = ReconstructionBuilder::new(10, 10)
//!     .decimal_places(2)
//!     .accuracy(0.75)
//!     .build()?;
//!
//! let result = compute(&config)?;
//! for m in &result.matrices {
//!     println!("{m:?}");
//! }
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod accuracy;
pub mod enumerate;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod rounding;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use accuracy::{AccuracyRange, PredictionSplit, find_range};
pub use config::{ReconstructionBuilder, ReconstructionConfig};
pub use enumerate::{MatrixSweep, enumerate};
pub use error::ConfigError;
pub use filter::{MetricFilter, filter, filter_all};
pub use model::{
    ConfusionMatrix, MatrixRecord, MetricColumns, MetricKind, MetricTargets, SampleComposition,
};
pub use pipeline::{Reconstruction, ReconstructionStatus, compute, compute_with};
pub use rounding::{RoundingPolicy, round_dp};
