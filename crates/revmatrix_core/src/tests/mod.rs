//! End-to-end tests for the reconstruction pipeline
//!
//! Tests are organized by topic:
//! - `scenarios` - Worked examples with known matrix sets
//! - `properties` - Invariants checked over seeded random inputs
//! - `filters` - Metric filter composition and undefined metrics

mod scenarios;
