//! Reconstruction configuration
//!
//! `ReconstructionConfig` holds everything a run needs: the class sizes, the
//! rounding precision and the target metrics. Configurations are validated
//! before any search is performed.
//!
//! # Builder
//!
//! ```ignore
//! use revmatrix_core::config::ReconstructionBuilder;
//!
//! let config = ReconstructionBuilder::new(981, 981)
//!     .decimal_places(2)
//!     .accuracy(0.75)
//!     .sensitivity(0.86)
//!     .precision(0.71)
//!     .build()?;
//! ```

mod builder;

pub use builder::ReconstructionBuilder;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{MetricKind, MetricTargets, SampleComposition};
use crate::rounding::{MAX_DECIMAL_PLACES, RoundingPolicy};

/// Complete input for a reconstruction run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReconstructionConfig {
    pub composition: SampleComposition,
    pub decimal_places: u32,
    pub targets: MetricTargets,
}

impl ReconstructionConfig {
    #[must_use]
    pub fn new(composition: SampleComposition, decimal_places: u32, targets: MetricTargets) -> Self {
        Self {
            composition,
            decimal_places,
            targets,
        }
    }

    #[must_use]
    pub fn policy(&self) -> RoundingPolicy {
        RoundingPolicy::new(self.decimal_places)
    }

    /// Check every input against its domain.
    ///
    /// # Errors
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let SampleComposition {
            class_a_count,
            class_b_count,
        } = self.composition;

        if class_a_count == 0 {
            return Err(ConfigError::EmptyClass { class: "A" });
        }
        if class_b_count == 0 {
            return Err(ConfigError::EmptyClass { class: "B" });
        }
        if self.composition.checked_total().is_none() {
            return Err(ConfigError::SampleTooLarge {
                class_a_count,
                class_b_count,
            });
        }
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::DecimalPlacesTooLarge {
                decimal_places: self.decimal_places,
                max: MAX_DECIMAL_PLACES,
            });
        }

        for kind in MetricKind::ALL {
            if let Some(value) = self.targets.get(kind) {
                validate_probability(kind, value)?;
            }
        }

        Ok(())
    }
}

fn validate_probability(metric: MetricKind, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::TargetOutOfRange { metric, value })
    }
}
