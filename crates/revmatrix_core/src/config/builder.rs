//! Fluent builder for [`ReconstructionConfig`]

use super::ReconstructionConfig;
use crate::error::ConfigError;
use crate::model::{MetricKind, MetricTargets, SampleComposition};
use crate::rounding::RoundingPolicy;

/// Builder for a validated reconstruction configuration
#[derive(Debug, Clone)]
pub struct ReconstructionBuilder {
    composition: SampleComposition,
    decimal_places: u32,
    targets: MetricTargets,
}

impl ReconstructionBuilder {
    /// Start from the two class sizes. Defaults to two decimal places and a
    /// target accuracy of 0.
    #[must_use]
    pub fn new(class_a_count: u32, class_b_count: u32) -> Self {
        Self {
            composition: SampleComposition::new(class_a_count, class_b_count),
            decimal_places: RoundingPolicy::default().decimal_places,
            targets: MetricTargets::accuracy(0.0),
        }
    }

    #[must_use]
    pub fn decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    #[must_use]
    pub fn accuracy(mut self, accuracy: f64) -> Self {
        self.targets.accuracy = accuracy;
        self
    }

    #[must_use]
    pub fn sensitivity(self, value: f64) -> Self {
        self.target(MetricKind::Sensitivity, Some(value))
    }

    #[must_use]
    pub fn specificity(self, value: f64) -> Self {
        self.target(MetricKind::Specificity, Some(value))
    }

    #[must_use]
    pub fn f1(self, value: f64) -> Self {
        self.target(MetricKind::F1, Some(value))
    }

    #[must_use]
    pub fn precision(self, value: f64) -> Self {
        self.target(MetricKind::Precision, Some(value))
    }

    /// Set or clear any metric target
    #[must_use]
    pub fn target(mut self, kind: MetricKind, value: Option<f64>) -> Self {
        self.targets.set(kind, value);
        self
    }

    /// Validate and return the configuration
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if any input is outside its domain.
    pub fn build(self) -> Result<ReconstructionConfig, ConfigError> {
        let config = ReconstructionConfig::new(self.composition, self.decimal_places, self.targets);
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_all_targets() {
        let config = ReconstructionBuilder::new(981, 981)
            .decimal_places(2)
            .accuracy(0.75)
            .sensitivity(0.86)
            .specificity(0.64)
            .f1(0.77)
            .precision(0.71)
            .build()
            .unwrap();

        assert_eq!(config.composition, SampleComposition::new(981, 981));
        assert_eq!(config.decimal_places, 2);
        assert_eq!(config.targets.sensitivity, Some(0.86));
        assert_eq!(config.targets.specificity, Some(0.64));
        assert_eq!(config.targets.f1, Some(0.77));
        assert_eq!(config.targets.precision, Some(0.71));
    }

    #[test]
    fn test_builder_clears_target() {
        let config = ReconstructionBuilder::new(5, 5)
            .accuracy(0.5)
            .f1(0.4)
            .target(MetricKind::F1, None)
            .build()
            .unwrap();
        assert_eq!(config.targets.f1, None);
    }

    #[test]
    fn test_builder_validates() {
        let err = ReconstructionBuilder::new(5, 5)
            .accuracy(0.5)
            .precision(2.0)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::TargetOutOfRange {
                metric: MetricKind::Precision,
                value: 2.0
            }
        );
    }
}
