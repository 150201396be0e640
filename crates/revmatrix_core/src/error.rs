use std::fmt;

use crate::model::MetricKind;

/// Reasons a reconstruction configuration is rejected before any search runs
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A class has no samples
    EmptyClass { class: &'static str },
    /// The two class sizes sum past `u32::MAX`
    SampleTooLarge { class_a_count: u32, class_b_count: u32 },
    /// More decimal places than `f64` can meaningfully round to
    DecimalPlacesTooLarge { decimal_places: u32, max: u32 },
    /// A target metric is not a finite value in `[0, 1]`
    TargetOutOfRange { metric: MetricKind, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyClass { class } => {
                write!(f, "class {class} must contain at least one sample")
            }
            ConfigError::SampleTooLarge {
                class_a_count,
                class_b_count,
            } => write!(
                f,
                "total sample size {class_a_count} + {class_b_count} is too large"
            ),
            ConfigError::DecimalPlacesTooLarge {
                decimal_places,
                max,
            } => write!(
                f,
                "decimal places must be at most {max} (got {decimal_places})"
            ),
            ConfigError::TargetOutOfRange { metric, value } => {
                write!(f, "target {metric} must be within [0, 1] (got {value})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
