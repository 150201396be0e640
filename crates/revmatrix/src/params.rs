//! Run parameters from YAML files and the command line
//!
//! Example parameter file:
//!
//! ```yaml
//! class_a_count: 981
//! class_b_count: 981
//! decimal_places: 2
//! accuracy: 0.75
//! sensitivity: 0.86
//! specificity: -1.0   # legacy marker: unconstrained
//! ```
//!
//! Every field is optional here so files and flags can be layered; required
//! fields are checked when converting into a [`ReconstructionConfig`].

use std::path::Path;

use revmatrix_core::model::from_legacy_sentinel;
use revmatrix_core::{ConfigError, MetricTargets, ReconstructionConfig, SampleComposition};
use serde::{Deserialize, Serialize};

/// Decimal places used when neither the file nor the command line sets them
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// Error types for loading and resolving run parameters
#[derive(Debug)]
pub enum ParamsError {
    Io(String),
    Parse(String),
    Missing(&'static str),
    Invalid(ConfigError),
}

impl std::fmt::Display for ParamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamsError::Io(msg) => write!(f, "IO error: {}", msg),
            ParamsError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ParamsError::Missing(field) => write!(f, "missing required parameter '{}'", field),
            ParamsError::Invalid(e) => write!(f, "invalid parameters: {}", e),
        }
    }
}

impl std::error::Error for ParamsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParamsError::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for ParamsError {
    fn from(e: ConfigError) -> Self {
        ParamsError::Invalid(e)
    }
}

/// Partially specified run parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_a_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_b_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specificity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub f1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<f64>,
}

impl RunParameters {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Save to YAML string
    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    /// Read a YAML parameter file
    pub fn load(path: &Path) -> Result<Self, ParamsError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ParamsError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content).map_err(|e| {
            ParamsError::Parse(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Layer `overrides` on top of `self`; any field set in `overrides` wins.
    #[must_use]
    pub fn merge(self, overrides: RunParameters) -> Self {
        Self {
            class_a_count: overrides.class_a_count.or(self.class_a_count),
            class_b_count: overrides.class_b_count.or(self.class_b_count),
            decimal_places: overrides.decimal_places.or(self.decimal_places),
            accuracy: overrides.accuracy.or(self.accuracy),
            sensitivity: overrides.sensitivity.or(self.sensitivity),
            specificity: overrides.specificity.or(self.specificity),
            f1: overrides.f1.or(self.f1),
            precision: overrides.precision.or(self.precision),
        }
    }

    /// Resolve into a validated configuration.
    ///
    /// Optional targets set to the legacy `-1` marker are treated as
    /// unconstrained.
    pub fn into_config(self) -> Result<ReconstructionConfig, ParamsError> {
        let class_a_count = self
            .class_a_count
            .ok_or(ParamsError::Missing("class_a_count"))?;
        let class_b_count = self
            .class_b_count
            .ok_or(ParamsError::Missing("class_b_count"))?;
        let accuracy = self.accuracy.ok_or(ParamsError::Missing("accuracy"))?;

        let config = ReconstructionConfig::new(
            SampleComposition::new(class_a_count, class_b_count),
            self.decimal_places.unwrap_or(DEFAULT_DECIMAL_PLACES),
            MetricTargets {
                accuracy,
                sensitivity: from_legacy_sentinel(self.sensitivity),
                specificity: from_legacy_sentinel(self.specificity),
                f1: from_legacy_sentinel(self.f1),
                precision: from_legacy_sentinel(self.precision),
            },
        );
        config.validate()?;
        Ok(config)
    }
}
