//! Reconstruction entry point
//!
//! Runs the three stages in order: accuracy range search, matrix
//! enumeration, metric filtering. The whole computation is pure and
//! synchronous.

use serde::{Deserialize, Serialize};

use crate::accuracy::{AccuracyRange, find_range};
use crate::config::ReconstructionConfig;
use crate::enumerate::MatrixSweep;
use crate::error::ConfigError;
use crate::filter::target_filters;
use crate::model::{
    ConfusionMatrix, MatrixRecord, MetricColumns, MetricTargets, SampleComposition,
};

/// How a reconstruction run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReconstructionStatus {
    /// At least one matrix reproduces every target
    Matched,
    /// The accuracy is reachable but the metric targets reject every candidate
    NoMatchingMatrices,
    /// No correct-prediction count rounds to the target accuracy
    NoAccuracyMatch,
}

/// Result of a reconstruction run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reconstruction {
    pub status: ReconstructionStatus,
    /// Correct-count range for the target accuracy (absent on `NoAccuracyMatch`)
    pub range: Option<AccuracyRange>,
    /// Matrices enumerated before metric filtering
    pub candidates: usize,
    /// Matrices reproducing every target, in enumeration order
    pub matrices: Vec<ConfusionMatrix>,
}

impl Reconstruction {
    fn no_accuracy_match() -> Self {
        Self {
            status: ReconstructionStatus::NoAccuracyMatch,
            range: None,
            candidates: 0,
            matrices: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_no_accuracy_match(&self) -> bool {
        self.status == ReconstructionStatus::NoAccuracyMatch
    }

    /// Output records for the result sink
    #[must_use]
    pub fn records(
        &self,
        config: &ReconstructionConfig,
        columns: MetricColumns,
    ) -> Vec<MatrixRecord> {
        self.matrices
            .iter()
            .map(|m| MatrixRecord::new(m, &config.targets, columns, config.policy()))
            .collect()
    }
}

/// Reconstruct every confusion matrix consistent with `config`.
///
/// # Errors
/// Returns a [`ConfigError`] if the configuration fails validation. An
/// unreachable accuracy is not an error; it is reported through
/// [`ReconstructionStatus::NoAccuracyMatch`].
pub fn compute(config: &ReconstructionConfig) -> Result<Reconstruction, ConfigError> {
    config.validate()?;

    let policy = config.policy();
    let Some(range) = find_range(config.composition.total(), config.targets.accuracy, policy)
    else {
        return Ok(Reconstruction::no_accuracy_match());
    };

    let filters = target_filters(&config.targets, policy);
    let mut candidates = 0;
    let matrices: Vec<ConfusionMatrix> = MatrixSweep::new(config.composition, &range)
        .inspect(|_| candidates += 1)
        .filter(|m| filters.iter().all(|f| f.matches(m)))
        .collect();

    let status = if matrices.is_empty() {
        ReconstructionStatus::NoMatchingMatrices
    } else {
        ReconstructionStatus::Matched
    };

    Ok(Reconstruction {
        status,
        range: Some(range),
        candidates,
        matrices,
    })
}

/// Positional form of [`compute`].
///
/// # Errors
/// Returns a [`ConfigError`] if any input is outside its domain.
#[allow(clippy::too_many_arguments)]
pub fn compute_with(
    class_a_count: u32,
    class_b_count: u32,
    decimal_places: u32,
    target_accuracy: f64,
    target_sensitivity: Option<f64>,
    target_specificity: Option<f64>,
    target_f1: Option<f64>,
    target_precision: Option<f64>,
) -> Result<Reconstruction, ConfigError> {
    let config = ReconstructionConfig::new(
        SampleComposition::new(class_a_count, class_b_count),
        decimal_places,
        MetricTargets {
            accuracy: target_accuracy,
            sensitivity: target_sensitivity,
            specificity: target_specificity,
            f1: target_f1,
            precision: target_precision,
        },
    );
    compute(&config)
}
