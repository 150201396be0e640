use serde::{Deserialize, Serialize};

use super::{ConfusionMatrix, MetricKind, MetricTargets};
use crate::rounding::RoundingPolicy;

/// Which values fill the metric columns of an output record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricColumns {
    /// The requested target values (unconstrained targets stay empty)
    #[default]
    Targets,
    /// Metric values recomputed from each matrix and rounded
    Computed,
}

/// One output row: a matrix plus its metric columns
///
/// Field order is the output column order:
/// `TP, FN, FP, TN, accuracy, sensitivity, specificity, f1, precision`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatrixRecord {
    pub tp: u32,
    #[serde(rename = "fn")]
    pub fn_: u32,
    pub fp: u32,
    pub tn: u32,
    pub accuracy: Option<f64>,
    pub sensitivity: Option<f64>,
    pub specificity: Option<f64>,
    pub f1: Option<f64>,
    pub precision: Option<f64>,
}

impl MatrixRecord {
    /// Build a record carrying the target values
    #[must_use]
    pub fn with_targets(matrix: &ConfusionMatrix, targets: &MetricTargets) -> Self {
        Self::with_metrics(matrix, |kind| targets.get(kind))
    }

    /// Build a record carrying rounded recomputed values
    #[must_use]
    pub fn with_computed(matrix: &ConfusionMatrix, policy: RoundingPolicy) -> Self {
        Self::with_metrics(matrix, |kind| matrix.metric(kind).map(|v| policy.round(v)))
    }

    #[must_use]
    pub fn new(
        matrix: &ConfusionMatrix,
        targets: &MetricTargets,
        columns: MetricColumns,
        policy: RoundingPolicy,
    ) -> Self {
        match columns {
            MetricColumns::Targets => Self::with_targets(matrix, targets),
            MetricColumns::Computed => Self::with_computed(matrix, policy),
        }
    }

    fn with_metrics(matrix: &ConfusionMatrix, metric: impl Fn(MetricKind) -> Option<f64>) -> Self {
        Self {
            tp: matrix.true_positives,
            fn_: matrix.false_negatives,
            fp: matrix.false_positives,
            tn: matrix.true_negatives,
            accuracy: metric(MetricKind::Accuracy),
            sensitivity: metric(MetricKind::Sensitivity),
            specificity: metric(MetricKind::Specificity),
            f1: metric(MetricKind::F1),
            precision: metric(MetricKind::Precision),
        }
    }

    /// The matrix this record describes
    #[must_use]
    pub fn matrix(&self) -> ConfusionMatrix {
        ConfusionMatrix::new(self.tp, self.fn_, self.fp, self.tn)
    }

    /// Metric columns in output order
    #[must_use]
    pub fn metrics(&self) -> [Option<f64>; 5] {
        [
            self.accuracy,
            self.sensitivity,
            self.specificity,
            self.f1,
            self.precision,
        ]
    }
}
