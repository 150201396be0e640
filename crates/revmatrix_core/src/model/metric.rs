//! Classification metrics computed from a confusion matrix.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ConfusionMatrix;

/// Metrics that can be derived from a binary confusion matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// (TP + TN) / total
    Accuracy,
    /// TP / (TP + FN), also known as recall
    Sensitivity,
    /// TN / (TN + FP)
    Specificity,
    /// 2TP / (2TP + FP + FN)
    F1,
    /// TP / (TP + FP)
    Precision,
}

impl MetricKind {
    /// All metrics, in output column order
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Accuracy,
        MetricKind::Sensitivity,
        MetricKind::Specificity,
        MetricKind::F1,
        MetricKind::Precision,
    ];

    /// Compute the unrounded metric value.
    ///
    /// Returns `None` when the denominator is zero (e.g. precision of a
    /// matrix with no positive predictions).
    #[must_use]
    pub fn evaluate(&self, m: &ConfusionMatrix) -> Option<f64> {
        let tp = f64::from(m.true_positives);
        let fn_ = f64::from(m.false_negatives);
        let fp = f64::from(m.false_positives);
        let tn = f64::from(m.true_negatives);

        let (numerator, denominator) = match self {
            Self::Accuracy => (tp + tn, tp + tn + fp + fn_),
            Self::Sensitivity => (tp, tp + fn_),
            Self::Specificity => (tn, tn + fp),
            Self::F1 => (2.0 * tp, 2.0 * tp + fp + fn_),
            Self::Precision => (tp, tp + fp),
        };

        if denominator == 0.0 {
            None
        } else {
            Some(numerator / denominator)
        }
    }

    /// Identifier used in parameter files and log output
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Accuracy => "accuracy",
            Self::Sensitivity => "sensitivity",
            Self::Specificity => "specificity",
            Self::F1 => "f1",
            Self::Precision => "precision",
        }
    }

    /// Column header used by tabular output
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Accuracy => "Accuracy",
            Self::Sensitivity => "Sensitivity",
            Self::Specificity => "Specificity",
            Self::F1 => "F1",
            Self::Precision => "Precision",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_formulas() {
        let m = ConfusionMatrix::new(8, 2, 3, 7);
        assert_eq!(MetricKind::Accuracy.evaluate(&m), Some(0.75));
        assert_eq!(MetricKind::Sensitivity.evaluate(&m), Some(0.8));
        assert_eq!(MetricKind::Specificity.evaluate(&m), Some(0.7));
        assert_eq!(MetricKind::F1.evaluate(&m), Some(16.0 / 21.0));
        assert_eq!(MetricKind::Precision.evaluate(&m), Some(8.0 / 11.0));
    }

    #[test]
    fn test_zero_denominators_are_undefined() {
        // No positive predictions at all
        let m = ConfusionMatrix::new(0, 5, 0, 5);
        assert_eq!(MetricKind::Precision.evaluate(&m), None);
        assert_eq!(MetricKind::Sensitivity.evaluate(&m), Some(0.0));
        assert_eq!(MetricKind::F1.evaluate(&m), Some(0.0));

        let empty = ConfusionMatrix::new(0, 0, 0, 0);
        for kind in MetricKind::ALL {
            assert_eq!(kind.evaluate(&empty), None, "{kind} should be undefined");
        }
    }

    #[test]
    fn test_labels_follow_column_order() {
        let labels = MetricKind::ALL.map(|kind| kind.label());
        assert_eq!(labels, ["Accuracy", "Sensitivity", "Specificity", "F1", "Precision"]);
        assert_eq!(MetricKind::F1.to_string(), "f1");
    }
}
