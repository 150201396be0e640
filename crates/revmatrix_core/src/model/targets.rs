use serde::{Deserialize, Serialize};

use super::MetricKind;

/// Target metric values a matrix must reproduce
///
/// Accuracy is always required. Every other metric is optional; `None`
/// leaves it unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricTargets {
    pub accuracy: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specificity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub f1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<f64>,
}

impl MetricTargets {
    /// Targets constraining accuracy only
    #[must_use]
    pub fn accuracy(accuracy: f64) -> Self {
        Self {
            accuracy,
            sensitivity: None,
            specificity: None,
            f1: None,
            precision: None,
        }
    }

    /// Target for a given metric, `None` if unconstrained
    #[must_use]
    pub fn get(&self, kind: MetricKind) -> Option<f64> {
        match kind {
            MetricKind::Accuracy => Some(self.accuracy),
            MetricKind::Sensitivity => self.sensitivity,
            MetricKind::Specificity => self.specificity,
            MetricKind::F1 => self.f1,
            MetricKind::Precision => self.precision,
        }
    }

    /// Set or clear the target for a metric
    pub fn set(&mut self, kind: MetricKind, value: Option<f64>) {
        match kind {
            // Accuracy cannot be unconstrained; clearing it is ignored
            MetricKind::Accuracy => {
                if let Some(v) = value {
                    self.accuracy = v;
                }
            }
            MetricKind::Sensitivity => self.sensitivity = value,
            MetricKind::Specificity => self.specificity = value,
            MetricKind::F1 => self.f1 = value,
            MetricKind::Precision => self.precision = value,
        }
    }

    /// The supplied non-accuracy targets, in the order they are applied:
    /// sensitivity, specificity, f1, precision.
    pub fn constrained(&self) -> impl Iterator<Item = (MetricKind, f64)> + '_ {
        [
            MetricKind::Sensitivity,
            MetricKind::Specificity,
            MetricKind::F1,
            MetricKind::Precision,
        ]
        .into_iter()
        .filter_map(|kind| self.get(kind).map(|target| (kind, target)))
    }
}

/// Map the legacy `-1` "ignore this target" marker to `None`.
///
/// Only parameter files and the command line accept the marker; inside the
/// library an unconstrained target is always `None`.
#[must_use]
pub fn from_legacy_sentinel(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != -1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constrained_order_and_skipping() {
        let targets = MetricTargets {
            accuracy: 0.75,
            sensitivity: Some(0.86),
            specificity: None,
            f1: Some(0.77),
            precision: None,
        };
        let constrained: Vec<_> = targets.constrained().collect();
        assert_eq!(
            constrained,
            vec![(MetricKind::Sensitivity, 0.86), (MetricKind::F1, 0.77)]
        );
        assert_eq!(MetricTargets::accuracy(0.5).constrained().count(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut targets = MetricTargets::accuracy(0.5);
        targets.set(MetricKind::Precision, Some(0.4));
        targets.set(MetricKind::Accuracy, None);
        assert_eq!(targets.get(MetricKind::Precision), Some(0.4));
        assert_eq!(targets.get(MetricKind::Accuracy), Some(0.5));
        targets.set(MetricKind::Precision, None);
        assert_eq!(targets.get(MetricKind::Precision), None);
    }

    #[test]
    fn test_legacy_sentinel() {
        assert_eq!(from_legacy_sentinel(Some(-1.0)), None);
        assert_eq!(from_legacy_sentinel(Some(0.71)), Some(0.71));
        assert_eq!(from_legacy_sentinel(None), None);
    }
}
