//! Metric filtering
//!
//! A matrix passes a filter when its metric, rounded with the run's
//! [`RoundingPolicy`], equals the target exactly. Metrics with a zero
//! denominator are undefined and never pass a constrained filter.

use crate::model::{ConfusionMatrix, MetricKind, MetricTargets};
use crate::rounding::RoundingPolicy;

/// A single metric constraint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricFilter {
    pub kind: MetricKind,
    /// `None` leaves the metric unconstrained and the filter passes everything
    pub target: Option<f64>,
    pub policy: RoundingPolicy,
}

impl MetricFilter {
    #[must_use]
    pub fn new(kind: MetricKind, target: Option<f64>, policy: RoundingPolicy) -> Self {
        Self {
            kind,
            target,
            policy,
        }
    }

    #[must_use]
    pub fn matches(&self, matrix: &ConfusionMatrix) -> bool {
        match self.target {
            Some(target) => self.policy.matches(self.kind.evaluate(matrix), target),
            None => true,
        }
    }

    /// Keep the matching matrices, preserving their order
    pub fn apply<I>(&self, matrices: I) -> Vec<ConfusionMatrix>
    where
        I: IntoIterator<Item = ConfusionMatrix>,
    {
        matrices.into_iter().filter(|m| self.matches(m)).collect()
    }
}

/// Keep only the matrices whose rounded `kind` metric equals `target`.
///
/// An unconstrained (`None`) target returns the input unchanged.
pub fn filter<I>(
    matrices: I,
    kind: MetricKind,
    target: Option<f64>,
    policy: RoundingPolicy,
) -> Vec<ConfusionMatrix>
where
    I: IntoIterator<Item = ConfusionMatrix>,
{
    MetricFilter::new(kind, target, policy).apply(matrices)
}

/// Filters for every constrained non-accuracy target, in application order
#[must_use]
pub fn target_filters(targets: &MetricTargets, policy: RoundingPolicy) -> Vec<MetricFilter> {
    targets
        .constrained()
        .map(|(kind, target)| MetricFilter::new(kind, Some(target), policy))
        .collect()
}

/// Narrow `matrices` by each constrained target in turn
pub fn filter_all<I>(
    matrices: I,
    targets: &MetricTargets,
    policy: RoundingPolicy,
) -> Vec<ConfusionMatrix>
where
    I: IntoIterator<Item = ConfusionMatrix>,
{
    let candidates: Vec<ConfusionMatrix> = matrices.into_iter().collect();
    target_filters(targets, policy)
        .iter()
        .fold(candidates, |remaining, f| f.apply(remaining))
}
