use serde::{Deserialize, Serialize};

use super::MetricKind;

/// The two class sizes of the evaluated dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleComposition {
    /// Number of positive (class A) samples
    pub class_a_count: u32,
    /// Number of negative (class B) samples
    pub class_b_count: u32,
}

impl SampleComposition {
    #[must_use]
    pub fn new(class_a_count: u32, class_b_count: u32) -> Self {
        Self {
            class_a_count,
            class_b_count,
        }
    }

    /// Total sample size, or `None` if it does not fit in a `u32`
    #[must_use]
    pub fn checked_total(&self) -> Option<u32> {
        self.class_a_count.checked_add(self.class_b_count)
    }

    /// Total sample size. Saturates on overflow; validated configurations
    /// never get there.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.class_a_count.saturating_add(self.class_b_count)
    }
}

/// A binary confusion matrix
///
/// Rows are the actual class (A then B), columns the predicted class, so
/// `true_positives + false_negatives` is the class A size and
/// `false_positives + true_negatives` the class B size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_positives: u32,
    pub false_negatives: u32,
    pub false_positives: u32,
    pub true_negatives: u32,
}

impl ConfusionMatrix {
    #[must_use]
    pub fn new(
        true_positives: u32,
        false_negatives: u32,
        false_positives: u32,
        true_negatives: u32,
    ) -> Self {
        Self {
            true_positives,
            false_negatives,
            false_positives,
            true_negatives,
        }
    }

    /// Correct predictions (TP + TN)
    #[must_use]
    pub fn correct(&self) -> u32 {
        self.true_positives + self.true_negatives
    }

    /// Incorrect predictions (FN + FP)
    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.false_negatives + self.false_positives
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.correct() + self.incorrect()
    }

    #[must_use]
    pub fn class_a_count(&self) -> u32 {
        self.true_positives + self.false_negatives
    }

    #[must_use]
    pub fn class_b_count(&self) -> u32 {
        self.false_positives + self.true_negatives
    }

    /// Whether the matrix partitions exactly the given class sizes
    #[must_use]
    pub fn fits(&self, composition: &SampleComposition) -> bool {
        self.class_a_count() == composition.class_a_count
            && self.class_b_count() == composition.class_b_count
    }

    /// Unrounded value of a metric, `None` when its denominator is zero
    #[must_use]
    pub fn metric(&self, kind: MetricKind) -> Option<f64> {
        kind.evaluate(self)
    }

    /// Counts in the fixed output order `[TP, FN, FP, TN]`
    #[must_use]
    pub fn as_array(&self) -> [u32; 4] {
        [
            self.true_positives,
            self.false_negatives,
            self.false_positives,
            self.true_negatives,
        ]
    }
}
