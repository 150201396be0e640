//! Accuracy range search
//!
//! Given a sample size and a rounded target accuracy, find the highest and
//! lowest number of correct predictions whose accuracy rounds to the target.
//! Every matrix that can reproduce the accuracy has a correct count between
//! those two extremes.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::rounding::RoundingPolicy;

/// A correct/incorrect prediction count pair summing to the sample size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionSplit {
    pub correct: u32,
    pub incorrect: u32,
}

impl PredictionSplit {
    #[must_use]
    pub fn new(correct: u32, total: u32) -> Self {
        Self {
            correct,
            incorrect: total - correct,
        }
    }
}

/// Extremes of the correct-prediction counts that round to a target accuracy
///
/// `upper` holds the maximum correct count (and so the minimum incorrect
/// count). `lower` holds the minimum correct count and is `None` when only a
/// single count reproduces the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccuracyRange {
    pub upper: PredictionSplit,
    pub lower: Option<PredictionSplit>,
}

impl AccuracyRange {
    #[must_use]
    pub fn max_correct(&self) -> u32 {
        self.upper.correct
    }

    #[must_use]
    pub fn min_incorrect(&self) -> u32 {
        self.upper.incorrect
    }

    #[must_use]
    pub fn min_correct(&self) -> Option<u32> {
        self.lower.map(|split| split.correct)
    }

    #[must_use]
    pub fn max_incorrect(&self) -> Option<u32> {
        self.lower.map(|split| split.incorrect)
    }

    /// Number of distinct correct counts covered by the range
    #[must_use]
    pub fn span(&self) -> u32 {
        match self.min_correct() {
            Some(min) => self.max_correct() - min + 1,
            None => 1,
        }
    }

    /// Correct counts covered by the range, lowest first
    #[must_use]
    pub fn correct_counts(&self) -> RangeInclusive<u32> {
        let max = self.max_correct();
        self.min_correct().unwrap_or(max)..=max
    }

    /// Whether `correct` falls inside the range
    #[must_use]
    pub fn contains(&self, correct: u32) -> bool {
        self.correct_counts().contains(&correct)
    }
}

/// Find the correct-prediction counts that reproduce `target_accuracy`.
///
/// Candidates are scanned from `total_sample_size` down to 1. The first
/// (highest) match becomes the upper split and the last (lowest) match the
/// lower split. Returns `None` when no count in `1..=total_sample_size`
/// rounds to the target, meaning no confusion matrix can realise it.
#[must_use]
pub fn find_range(
    total_sample_size: u32,
    target_accuracy: f64,
    policy: RoundingPolicy,
) -> Option<AccuracyRange> {
    let total = f64::from(total_sample_size);
    let mut upper: Option<PredictionSplit> = None;
    let mut lower: Option<PredictionSplit> = None;

    for correct in (1..=total_sample_size).rev() {
        let accuracy = f64::from(correct) / total;
        if !policy.matches(Some(accuracy), target_accuracy) {
            continue;
        }

        let split = PredictionSplit::new(correct, total_sample_size);
        if upper.is_none() {
            upper = Some(split);
        } else {
            lower = Some(split);
        }
    }

    upper.map(|upper| AccuracyRange { upper, lower })
}
