//! Confusion matrix enumeration
//!
//! For every correct-prediction count in an [`AccuracyRange`], generate each
//! way of splitting the correct predictions between the two classes. One
//! correct count is an "offset" into the range, starting from the highest.
//!
//! Within an offset the sweep starts at a seed matrix with as many true
//! positives as class A allows, then repeatedly moves one correct prediction
//! from class A to class B:
//!
//! ```text
//! TP -= 1; FN += 1; FP -= 1; TN += 1
//! ```
//!
//! which keeps both the correct and incorrect totals fixed. The sweep stops
//! once class A has no true positives left or class B is fully correct.

use std::iter::FusedIterator;

use crate::accuracy::AccuracyRange;
use crate::model::{ConfusionMatrix, SampleComposition};

/// Lazy, finite sequence of every matrix consistent with an accuracy range
///
/// Cloning the sweep yields an independent iterator over the same matrices.
#[derive(Debug, Clone)]
pub struct MatrixSweep {
    composition: SampleComposition,
    max_correct: u32,
    min_incorrect: u32,
    span: u32,
    offset: u32,
    current: Option<ConfusionMatrix>,
}

impl MatrixSweep {
    #[must_use]
    pub fn new(composition: SampleComposition, range: &AccuracyRange) -> Self {
        Self {
            composition,
            max_correct: range.max_correct(),
            min_incorrect: range.min_incorrect(),
            span: range.span(),
            offset: 0,
            current: None,
        }
    }

    /// Seed matrix for an offset, or `None` if the range does not describe
    /// this composition (the counts would go negative).
    fn seed(&self, offset: u32) -> Option<ConfusionMatrix> {
        let class_a = self.composition.class_a_count;
        let class_b = self.composition.class_b_count;

        let tp = class_a.min(self.max_correct.checked_sub(offset)?);
        let fn_ = class_a - tp;
        let fp = self.min_incorrect.checked_add(offset)?.checked_sub(fn_)?;
        let tn = class_b.checked_sub(fp)?;

        Some(ConfusionMatrix::new(tp, fn_, fp, tn))
    }

    /// Next matrix within the current offset's transfer sweep
    fn transfer(&self, m: ConfusionMatrix) -> Option<ConfusionMatrix> {
        if m.true_positives == 0 || m.true_negatives >= self.composition.class_b_count {
            return None;
        }

        Some(ConfusionMatrix::new(
            m.true_positives - 1,
            m.false_negatives + 1,
            m.false_positives - 1,
            m.true_negatives + 1,
        ))
    }
}

impl Iterator for MatrixSweep {
    type Item = ConfusionMatrix;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current) = self.current {
            if let Some(next) = self.transfer(current) {
                self.current = Some(next);
                return Some(next);
            }
            self.offset += 1;
        }

        while self.offset < self.span {
            if let Some(seed) = self.seed(self.offset) {
                self.current = Some(seed);
                return Some(seed);
            }
            self.offset += 1;
        }

        self.current = None;
        None
    }
}

impl FusedIterator for MatrixSweep {}

/// Every confusion matrix for `composition` whose correct count lies in
/// `range`, in emission order (offsets from the highest correct count down,
/// each seed followed by its transfers).
#[must_use]
pub fn enumerate(composition: SampleComposition, range: &AccuracyRange) -> Vec<ConfusionMatrix> {
    MatrixSweep::new(composition, range).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accuracy::{PredictionSplit, find_range};
    use crate::rounding::RoundingPolicy;

    fn single(correct: u32, total: u32) -> AccuracyRange {
        AccuracyRange {
            upper: PredictionSplit::new(correct, total),
            lower: None,
        }
    }

    #[test]
    fn test_balanced_single_offset() {
        let matrices = enumerate(SampleComposition::new(10, 10), &single(15, 20));
        let counts: Vec<[u32; 4]> = matrices.iter().map(ConfusionMatrix::as_array).collect();
        assert_eq!(
            counts,
            vec![
                [10, 0, 5, 5],
                [9, 1, 4, 6],
                [8, 2, 3, 7],
                [7, 3, 2, 8],
                [6, 4, 1, 9],
                [5, 5, 0, 10],
            ]
        );
    }

    #[test]
    fn test_seed_clamped_below_class_a() {
        // 5 correct out of 10 + 2: TP cannot start above max_correct
        let matrices = enumerate(SampleComposition::new(10, 2), &single(5, 12));
        assert_eq!(matrices[0].as_array(), [5, 5, 2, 0]);
        assert_eq!(matrices.last().unwrap().as_array(), [3, 7, 0, 2]);
        assert_eq!(matrices.len(), 3);
    }

    #[test]
    fn test_perfect_accuracy_yields_one_matrix() {
        let matrices = enumerate(SampleComposition::new(4, 6), &single(10, 10));
        assert_eq!(matrices, vec![ConfusionMatrix::new(4, 0, 0, 6)]);
    }

    #[test]
    fn test_multiple_offsets_walk_correct_counts_down() {
        let composition = SampleComposition::new(6, 4);
        let range = find_range(10, 1.0, RoundingPolicy::new(0)).unwrap();
        let matrices = enumerate(composition, &range);

        let mut previous = u32::MAX;
        for m in &matrices {
            assert!(m.fits(&composition));
            assert!(range.contains(m.correct()));
            assert!(m.correct() <= previous);
            previous = m.correct();
        }
        assert_eq!(matrices.first().unwrap().correct(), 10);
        assert_eq!(matrices.last().unwrap().correct(), 5);
    }

    #[test]
    fn test_sweep_is_reiterable() {
        let sweep = MatrixSweep::new(SampleComposition::new(10, 10), &single(15, 20));
        let first: Vec<_> = sweep.clone().collect();
        let second: Vec<_> = sweep.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sweep_is_fused() {
        let mut sweep = MatrixSweep::new(SampleComposition::new(1, 1), &single(2, 2));
        assert!(sweep.next().is_some());
        assert!(sweep.next().is_none());
        assert!(sweep.next().is_none());
    }

    #[test]
    fn test_mismatched_range_emits_nothing_negative() {
        // A range computed for a larger sample than the composition
        let matrices = enumerate(SampleComposition::new(2, 2), &single(3, 40));
        assert!(matrices.is_empty());
    }
}
