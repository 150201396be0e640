//! Worked reconstruction scenarios
//!
//! These tests verify:
//! - The exact matrix set for a balanced single-accuracy case
//! - Unreachable accuracies report `NoAccuracyMatch` with no output
//! - Metric targets that reject every candidate report `NoMatchingMatrices`
//! - The legacy 981/981 parameter set

use crate::config::ReconstructionBuilder;
use crate::model::{ConfusionMatrix, MatrixRecord, MetricColumns, MetricTargets};
use crate::pipeline::{ReconstructionStatus, compute, compute_with};

#[test]
fn test_balanced_classes_exact_accuracy() {
    let result = compute_with(10, 10, 2, 0.75, None, None, None, None).unwrap();

    assert_eq!(result.status, ReconstructionStatus::Matched);
    let range = result.range.unwrap();
    assert_eq!(range.max_correct(), 15);
    assert_eq!(range.min_correct(), None);

    // Seed plus five transfers; the last stops once TN reaches class B's size
    let expected = vec![
        ConfusionMatrix::new(10, 0, 5, 5),
        ConfusionMatrix::new(9, 1, 4, 6),
        ConfusionMatrix::new(8, 2, 3, 7),
        ConfusionMatrix::new(7, 3, 2, 8),
        ConfusionMatrix::new(6, 4, 1, 9),
        ConfusionMatrix::new(5, 5, 0, 10),
    ];
    assert_eq!(result.matrices, expected);
    assert_eq!(result.candidates, 6);
}

#[test]
fn test_unreachable_accuracy() {
    let result = compute_with(3, 3, 2, 0.99, None, None, None, None).unwrap();

    assert!(result.is_no_accuracy_match());
    assert_eq!(result.range, None);
    assert_eq!(result.candidates, 0);
    assert!(result.matrices.is_empty());
}

#[test]
fn test_targets_reject_every_candidate() {
    // Candidate sensitivities are 1.0, 0.9, ..., 0.5; none rounds to 0.95
    let result = compute_with(10, 10, 2, 0.75, Some(0.95), None, None, None).unwrap();

    assert_eq!(result.status, ReconstructionStatus::NoMatchingMatrices);
    assert!(result.range.is_some());
    assert_eq!(result.candidates, 6);
    assert!(result.matrices.is_empty());
}

#[test]
fn test_all_targets_single_survivor() {
    let result = compute_with(10, 10, 2, 0.75, Some(0.7), Some(0.8), Some(0.74), Some(0.78))
        .unwrap();
    assert_eq!(result.matrices, vec![ConfusionMatrix::new(7, 3, 2, 8)]);
}

#[test]
fn test_invalid_configuration_is_rejected_before_search() {
    assert!(compute_with(0, 10, 2, 0.75, None, None, None, None).is_err());
    assert!(compute_with(10, 10, 2, 0.75, None, None, None, Some(1.01)).is_err());
}

#[test]
fn test_legacy_parameter_set() {
    let config = ReconstructionBuilder::new(981, 981)
        .decimal_places(2)
        .accuracy(0.75)
        .sensitivity(0.86)
        .specificity(0.64)
        .f1(0.77)
        .precision(0.71)
        .build()
        .unwrap();
    let result = compute(&config).unwrap();
    let policy = config.policy();

    assert_eq!(result.range.unwrap().correct_counts(), 1462..=1481);
    assert_eq!(result.candidates, 9830);
    assert_eq!(result.matrices.len(), 13);
    assert_eq!(result.matrices[0], ConfusionMatrix::new(842, 139, 350, 631));
    for m in &result.matrices {
        assert!(m.fits(&config.composition));
        assert_eq!(policy.round(f64::from(m.correct()) / 1962.0), 0.75);
        let record = MatrixRecord::with_computed(m, policy);
        assert_eq!(record.sensitivity, Some(0.86));
        assert_eq!(record.specificity, Some(0.64));
        assert_eq!(record.f1, Some(0.77));
        assert_eq!(record.precision, Some(0.71));
    }
}

#[test]
fn test_records_carry_targets() {
    let config = ReconstructionBuilder::new(10, 10)
        .accuracy(0.75)
        .sensitivity(0.8)
        .build()
        .unwrap();
    let result = compute(&config).unwrap();
    let records = result.records(&config, MetricColumns::Targets);

    assert_eq!(records.len(), 1);
    let record = records[0];
    assert_eq!(record.matrix(), ConfusionMatrix::new(8, 2, 3, 7));
    assert_eq!(record.metrics(), [Some(0.75), Some(0.8), None, None, None]);
    assert_eq!(
        config.targets,
        MetricTargets {
            sensitivity: Some(0.8),
            ..MetricTargets::accuracy(0.75)
        }
    );
}
