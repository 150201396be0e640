mod matrix;
mod metric;
mod record;
mod targets;

pub use matrix::{ConfusionMatrix, SampleComposition};
pub use metric::MetricKind;
pub use record::{MatrixRecord, MetricColumns};
pub use targets::{MetricTargets, from_legacy_sentinel};
