//! Result sink: writes matrix records as CSV or JSON

use std::io::{self, Write};

use clap::ValueEnum;
use revmatrix_core::{MatrixRecord, MetricColumns, MetricKind};

/// Count columns, followed by one column per metric
const COUNT_COLUMNS: [&str; 4] = ["TP", "FN", "FP", "TN"];

/// CSV header in the fixed output column order
pub fn csv_header() -> String {
    COUNT_COLUMNS
        .into_iter()
        .chain(MetricKind::ALL.iter().map(|kind| kind.label()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Serialization format for the output records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Which values fill the metric columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Columns {
    /// The requested targets (legacy behaviour)
    #[default]
    Targets,
    /// Metrics recomputed from each matrix
    Computed,
}

impl From<Columns> for MetricColumns {
    fn from(columns: Columns) -> Self {
        match columns {
            Columns::Targets => MetricColumns::Targets,
            Columns::Computed => MetricColumns::Computed,
        }
    }
}

/// Write every record to `writer` in the chosen format
pub fn write_records<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    records: &[MatrixRecord],
) -> io::Result<()> {
    match format {
        OutputFormat::Csv => write_csv(writer, records),
        OutputFormat::Json => write_json(writer, records),
    }
}

/// CSV with a header row; unconstrained metric columns are left empty
pub fn write_csv<W: Write>(writer: &mut W, records: &[MatrixRecord]) -> io::Result<()> {
    writeln!(writer, "{}", csv_header())?;
    for record in records {
        write!(writer, "{},{},{},{}", record.tp, record.fn_, record.fp, record.tn)?;
        for value in record.metrics() {
            match value {
                Some(v) => write!(writer, ",{v}")?,
                None => write!(writer, ",")?,
            }
        }
        writeln!(writer)?;
    }
    writer.flush()
}

/// Pretty-printed JSON array of records
pub fn write_json<W: Write>(writer: &mut W, records: &[MatrixRecord]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, records)?;
    writeln!(writer)?;
    writer.flush()
}
