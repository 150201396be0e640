//! One reconstruction run: resolve parameters, compute, log, emit

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use color_eyre::eyre::WrapErr;
use revmatrix_core::{MetricColumns, Reconstruction, ReconstructionConfig, compute};

use crate::output::{Columns, OutputFormat, write_records};
use crate::params::RunParameters;

/// Message printed when the target accuracy cannot be realised
pub const NO_COMBINATIONS_MESSAGE: &str =
    "There are no combinations that can achieve this accuracy.";

/// Exit status when no correct-prediction count reproduces the accuracy
pub const EXIT_NO_COMBINATIONS: u8 = 2;

/// Everything one invocation needs once logging is set up
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    /// YAML parameter file loaded beneath `overrides`
    pub params_file: Option<PathBuf>,
    /// Values given on the command line
    pub overrides: RunParameters,
    /// Output file; `None` writes to stdout
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub columns: Columns,
}

/// How an invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Records were written (possibly none, when filters rejected them all)
    Written(usize),
    /// The accuracy is unreachable; nothing was written
    NoCombinations,
}

impl RunOutcome {
    /// Process exit status for this outcome
    #[must_use]
    pub fn exit_status(&self) -> u8 {
        match self {
            RunOutcome::Written(_) => 0,
            RunOutcome::NoCombinations => EXIT_NO_COMBINATIONS,
        }
    }

    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

/// Resolve parameters, reconstruct and write the records.
///
/// Records go to the requested output file, or to `stdout` when none is
/// given. An unreachable accuracy prints [`NO_COMBINATIONS_MESSAGE`] to
/// `stderr` and leaves the output file uncreated.
pub fn execute<O: Write, E: Write>(
    request: &RunRequest,
    stdout: &mut O,
    stderr: &mut E,
) -> color_eyre::Result<RunOutcome> {
    let base = match &request.params_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading parameter file");
            RunParameters::load(path)?
        }
        None => RunParameters::default(),
    };
    let config = base.merge(request.overrides.clone()).into_config()?;

    let result = reconstruct(&config)?;
    if result.is_no_accuracy_match() {
        writeln!(stderr, "{NO_COMBINATIONS_MESSAGE}")?;
        return Ok(RunOutcome::NoCombinations);
    }

    let columns = request.columns.into();
    let written = match &request.output {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            emit(&mut writer, &config, &result, request.format, columns)?
        }
        None => emit(stdout, &config, &result, request.format, columns)?,
    };
    Ok(RunOutcome::Written(written))
}

/// Run the reconstruction and log each stage's outcome
pub fn reconstruct(config: &ReconstructionConfig) -> color_eyre::Result<Reconstruction> {
    tracing::info!(
        class_a = config.composition.class_a_count,
        class_b = config.composition.class_b_count,
        decimal_places = config.decimal_places,
        accuracy = config.targets.accuracy,
        sensitivity = ?config.targets.sensitivity,
        specificity = ?config.targets.specificity,
        f1 = ?config.targets.f1,
        precision = ?config.targets.precision,
        "Starting reconstruction"
    );

    let result = compute(config).wrap_err("invalid reconstruction parameters")?;

    match &result.range {
        None => {
            tracing::warn!(
                accuracy = config.targets.accuracy,
                "No correct-prediction count reproduces the target accuracy"
            );
        }
        Some(range) => {
            tracing::info!(
                max_correct = range.max_correct(),
                min_correct = ?range.min_correct(),
                span = range.span(),
                "Accuracy range found"
            );
            tracing::info!(
                candidates = result.candidates,
                retained = result.matrices.len(),
                status = ?result.status,
                "Reconstruction complete"
            );
        }
    }

    Ok(result)
}

/// Write the records of a finished reconstruction to `writer`.
///
/// Returns the number of records written.
pub fn emit<W: Write>(
    writer: &mut W,
    config: &ReconstructionConfig,
    result: &Reconstruction,
    format: OutputFormat,
    columns: MetricColumns,
) -> color_eyre::Result<usize> {
    let records = result.records(config, columns);
    write_records(writer, format, &records).wrap_err("failed to write output records")?;
    tracing::debug!(records = records.len(), format = ?format, "Output written");
    Ok(records.len())
}
