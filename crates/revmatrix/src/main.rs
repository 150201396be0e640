use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use revmatrix::{
    Columns, LogTarget, OutputFormat, RunOutcome, RunParameters, RunRequest, default_data_dir,
    execute, init_logging,
};

#[derive(Parser, Debug)]
#[command(name = "revmatrix")]
#[command(about = "Reconstruct every confusion matrix consistent with reported metrics")]
struct Args {
    /// YAML parameter file; flags override its values
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Number of positive (class A) samples
    #[arg(long)]
    class_a: Option<u32>,

    /// Number of negative (class B) samples
    #[arg(long)]
    class_b: Option<u32>,

    /// Decimal places the reported metrics were rounded to (default: 2)
    #[arg(short, long)]
    decimal_places: Option<u32>,

    /// Reported accuracy (required)
    #[arg(short, long)]
    accuracy: Option<f64>,

    /// Reported sensitivity (-1 leaves it unconstrained)
    #[arg(long, allow_negative_numbers = true)]
    sensitivity: Option<f64>,

    /// Reported specificity (-1 leaves it unconstrained)
    #[arg(long, allow_negative_numbers = true)]
    specificity: Option<f64>,

    /// Reported F1 score (-1 leaves it unconstrained)
    #[arg(long, allow_negative_numbers = true)]
    f1: Option<f64>,

    /// Reported precision (-1 leaves it unconstrained)
    #[arg(long, allow_negative_numbers = true)]
    precision: Option<f64>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Values written to the metric columns
    #[arg(long, value_enum, default_value_t = Columns::Targets)]
    columns: Columns,

    /// Path to the data directory for logs (default: ~/.revmatrix/)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Log to stderr instead of the data directory
    #[arg(long)]
    log_stderr: bool,
}

impl Args {
    fn request(&self) -> RunRequest {
        RunRequest {
            params_file: self.params.clone(),
            overrides: RunParameters {
                class_a_count: self.class_a,
                class_b_count: self.class_b,
                decimal_places: self.decimal_places,
                accuracy: self.accuracy,
                sensitivity: self.sensitivity,
                specificity: self.specificity,
                f1: self.f1,
                precision: self.precision,
            },
            output: self.output.clone(),
            format: self.format,
            columns: self.columns,
        }
    }

    fn log_target(&self) -> LogTarget {
        if self.log_stderr {
            LogTarget::Stderr
        } else {
            LogTarget::File(self.data_dir.clone().unwrap_or_else(default_data_dir))
        }
    }
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_target(), &args.log_level)?;

    let mut stdout = BufWriter::new(io::stdout().lock());
    let outcome = execute(&args.request(), &mut stdout, &mut io::stderr())?;

    if let RunOutcome::Written(records) = outcome {
        tracing::info!(records, "Application shutting down");
    }
    Ok(outcome.exit_code())
}
