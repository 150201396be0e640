//! Command-line front end for confusion matrix reconstruction
//!
//! The heavy lifting lives in `revmatrix_core`. This crate resolves run
//! parameters from YAML files and flags, sets up logging, and writes the
//! reconstructed matrices as CSV or JSON.

pub mod logging;
pub mod output;
pub mod params;
pub mod run;

pub use logging::{LogTarget, default_data_dir, init_logging};
pub use output::{Columns, OutputFormat};
pub use params::{ParamsError, RunParameters};
pub use run::{
    EXIT_NO_COMBINATIONS, NO_COMBINATIONS_MESSAGE, RunOutcome, RunRequest, emit, execute,
    reconstruct,
};
