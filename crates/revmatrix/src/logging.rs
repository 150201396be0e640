use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Size limits applied to the log file at start-up
#[derive(Debug, Clone, Copy)]
struct RotationLimits {
    /// Rotate once the file grows past this many bytes
    max_bytes: u64,
    /// Bytes of recent output kept after rotation
    keep_bytes: u64,
}

/// 5 MB cap, keeping the most recent 1 MB
const DEFAULT_LIMITS: RotationLimits = RotationLimits {
    max_bytes: 5 * 1024 * 1024,
    keep_bytes: 1024 * 1024,
};

const ROTATION_MARKER: &[u8] = b"--- Log rotated (older entries removed) ---\n";

const LOG_FILE_NAME: &str = "revmatrix.log";

/// Where log output goes
#[derive(Debug, Clone)]
pub enum LogTarget {
    /// Append to `{data_dir}/revmatrix.log`
    File(PathBuf),
    /// Write to standard error
    Stderr,
}

/// Default data directory (~/.revmatrix/)
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".revmatrix")
}

/// Trim the log at `path` to its most recent lines once it outgrows
/// `limits`. Returns whether the file was rewritten.
fn trim_log(path: &Path, limits: RotationLimits) -> io::Result<bool> {
    let len = match fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if len <= limits.max_bytes {
        return Ok(false);
    }

    let contents = fs::read(path)?;
    let keep = usize::try_from(limits.keep_bytes).unwrap_or(usize::MAX);
    let tail = &contents[contents.len().saturating_sub(keep)..];
    // Start on a line boundary
    let tail = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(tail, |i| &tail[i + 1..]);

    let mut rotated = Vec::with_capacity(ROTATION_MARKER.len() + tail.len());
    rotated.extend_from_slice(ROTATION_MARKER);
    rotated.extend_from_slice(tail);
    fs::write(path, rotated)?;
    Ok(true)
}

/// Initialize logging.
///
/// File logs go to `{data_dir}/revmatrix.log`. At start-up a log larger than
/// 5MB is trimmed to its last 1MB. The level can be set via
/// `level` or overridden with the `RUST_LOG` environment variable.
pub fn init_logging(target: &LogTarget, level: &str) -> color_eyre::Result<()> {
    let default_filter = format!("revmatrix={level},revmatrix_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_ansi(false)
                        .with_target(true),
                )
                .init();
            tracing::debug!("Logging to stderr");
        }
        LogTarget::File(data_dir) => {
            std::fs::create_dir_all(data_dir)?;
            let log_path = data_dir.join(LOG_FILE_NAME);
            let rotation = trim_log(&log_path, DEFAULT_LIMITS);

            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)?;

            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true)
                        .with_thread_ids(false),
                )
                .init();

            tracing::info!(log_path = %log_path.display(), "Logging initialized");
            match rotation {
                Ok(true) => tracing::info!("Log file exceeded its size cap and was trimmed"),
                Ok(false) => {}
                Err(e) => tracing::warn!(error = %e, "Failed to rotate log file"),
            }
        }
    }

    Ok(())
}
