//! Logging initialization and configuration.
//!
//! Stdout carries the hook response, so logs never go there. By default they
//! are written to stderr. With a log directory configured, each run gets its
//! own log file instead.
//!
//! # Configuration
//!
//! The log level can be controlled via the `RUST_LOG` environment variable:
//! - `RUST_LOG=debug` - Show which rule matched and why
//! - `RUST_LOG=info` - Show deny and warn decisions (default for file logs)
//! - `RUST_LOG=warn` - Show warnings and errors only (default for stderr)
//! - `RUST_LOG=error` - Show errors only

use std::fs;
use std::path::Path;

use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system.
///
/// With `log_dir` set, logs are written to a new file per run, e.g.
/// `logs/safety-guard.2024-12-06-14-30-25.log`. The returned guard must be
/// held until exit so buffered lines are flushed.
///
/// An empty `log_dir` counts as unset. If the directory or file cannot be
/// created, logging falls back to stderr.
pub fn init_logging(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    if let Some(dir) = log_dir.filter(|d| !d.as_os_str().is_empty()) {
        match open_log_file(dir) {
            Ok((file, path)) => {
                // Use non-blocking writer so rule evaluation never waits on disk
                let (non_blocking, guard) = tracing_appender::non_blocking(file);

                let file_layer = fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false) // No ANSI colors in log files
                    .with_target(true) // Include module path
                    .with_line_number(true);

                tracing_subscriber::registry()
                    .with(env_filter("info"))
                    .with(file_layer)
                    .init();

                tracing::info!("Logging initialized - writing to {}", path.display());
                return Some(guard);
            }
            Err(e) => {
                eprintln!("Warning: Failed to open log file in {}: {}", dir.display(), e);
            }
        }
    }

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter("warn"))
        .with(stderr_layer)
        .init();

    None
}

/// `RUST_LOG` if set and valid, otherwise `default`.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Create `dir` and a fresh timestamped log file inside it.
fn open_log_file(dir: &Path) -> std::io::Result<(fs::File, std::path::PathBuf)> {
    fs::create_dir_all(dir)?;

    // Format: safety-guard.2024-12-06-14-30-25.log
    let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S");
    let path = dir.join(log_file_name(&timestamp.to_string()));

    // Several hook calls can land in the same second; append rather than clobber
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

fn log_file_name(timestamp: &str) -> String {
    format!("safety-guard.{}.log", timestamp)
}
