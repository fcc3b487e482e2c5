//! File logging through `tracing`.
//!
//! The TUI owns the terminal, so logs go to a file. Follow them with
//! `tail -f ~/.local/state/shelfview/shelfview.log` in another terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Why the log file could not be set up.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The path has no file name or no directory part.
    #[error("log path {0:?} must name a file inside a directory")]
    BadPath(PathBuf),

    /// The log directory could not be created.
    #[error("cannot create log directory {dir:?}: {source}")]
    CreateDir {
        /// Directory that was requested.
        dir: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A global subscriber is already installed.
    #[error("logging is already initialized")]
    AlreadyInitialized,
}

/// `(directory, file name)` for the appender.
fn split_log_path(log_path: &Path) -> Result<(&Path, &str), LoggingError> {
    let bad = || LoggingError::BadPath(log_path.to_path_buf());
    let file_name = log_path.file_name().and_then(|n| n.to_str()).ok_or_else(bad)?;
    let directory = log_path.parent().ok_or_else(bad)?;
    Ok((directory, file_name))
}

/// `RUST_LOG` if set and valid, else [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber, writing plain-text events to `log_path`.
///
/// The directory is created when missing. Filtering follows [`env_filter`].
///
/// # Errors
///
/// See [`LoggingError`].
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let (directory, file_name) = split_log_path(log_path)?;

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::CreateDir {
        dir: directory.to_path_buf(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(tracing_appender::rolling::never(directory, file_name))
        .with_ansi(false)
        .with_thread_names(true)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}
