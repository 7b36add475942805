//! Tracing setup.
//!
//! The alternate screen owns stdout and stderr while the TUI runs, so
//! diagnostics are written to a log file under the platform data
//! directory instead. `RUST_LOG` controls the filter; the default is
//! `info`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Errors that can occur while setting up telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// The log file or its directory could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A `log` logger was already installed.
    #[error("failed to install log bridge: {0}")]
    SetLogger(#[from] tracing_log::log::SetLoggerError),

    /// A global subscriber was already installed.
    #[error("failed to install subscriber: {0}")]
    SetSubscriber(#[from] tracing::dispatcher::SetGlobalDefaultError),
}

/// Returns the log file path under the platform data directory.
pub fn default_log_path() -> Result<PathBuf, TelemetryError> {
    let data_dir = dirs::data_dir().ok_or(TelemetryError::NoDataDir)?;
    Ok(data_dir.join("postpad").join("postpad.log"))
}

/// Installs the global subscriber, appending to the default log file.
///
/// Returns the file's path so it can be shown to the user. Call once.
pub fn init() -> Result<PathBuf, TelemetryError> {
    let path = default_log_path()?;
    let file = open_log_file(&path)?;
    init_with_sink(Arc::new(file))?;
    Ok(path)
}

/// Installs the global subscriber writing to `sink`.
///
/// Also bridges `log` records from dependencies into the same sink.
pub fn init_with_sink<Sink>(sink: Sink) -> Result<(), TelemetryError>
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(sink);
    let subscriber = Registry::default().with(env_filter).with(fmt_layer);
    LogTracer::init()?;
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File, TelemetryError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_log_path_is_under_app_dir() {
        if let Ok(path) = default_log_path() {
            assert!(path.ends_with("postpad/postpad.log"));
        }
    }

    #[test]
    fn open_log_file_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("postpad.log");
        let file = open_log_file(&path).unwrap();
        drop(file);
        assert!(path.exists());
    }

    #[test]
    fn open_log_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("postpad.log");
        let mut first = open_log_file(&path).unwrap();
        writeln!(first, "one").unwrap();
        drop(first);
        let mut second = open_log_file(&path).unwrap();
        writeln!(second, "two").unwrap();
        drop(second);
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "one\ntwo\n");
    }

    #[test]
    fn second_install_is_an_error() {
        assert!(init_with_sink(std::io::sink).is_ok());
        assert!(init_with_sink(std::io::sink).is_err());
    }
}
