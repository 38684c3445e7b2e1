//! Tracing setup for the desktop client and the CLI.
//!
//! Both front ends share one subscriber shape: a registry with a single
//! `RUST_LOG`-aware filter over a list of formatting layers. The desktop client
//! adds a per-launch log file under `.sympred/logs` next to stdout; the CLI
//! only writes to stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::SystemTime;

use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::{self, MakeWriter, time::OffsetTime};
use tracing_subscriber::{EnvFilter, Layer, Registry, prelude::*};

use crate::app_dirs;

/// Launch logs kept in the log directory, newest first.
const KEEP_LOG_FILES: usize = 10;
const LOG_FILE_PREFIX: &str = "sympred_";
const LOG_FILE_EXTENSION: &str = "log";

/// Keeps the file writer flushing until process exit.
static FILE_WRITER_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;
type Timer = OffsetTime<time::format_description::BorrowedFormatItem<'static>>;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("No suitable data directory available for logs")]
    NoDataDir,
    #[error("Failed to prepare log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read log directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to remove old log file {path}: {source}")]
    RemoveFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to create log file at {path}: {source}")]
    CreateLogFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to format log filename time: {0}")]
    FormatTime(time::error::Format),
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(tracing::subscriber::SetGlobalDefaultError),
}

/// Log to stdout and to `sympred_<timestamp>.log`, defaulting to `info`.
///
/// Calling again after a successful init does nothing. Errors are returned so
/// the app can start without logging.
pub fn init() -> Result<(), LoggingError> {
    if FILE_WRITER_GUARD.get().is_some() {
        return Ok(());
    }
    let dir = app_dirs::logs_dir().map_err(|err| match err {
        app_dirs::AppDirError::NoBaseDir => LoggingError::NoDataDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            LoggingError::CreateDir { path, source }
        }
    })?;
    let (log_path, writer, guard) = open_launch_log(&dir, now_local_or_utc())?;
    prune_launch_logs(&dir, KEEP_LOG_FILES)?;

    install(
        "info",
        vec![console_layer(std::io::stdout), file_layer(writer)],
    )?;
    let _ = FILE_WRITER_GUARD.set(guard);
    tracing::info!("Logging to {}", log_path.display());
    Ok(())
}

/// Log to stderr only. `RUST_LOG` still overrides `default_level`.
pub fn init_stderr(default_level: &str) -> Result<(), LoggingError> {
    install(default_level, vec![console_layer(std::io::stderr)])
}

fn install(default_level: &str, layers: Vec<BoxedLayer>) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = Registry::default().with(layers.with_filter(filter));
    tracing::subscriber::set_global_default(subscriber).map_err(LoggingError::SetGlobal)
}

fn console_layer<W>(writer: W) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer().with_timer(timer()).with_writer(writer).boxed()
}

fn file_layer(writer: NonBlocking) -> BoxedLayer {
    fmt::layer()
        .with_ansi(false)
        .with_timer(timer())
        .with_writer(writer)
        .boxed()
}

fn timer() -> Timer {
    const LINE_TIME: &[FormatItem<'static>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetTime::new(offset, LINE_TIME.into())
}

/// Create this launch's file up front so it exists even before the first event.
fn open_launch_log(
    dir: &Path,
    launched_at: OffsetDateTime,
) -> Result<(PathBuf, NonBlocking, WorkerGuard), LoggingError> {
    let path = dir.join(launch_log_name(launched_at)?);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| LoggingError::CreateLogFile {
            path: path.clone(),
            source,
        })?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    Ok((path, writer, guard))
}

fn launch_log_name(launched_at: OffsetDateTime) -> Result<String, LoggingError> {
    const NAME_TIME: &[FormatItem<'_>] =
        format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
    let stamp = launched_at
        .format(NAME_TIME)
        .map_err(LoggingError::FormatTime)?;
    Ok(format!("{LOG_FILE_PREFIX}{stamp}.{LOG_FILE_EXTENSION}"))
}

fn is_launch_log(path: &Path) -> bool {
    let named = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX));
    named && path.extension().and_then(|ext| ext.to_str()) == Some(LOG_FILE_EXTENSION)
}

/// Delete the oldest launch logs so at most `keep` remain. Other files are left alone.
fn prune_launch_logs(dir: &Path, keep: usize) -> Result<(), LoggingError> {
    let listing = fs::read_dir(dir).map_err(|source| LoggingError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut logs: Vec<(SystemTime, PathBuf)> = listing
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|kind| kind.is_file()))
        .map(|entry| entry.path())
        .filter(|path| is_launch_log(path))
        .map(|path| {
            let modified = fs::metadata(&path)
                .and_then(|meta| meta.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, path)
        })
        .collect();
    if logs.len() <= keep {
        return Ok(());
    }
    logs.sort_by(|a, b| b.0.cmp(&a.0));
    for (_, path) in logs.split_off(keep) {
        fs::remove_file(&path).map_err(|source| LoggingError::RemoveFile { path, source })?;
    }
    Ok(())
}

fn now_local_or_utc() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{thread, time::Duration};
    use tempfile::tempdir;

    #[test]
    fn launch_log_name_is_prefixed_timestamp() {
        let launched_at = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        assert_eq!(
            launch_log_name(launched_at).unwrap(),
            "sympred_2023-11-14_22-13-20.log"
        );
    }

    #[test]
    fn launch_log_file_exists_before_any_event() {
        let dir = tempdir().unwrap();
        let launched_at = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let (path, _writer, _guard) = open_launch_log(dir.path(), launched_at).unwrap();
        assert!(path.is_file());
        assert!(is_launch_log(&path));
    }

    #[test]
    fn only_launch_logs_count_as_logs() {
        assert!(is_launch_log(Path::new("sympred_2023-11-14_22-13-20.log")));
        assert!(!is_launch_log(Path::new("other.log")));
        assert!(!is_launch_log(Path::new("sympred_notes.txt")));
    }

    #[test]
    fn pruning_keeps_newest_launch_logs() {
        let dir = tempdir().unwrap();
        for idx in 0..12 {
            fs::write(dir.path().join(format!("sympred_{idx:02}.log")), "").unwrap();
            thread::sleep(Duration::from_millis(10));
        }
        fs::write(dir.path().join("notes.txt"), "keep").unwrap();
        fs::write(dir.path().join("other.log"), "keep").unwrap();

        prune_launch_logs(dir.path(), 10).unwrap();
        let mut remaining: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        remaining.sort();
        assert_eq!(remaining.len(), 12);
        assert!(remaining.contains(&"notes.txt".to_string()));
        assert!(remaining.contains(&"other.log".to_string()));
        assert!(!remaining.contains(&"sympred_00.log".to_string()));
        assert!(!remaining.contains(&"sympred_01.log".to_string()));
        assert!(remaining.contains(&"sympred_11.log".to_string()));
    }
}
