//! File-backed tracing setup.
//!
//! The terminal belongs to the UI, so logs go to a file. The filter comes
//! from `PORTAL_LOG` and defaults to `portal=info`.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const ENV_LOG_FILTER: &str = "PORTAL_LOG";
pub const DEFAULT_LOG_FILTER: &str = "portal=info";

/// Build the filter from a `PORTAL_LOG`-style directive string.
/// Missing or invalid directives fall back to the default.
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Open `path` for appending, creating parent directories.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to `path`.
///
/// Returns the path on success. Fails if the file cannot be opened or a
/// subscriber is already installed; callers treat both as non-fatal.
pub fn init_logging(path: &Path) -> io::Result<PathBuf> {
    let file = open_log_file(path)?;
    let directives = std::env::var(ENV_LOG_FILTER).ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(build_filter(directives.as_deref()))
        .try_init()
        .map_err(io::Error::other)?;

    tracing::info!("logging to {}", path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(build_filter(None).to_string(), DEFAULT_LOG_FILTER);
        assert_eq!(build_filter(Some("  ")).to_string(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_custom_filter() {
        assert_eq!(build_filter(Some("portal=debug")).to_string(), "portal=debug");
    }

    #[test]
    fn test_open_log_file_creates_parents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("portal.log");
        let file = open_log_file(&path).expect("open");
        drop(file);
        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_appends() {
        use std::io::Write;

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("portal.log");
        writeln!(open_log_file(&path).expect("open"), "first").expect("write");
        writeln!(open_log_file(&path).expect("open"), "second").expect("write");
        let contents = std::fs::read_to_string(&path).expect("read");
        assert_eq!(contents, "first\nsecond\n");
    }
}
