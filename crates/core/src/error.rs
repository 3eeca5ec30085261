//! Error types shared across the launcher crates.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for launcher operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while installing or delegating to the grove
/// executable.
#[derive(Error, Debug)]
pub enum Error {
    /// The host platform has no published release artifact.
    #[error("cannot install grove for platform {os}, architecture {arch}")]
    UnsupportedPlatform {
        /// OS identifier reported by the host.
        os: String,
        /// CPU architecture identifier reported by the host.
        arch: String,
    },

    /// The release host answered with a non-success status.
    #[error("download failed\n\nurl: {url}\nstatus: {status}")]
    DownloadFailed {
        /// The artifact URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The request never produced a response (DNS, TLS, connection loss).
    #[error("request for '{url}' failed: {message}")]
    Fetch {
        /// The artifact URL.
        url: String,
        /// Transport-level error message.
        message: String,
    },

    /// A filesystem operation failed.
    #[error("failed to {}{}: {}", .operation, path_suffix(.path), .source)]
    Io {
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
        /// The path involved, when one exists.
        path: Option<PathBuf>,
        /// What was being attempted.
        operation: String,
    },

    /// The installed executable could not be started.
    #[error("failed to launch '{}': {source}", .path.display())]
    Spawn {
        /// Path of the executable that would not start.
        path: PathBuf,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" '{}'", p.display()))
        .unwrap_or_default()
}

impl Error {
    /// Create an unsupported platform error from raw host identifiers.
    #[must_use]
    pub fn unsupported_platform(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self::UnsupportedPlatform {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Create a download failed error.
    #[must_use]
    pub fn download_failed(url: impl Into<String>, status: u16) -> Self {
        Self::DownloadFailed {
            url: url.into(),
            status,
        }
    }

    /// Create a transport-level fetch error.
    #[must_use]
    pub fn fetch(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error with the operation that failed.
    #[must_use]
    pub fn io(source: std::io::Error, path: Option<PathBuf>, operation: impl Into<String>) -> Self {
        Self::Io {
            source,
            path,
            operation: operation.into(),
        }
    }

    /// Create a spawn error for the given executable path.
    #[must_use]
    pub fn spawn(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Spawn {
            path: path.into(),
            source,
        }
    }
}
