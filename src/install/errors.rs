//! Error types for installation operations.
//!
//! Every variant is terminal for the invocation that produced it: the
//! installer never retries, it reports the error and exits nonzero. The
//! variants separate what the operator can fix (manifest configuration) from
//! what the network did (transport and HTTP status) and what the filesystem
//! did.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while installing the managed binary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InstallError {
    /// The manifest has no repository entry, so there is nowhere to
    /// download from.
    #[error("repository URL not found in manifest")]
    MissingRepositoryUrl,

    /// The manifest's repository URL is not a recognizable GitHub
    /// owner/repo reference.
    #[error("cannot parse GitHub repository URL: {url}")]
    InvalidRepositoryUrl {
        /// The URL that failed to parse.
        url: String,
    },

    /// The HTTP request itself failed (DNS, connect, TLS, read).
    #[error("request to {url} failed: {source}")]
    Request {
        /// The download URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The release server answered with a non-success status.
    ///
    /// A 404 here usually means no artifact was published for this
    /// platform/version pair.
    #[error("download of {url} failed: HTTP {status}")]
    HttpStatus {
        /// The download URL.
        url: String,
        /// The response status, including its canonical reason text.
        status: reqwest::StatusCode,
    },

    /// A directory or file operation under the install root failed.
    #[error("filesystem error at {path}: {source}")]
    Io {
        /// The path being created or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
