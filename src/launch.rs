//! Child process launch and exit-status forwarding.
//!
//! The launcher is a pure forwarding shell: it spawns the installed binary
//! with the caller's argument vector, leaves stdin/stdout/stderr wired
//! straight through to the parent's, waits, and hands back the child's exit
//! code. No output is read, buffered, or transformed, and nothing runs after
//! the child.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Errors that can occur when spawning the installed binary.
///
/// A missing binary gets its own variant because it is the common operator
/// mistake — the install step never ran, or failed — and deserves a message
/// that names the expected path rather than a bare OS error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LaunchError {
    /// No binary exists at the expected path.
    #[error("binary not found: {path}")]
    NotFound {
        /// The path that was expected to hold the binary.
        path: PathBuf,
    },

    /// The binary exists but could not be spawned.
    #[error("failed to run {path}: {source}")]
    Spawn {
        /// The binary that failed to spawn.
        path: PathBuf,
        /// Underlying spawn error.
        #[source]
        source: io::Error,
    },
}

/// Run the binary at `path` with `args`, returning the exit code to forward.
///
/// Standard streams are inherited from the parent, so the child's I/O
/// appears on the caller's streams unaltered and the operating system
/// handles all flow control. The call blocks until the child terminates.
///
/// A child killed by a signal has no exit code; that case maps to 0.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// use pm_shim::launch;
///
/// let code = launch(Path::new("/opt/pm/bin/pm"), std::env::args_os().skip(1))?;
/// std::process::exit(code);
/// # Ok::<(), pm_shim::LaunchError>(())
/// ```
pub fn launch<I>(path: &Path, args: I) -> Result<i32, LaunchError>
where
    I: IntoIterator<Item = OsString>,
{
    let status = Command::new(path).args(args).status().map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LaunchError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LaunchError::Spawn {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    Ok(status.code().unwrap_or(0))
}
