//! Binary download and placement.

use crate::install::errors::InstallError;
use crate::install::release::{artifact_file_name, download_url};
use crate::layout::InstallLayout;
use crate::manifest::Manifest;
use crate::platform::PlatformTriple;
use crate::repository::RepoRef;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// What [`ensure_installed`] did for this invocation.
///
/// Both variants are success: the contract is "the binary is present at the
/// returned path", not "a download happened".
#[derive(Debug, Clone)]
pub enum InstallOutcome {
    /// The artifact was downloaded and installed at `path`.
    Downloaded {
        /// The installed binary.
        path: PathBuf,
    },

    /// A binary already existed at `path`; nothing was downloaded and its
    /// contents were not inspected.
    AlreadyInstalled {
        /// The pre-existing binary.
        path: PathBuf,
    },
}

impl InstallOutcome {
    /// The path the binary is available at.
    pub fn path(&self) -> &Path {
        match self {
            Self::Downloaded { path } | Self::AlreadyInstalled { path } => path,
        }
    }

    /// Whether this invocation performed a download.
    pub fn was_downloaded(&self) -> bool {
        matches!(self, Self::Downloaded { .. })
    }
}

/// Make sure the platform's release binary is installed under `layout`.
///
/// This is the install-time entry point. It validates the manifest's
/// repository reference, resolves the running platform, and downloads
/// `<binary_name>-<os>-<arch><suffix>` from the release tagged
/// `v<version>` — unless the target file already exists, in which case it
/// returns immediately without touching the network.
///
/// The write is staged through a temporary file in the destination directory
/// and renamed into place with the executable bit set, so a failed download
/// never leaves a partial file at the target path.
///
/// # Errors
///
/// Configuration problems ([`InstallError::MissingRepositoryUrl`],
/// [`InstallError::InvalidRepositoryUrl`]) are reported before any
/// filesystem or network work. Transport failures, non-success HTTP
/// statuses, and filesystem failures abort the install; none are retried.
pub async fn ensure_installed(
    manifest: &Manifest,
    binary_name: &str,
    layout: &InstallLayout,
) -> Result<InstallOutcome, InstallError> {
    let repo_url = manifest
        .repository_url()
        .ok_or(InstallError::MissingRepositoryUrl)?;
    let repo = RepoRef::parse(repo_url).ok_or_else(|| InstallError::InvalidRepositoryUrl {
        url: repo_url.to_string(),
    })?;

    let platform = PlatformTriple::current();
    let target = layout.binary_path(binary_name, &platform);

    let bin_dir = layout.bin_dir();
    tokio::fs::create_dir_all(&bin_dir)
        .await
        .map_err(|source| InstallError::Io {
            path: bin_dir.clone(),
            source,
        })?;

    // Existence is the whole idempotence check; contents are trusted.
    if target.exists() {
        info!(path = %target.display(), "binary already installed, skipping download");
        return Ok(InstallOutcome::AlreadyInstalled { path: target });
    }

    let file_name = artifact_file_name(binary_name, &platform);
    let url = download_url(&repo, &manifest.version, &file_name);
    info!(%url, "downloading release binary");

    let body = fetch(&url).await?;
    write_executable(&bin_dir, &target, &body)?;

    info!(path = %target.display(), bytes = body.len(), "binary installed");
    Ok(InstallOutcome::Downloaded { path: target })
}

/// Perform the single GET and return the full response body.
async fn fetch(url: &str) -> Result<Vec<u8>, InstallError> {
    let request_error = |source| InstallError::Request {
        url: url.to_string(),
        source,
    };

    let client = reqwest::Client::builder()
        .user_agent(concat!("pm-shim/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(request_error)?;

    let response = client.get(url).send().await.map_err(request_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(InstallError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    let body = response.bytes().await.map_err(request_error)?;
    Ok(body.to_vec())
}

/// Write `bytes` to `target` with mode 0755, atomically.
///
/// The temporary file is created in the destination directory so the final
/// rename stays on one filesystem; until it happens nothing is visible at
/// the target path.
fn write_executable(dir: &Path, target: &Path, bytes: &[u8]) -> Result<(), InstallError> {
    let io_error = |path: &Path| {
        let path = path.to_path_buf();
        move |source| InstallError::Io { path, source }
    };

    let mut staged = tempfile::NamedTempFile::new_in(dir).map_err(io_error(dir))?;
    staged.write_all(bytes).map_err(io_error(staged.path()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        staged
            .as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o755))
            .map_err(io_error(staged.path()))?;
    }

    staged
        .persist(target)
        .map_err(|e| InstallError::Io {
            path: target.to_path_buf(),
            source: e.error,
        })?;
    Ok(())
}
