//! Package manifest access.
//!
//! The shim reads exactly three things from its package metadata file: the
//! package name, the released version, and the repository URL the release
//! artifacts are published under. The file is the `package.json` shipped next
//! to the shim binaries, so the field layout follows that shape.

use semver::Version;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Repository reference inside the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// Repository URL (e.g. `https://github.com/acme/tool.git`).
    pub url: String,
}

/// The name/version/repository triple driving an install.
///
/// Loaded once at install time and immutable afterwards. The version is a
/// [`semver::Version`], which rejects a leading `v` at parse time — release
/// tags add the `v` prefix themselves, so a manifest carrying one would
/// produce a `vv` tag and a guaranteed download failure.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// use pm_shim::Manifest;
///
/// let manifest = Manifest::load(Path::new("package.json"))?;
/// println!("installing {} {}", manifest.name, manifest.version);
/// # Ok::<(), pm_shim::ManifestError>(())
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Package name.
    pub name: String,

    /// Released version, without a leading `v`.
    pub version: Version,

    /// Where release artifacts are published. Absent in manifests that were
    /// never wired up for binary distribution; the fetcher reports that as a
    /// configuration error.
    #[serde(default)]
    pub repository: Option<Repository>,
}

/// Errors reading or parsing the manifest file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("failed to read manifest at {path}: {source}")]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The manifest file is not valid JSON or is missing required fields.
    #[error("failed to parse manifest at {path}: {source}")]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

impl Manifest {
    /// Load the manifest from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The repository URL, if the manifest carries one.
    pub fn repository_url(&self) -> Option<&str> {
        self.repository.as_ref().map(|r| r.url.as_str())
    }
}
