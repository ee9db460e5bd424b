//! Install location layout.
//!
//! All paths flow from one rule: the managed binary lives at
//! `<root>/bin/<name><suffix>`. The fetcher writes that path, the launcher
//! reads it, and both derive it through [`InstallLayout`] so they can never
//! disagree.

use crate::platform::PlatformTriple;
use std::io;
use std::path::{Path, PathBuf};

/// The install root and the target-path convention under it.
#[derive(Debug, Clone)]
pub struct InstallLayout {
    root: PathBuf,
}

impl InstallLayout {
    /// Create a layout rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Derive the default layout from the running executable's location.
    ///
    /// The shim binaries are shipped in a directory one level below the
    /// package root, so the root is the parent of the executable's
    /// directory. Fails only if the executable path cannot be determined or
    /// is too shallow to have one.
    pub fn from_current_exe() -> io::Result<Self> {
        let exe = std::env::current_exe()?;
        let root = exe
            .parent()
            .and_then(Path::parent)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no package root above {}", exe.display()),
                )
            })?
            .to_path_buf();
        Ok(Self { root })
    }

    /// The install root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The directory the managed binary is installed into.
    pub fn bin_dir(&self) -> PathBuf {
        self.root.join("bin")
    }

    /// The full target path for a binary on the given platform.
    ///
    /// Pure function of the binary name and the platform's executable
    /// suffix; calling it twice with the same inputs always yields the same
    /// path.
    pub fn binary_path(&self, name: &str, platform: &PlatformTriple) -> PathBuf {
        self.bin_dir()
            .join(format!("{name}{}", platform.exe_suffix()))
    }
}
