//! # pm-shim
//!
//! Installer/launcher shim for the `pm` binary.
//!
//! This crate keeps the right prebuilt `pm` executable on disk and runs it.
//! It resolves the host operating system and CPU architecture, downloads the
//! matching artifact from a GitHub release, places it at a fixed path under
//! the install root, and forwards every invocation (argv, stdio, exit code)
//! to that binary.
//!
//! ## Components
//!
//! - [`PlatformTriple`] resolving the OS/arch tags used in artifact names
//! - [`Manifest`] holding the name/version/repository triple
//! - [`ensure_installed`] performing the idempotent download
//! - [`launch`] spawning the installed binary and mirroring its exit status
//!
//! The two binaries in `src/bin/` are thin wrappers: `pm-install` runs the
//! fetcher once at install time, `pm` forwards every user invocation.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use pm_shim::{ensure_installed, InstallLayout, Manifest, BINARY_NAME};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manifest = Manifest::load(Path::new("package.json"))?;
//!     let layout = InstallLayout::new("/opt/pm");
//!
//!     let outcome = ensure_installed(&manifest, BINARY_NAME, &layout).await?;
//!     println!("pm available at {}", outcome.path().display());
//!
//!     Ok(())
//! }
//! ```

mod install;
mod launch;
mod layout;
mod manifest;
mod platform;
mod repository;

pub use install::{ensure_installed, InstallError, InstallOutcome};
pub use launch::{launch, LaunchError};
pub use layout::InstallLayout;
pub use manifest::{Manifest, ManifestError, Repository};
pub use platform::{ArchTag, OsTag, PlatformTriple};
pub use repository::RepoRef;

/// Name of the managed binary installed under `<root>/bin/`.
pub const BINARY_NAME: &str = "pm";
