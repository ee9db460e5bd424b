//! Idempotent installation of the managed binary.
//!
//! This module implements the install-time half of the shim: given the
//! manifest triple and an install root, make sure the platform's release
//! artifact is present and executable at the fixed target path. Re-running
//! against an existing install is a cheap no-op.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use pm_shim::{ensure_installed, InstallLayout, InstallOutcome, Manifest, BINARY_NAME};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manifest = Manifest::load(Path::new("package.json"))?;
//!     let layout = InstallLayout::from_current_exe()?;
//!
//!     match ensure_installed(&manifest, BINARY_NAME, &layout).await? {
//!         InstallOutcome::Downloaded { path } => println!("installed {}", path.display()),
//!         InstallOutcome::AlreadyInstalled { path } => println!("kept {}", path.display()),
//!     }
//!     Ok(())
//! }
//! ```

mod errors;
mod fetcher;
mod release;

pub use errors::InstallError;
pub use fetcher::{ensure_installed, InstallOutcome};
