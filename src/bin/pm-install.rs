//! Install-time hook: fetch the platform's `pm` binary from GitHub releases.
//!
//! Runs once per environment setup (the package manager's postinstall step).
//! Reads `package.json` from the install root, downloads the matching release
//! artifact if it is not already present, and exits nonzero on any failure so
//! the surrounding install aborts visibly.

use anyhow::{Context, Result};
use pm_shim::{ensure_installed, InstallLayout, InstallOutcome, Manifest, BINARY_NAME};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        tracing::error!("install failed: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let layout = InstallLayout::from_current_exe().context("cannot determine install root")?;

    // Optional manifest path override, mainly for local testing.
    let manifest_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| layout.root().join("package.json"));
    let manifest = Manifest::load(&manifest_path)?;

    match ensure_installed(&manifest, BINARY_NAME, &layout).await? {
        InstallOutcome::Downloaded { path } => {
            tracing::info!("binary installed successfully: {}", path.display());
        }
        InstallOutcome::AlreadyInstalled { path } => {
            tracing::info!("binary already present: {}", path.display());
        }
    }

    Ok(())
}
