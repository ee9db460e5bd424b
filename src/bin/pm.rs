//! Launcher shim: forwards every invocation to the installed `pm` binary.
//!
//! This is the user-facing entry point. It computes the installed binary's
//! path from its own location, hands over argv and the standard streams
//! untouched, and exits with the child's code. On the success path it emits
//! nothing of its own, so the child's output is all there is.

use pm_shim::{launch, InstallLayout, LaunchError, PlatformTriple, BINARY_NAME};
use std::process;

fn main() {
    let layout = match InstallLayout::from_current_exe() {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("pm: cannot determine install root: {e}");
            process::exit(1);
        }
    };

    let platform = PlatformTriple::current();
    let binary = layout.binary_path(BINARY_NAME, &platform);
    let args = std::env::args_os().skip(1);

    match launch(&binary, args) {
        Ok(code) => process::exit(code),
        Err(e @ LaunchError::NotFound { .. }) => {
            eprintln!("pm: {e}");
            eprintln!("pm: run pm-install to download the binary for this platform");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("pm: {e}");
            process::exit(1);
        }
    }
}
