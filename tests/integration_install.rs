//! Integration tests for the install/launch pair.
//!
//! Everything here runs against temporary directories and stub scripts; no
//! test touches the network. Download-path behavior that would need a live
//! release (HTTP status handling, body writes) is covered by unit tests on
//! the pure pieces and by the short-circuit guarantees exercised below.

use pm_shim::{
    ensure_installed, launch, InstallLayout, InstallOutcome, Manifest, PlatformTriple, BINARY_NAME,
};
use std::path::Path;

fn manifest(json: &str) -> Manifest {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("package.json");
    std::fs::write(&path, json).unwrap();
    Manifest::load(&path).unwrap()
}

fn seeded_layout(contents: &[u8]) -> (tempfile::TempDir, InstallLayout, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let layout = InstallLayout::new(dir.path());
    let target = layout.binary_path(BINARY_NAME, &PlatformTriple::current());
    std::fs::create_dir_all(layout.bin_dir()).unwrap();
    std::fs::write(&target, contents).unwrap();
    (dir, layout, target)
}

#[tokio::test(flavor = "current_thread")]
async fn test_existing_binary_short_circuits() {
    let (_dir, layout, target) = seeded_layout(b"already here");
    let manifest = manifest(
        r#"{
            "name": "pm",
            "version": "1.2.3",
            "repository": { "url": "git@github.com:acme/tool.git" }
        }"#,
    );

    let outcome = ensure_installed(&manifest, BINARY_NAME, &layout)
        .await
        .unwrap();

    assert!(!outcome.was_downloaded());
    assert_eq!(outcome.path(), target);
    // The pre-existing file is trusted and untouched.
    assert_eq!(std::fs::read(&target).unwrap(), b"already here");
}

#[tokio::test(flavor = "current_thread")]
async fn test_repeated_installs_are_noops() {
    let (_dir, layout, _target) = seeded_layout(b"v1 payload");
    // An unroutable repository URL: if either call tried the network it
    // would fail, so two clean AlreadyInstalled results prove neither did.
    let manifest = manifest(
        r#"{
            "name": "pm",
            "version": "9.9.9",
            "repository": { "url": "https://github.com/nobody/definitely-not-published" }
        }"#,
    );

    for _ in 0..2 {
        let outcome = ensure_installed(&manifest, BINARY_NAME, &layout)
            .await
            .unwrap();
        assert!(matches!(outcome, InstallOutcome::AlreadyInstalled { .. }));
    }
}

#[tokio::test(flavor = "current_thread")]
async fn test_config_errors_leave_no_target_file() {
    let dir = tempfile::tempdir().unwrap();
    let layout = InstallLayout::new(dir.path());
    let manifest = manifest(r#"{ "name": "pm", "version": "1.0.0" }"#);

    let result = ensure_installed(&manifest, BINARY_NAME, &layout).await;

    assert!(result.is_err());
    let target = layout.binary_path(BINARY_NAME, &PlatformTriple::current());
    assert!(!target.exists());
}

#[tokio::test(flavor = "current_thread")]
async fn test_bin_dir_creation_is_idempotent() {
    let (_dir, layout, _target) = seeded_layout(b"payload");
    // bin/ already exists from seeding; a second ensure must not mind.
    let manifest = manifest(
        r#"{
            "name": "pm",
            "version": "1.2.3",
            "repository": { "url": "https://github.com/acme/tool" }
        }"#,
    );

    let outcome = ensure_installed(&manifest, BINARY_NAME, &layout)
        .await
        .unwrap();
    assert!(matches!(outcome, InstallOutcome::AlreadyInstalled { .. }));
}

#[cfg(unix)]
mod launch_forwarding {
    use super::*;
    use std::ffi::OsString;
    use std::os::unix::fs::PermissionsExt;

    /// Install a stub "binary" into a layout the way the fetcher would.
    fn install_stub(layout: &InstallLayout, script: &str) -> std::path::PathBuf {
        let target = layout.binary_path(BINARY_NAME, &PlatformTriple::current());
        std::fs::create_dir_all(layout.bin_dir()).unwrap();
        std::fs::write(&target, script).unwrap();
        std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o755)).unwrap();
        target
    }

    #[test]
    fn test_launcher_forwards_child_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let layout = InstallLayout::new(dir.path());
        let target = install_stub(&layout, "#!/bin/sh\nexit 7\n");

        let code = launch(&target, std::iter::empty()).unwrap();
        assert_eq!(code, 7);
    }

    #[test]
    fn test_launcher_forwards_stdout_through_inherited_streams() {
        let dir = tempfile::tempdir().unwrap();
        let layout = InstallLayout::new(dir.path());
        let out = dir.path().join("stdout.txt");
        // Redirect inside the child: what lands in the file is exactly what
        // the child wrote to its (inherited) stdout descriptor.
        let target = install_stub(
            &layout,
            &format!("#!/bin/sh\necho unaltered > \"{}\"\n", out.display()),
        );

        let code = launch(&target, std::iter::empty()).unwrap();
        assert_eq!(code, 0);
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "unaltered\n");
    }

    #[test]
    fn test_launcher_passes_argv_to_installed_binary() {
        let dir = tempfile::tempdir().unwrap();
        let layout = InstallLayout::new(dir.path());
        let out = dir.path().join("argv.txt");
        let target = install_stub(
            &layout,
            &format!("#!/bin/sh\nprintf '%s\\n' \"$@\" > \"{}\"\n", out.display()),
        );

        let args = [OsString::from("init"), OsString::from("--verbose")];
        launch(&target, args).unwrap();

        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "init\n--verbose\n"
        );
    }

    #[test]
    fn test_missing_binary_diagnostic_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let layout = InstallLayout::new(dir.path());
        let target = layout.binary_path(BINARY_NAME, &PlatformTriple::current());

        let err = launch(&target, std::iter::empty()).unwrap_err();
        assert!(err.to_string().contains(&target.display().to_string()));
    }
}

#[test]
fn test_target_path_shared_between_fetcher_and_launcher() {
    // Both sides derive the path through the same layout function, so the
    // fetcher's output location and the launcher's lookup location agree.
    let layout = InstallLayout::new("/opt/pm");
    let platform = PlatformTriple::current();

    let path = layout.binary_path(BINARY_NAME, &platform);
    assert!(path.starts_with(Path::new("/opt/pm/bin")));
    assert!(path
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with(BINARY_NAME));
}
