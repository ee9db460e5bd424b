//! Release artifact naming and download URLs.
//!
//! Both functions are pure: the artifact name is
//! `<binary>-<os>-<arch><suffix>` and the URL is the GitHub release download
//! path for the `v<version>` tag. Keeping them free of I/O pins the naming
//! convention down in unit tests.

use crate::platform::PlatformTriple;
use crate::repository::RepoRef;
use semver::Version;

/// The artifact file name published for a binary on a platform.
pub(crate) fn artifact_file_name(binary_name: &str, platform: &PlatformTriple) -> String {
    format!(
        "{binary_name}-{}-{}{}",
        platform.os,
        platform.arch,
        platform.exe_suffix()
    )
}

/// The full download URL for an artifact of a tagged release.
///
/// Release tags carry a `v` prefix; the manifest version does not.
pub(crate) fn download_url(repo: &RepoRef, version: &Version, file_name: &str) -> String {
    format!(
        "https://github.com/{}/{}/releases/download/v{version}/{file_name}",
        repo.owner, repo.repo
    )
}
