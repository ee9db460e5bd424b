//! Platform resolution for release artifact naming.
//!
//! Release artifacts are published per platform under a fixed naming
//! convention (`pm-linux-x64`, `pm-windows-arm64.exe`, ...). This module maps
//! the ambient OS and CPU identifiers onto that convention.
//!
//! Resolution never fails: identifiers outside the known tables pass through
//! unchanged via the `Other` variants, so a new release target works without
//! a shim change. An unsupported platform surfaces later as a download
//! failure for a nonexistent artifact, which is the one place that can report
//! it usefully.

use std::env::consts::{ARCH, OS};
use std::fmt;

/// Operating system tag used in release artifact names.
///
/// # Example
///
/// ```rust
/// use pm_shim::OsTag;
///
/// assert_eq!(OsTag::Linux.to_string(), "linux");
///
/// let unknown = OsTag::Other { raw: "freebsd".to_string() };
/// assert_eq!(unknown.to_string(), "freebsd");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum OsTag {
    /// macOS, tagged `macos`.
    #[strum(to_string = "macos")]
    MacOs,
    /// Linux, tagged `linux`.
    #[strum(to_string = "linux")]
    Linux,
    /// Windows, tagged `windows`.
    #[strum(to_string = "windows")]
    Windows,
    /// Unrecognized operating system, passed through as-is.
    #[strum(to_string = "{raw}")]
    Other {
        /// The raw OS identifier.
        raw: String,
    },
}

impl OsTag {
    /// Map a raw OS identifier (as in `std::env::consts::OS`) to its tag.
    fn from_raw(os: &str) -> Self {
        match os {
            "macos" => Self::MacOs,
            "linux" => Self::Linux,
            "windows" => Self::Windows,
            other => Self::Other {
                raw: other.to_string(),
            },
        }
    }

    /// Whether this OS uses the Windows executable convention.
    pub fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }
}

/// CPU architecture tag used in release artifact names.
///
/// # Example
///
/// ```rust
/// use pm_shim::ArchTag;
///
/// assert_eq!(ArchTag::X64.to_string(), "x64");
/// assert_eq!(ArchTag::Arm64.to_string(), "arm64");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum ArchTag {
    /// 64-bit x86 (`x86_64`), tagged `x64`.
    #[strum(to_string = "x64")]
    X64,
    /// 64-bit ARM (`aarch64`), tagged `arm64`.
    #[strum(to_string = "arm64")]
    Arm64,
    /// Unrecognized architecture, passed through as-is.
    #[strum(to_string = "{raw}")]
    Other {
        /// The raw architecture identifier.
        raw: String,
    },
}

impl ArchTag {
    /// Map a raw architecture identifier (as in `std::env::consts::ARCH`)
    /// to its tag.
    fn from_raw(arch: &str) -> Self {
        match arch {
            "x86_64" => Self::X64,
            "aarch64" => Self::Arm64,
            other => Self::Other {
                raw: other.to_string(),
            },
        }
    }
}

/// The resolved platform: which release artifact variant applies here.
///
/// Constructed once per process via [`PlatformTriple::current`] and never
/// mutated. The executable suffix is derived from the OS tag rather than
/// stored, so the triple cannot hold an inconsistent pair.
///
/// # Example
///
/// ```rust
/// use pm_shim::PlatformTriple;
///
/// let platform = PlatformTriple::current();
/// println!("artifacts for this host end in -{platform}{}", platform.exe_suffix());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformTriple {
    /// Operating system tag.
    pub os: OsTag,
    /// CPU architecture tag.
    pub arch: ArchTag,
}

impl PlatformTriple {
    /// Resolve the platform the current process is running on.
    ///
    /// Pure lookup over `std::env::consts`; no side effects, no error path.
    pub fn current() -> Self {
        Self::from_os_arch(OS, ARCH)
    }

    /// Build a triple from raw OS/arch identifiers.
    ///
    /// Exposed so callers (and tests) can resolve for a platform other than
    /// the running one.
    pub fn from_os_arch(os: &str, arch: &str) -> Self {
        Self {
            os: OsTag::from_raw(os),
            arch: ArchTag::from_raw(arch),
        }
    }

    /// The executable filename suffix on this platform.
    ///
    /// `".exe"` on Windows, empty everywhere else.
    pub fn exe_suffix(&self) -> &'static str {
        if self.os.is_windows() {
            ".exe"
        } else {
            ""
        }
    }
}

impl fmt::Display for PlatformTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}
