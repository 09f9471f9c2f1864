//! Toolchain variants and per-platform resolution.
//!
//! Build configuration never keys on a raw platform flag. Each platform
//! resolves to a toolchain variant carrying the attributes that matter for
//! link configuration, and modules match on the variant exhaustively, so an
//! unhandled toolchain kind is a compile error rather than a silent
//! fallthrough.

use std::fmt;

use crate::core::platform::TargetPlatform;

/// Services toolset version declared by an installed GDK.
///
/// Vendor libraries ship one binary per toolset, with the integer form
/// embedded in the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GdkToolsetVersion {
    V141,
    V142,
    V143,
}

impl GdkToolsetVersion {
    /// Get the integer form used in vendor library file names.
    pub fn as_int(self) -> u32 {
        match self {
            GdkToolsetVersion::V141 => 141,
            GdkToolsetVersion::V142 => 142,
            GdkToolsetVersion::V143 => 143,
        }
    }

    /// Look up a toolset version by its integer form.
    pub fn from_int(value: u32) -> Option<Self> {
        match value {
            141 => Some(GdkToolsetVersion::V141),
            142 => Some(GdkToolsetVersion::V142),
            143 => Some(GdkToolsetVersion::V143),
            _ => None,
        }
    }
}

impl Default for GdkToolsetVersion {
    fn default() -> Self {
        GdkToolsetVersion::V142
    }
}

impl fmt::Display for GdkToolsetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_int())
    }
}

/// Attributes of a GDK dev-kit installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GdkToolchain {
    /// Services toolset version, when the installed kit declares one.
    pub toolset_ver: Option<GdkToolsetVersion>,
}

impl GdkToolchain {
    /// Create a GDK toolchain with a known toolset version.
    pub fn new(toolset_ver: GdkToolsetVersion) -> Self {
        GdkToolchain {
            toolset_ver: Some(toolset_ver),
        }
    }
}

/// Compiler family for POSIX-style hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilerFamily {
    Gcc,
    Clang,
}

/// The concrete toolchain used to build for a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toolchain {
    /// Microsoft GDK dev kit for the Xbox console family
    GdkDevKit(GdkToolchain),

    /// Desktop MSVC
    Msvc,

    /// GCC or Clang
    Gnu(CompilerFamily),
}

impl Toolchain {
    /// Get the toolchain name for display and plan output.
    pub fn name(&self) -> &'static str {
        match self {
            Toolchain::GdkDevKit(_) => "gdk",
            Toolchain::Msvc => "msvc",
            Toolchain::Gnu(CompilerFamily::Gcc) => "gcc",
            Toolchain::Gnu(CompilerFamily::Clang) => "clang",
        }
    }
}

/// Resolve the toolchain used to build for a platform.
///
/// Xbox platforms get a GDK dev kit with the default toolset version.
/// Desktop platforms get their host compiler. Pure mapping, no host probing.
pub fn toolchain_for(platform: TargetPlatform) -> Toolchain {
    match platform {
        TargetPlatform::XboxOne | TargetPlatform::XboxScarlett => {
            Toolchain::GdkDevKit(GdkToolchain::new(GdkToolsetVersion::default()))
        }
        TargetPlatform::Windows => Toolchain::Msvc,
        TargetPlatform::Linux => Toolchain::Gnu(CompilerFamily::Gcc),
        TargetPlatform::Macos => Toolchain::Gnu(CompilerFamily::Clang),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolset_version_integer_forms() {
        assert_eq!(GdkToolsetVersion::V141.as_int(), 141);
        assert_eq!(GdkToolsetVersion::V142.as_int(), 142);
        assert_eq!(GdkToolsetVersion::V143.as_int(), 143);
    }

    #[test]
    fn test_toolset_version_from_int_round_trip() {
        for version in [
            GdkToolsetVersion::V141,
            GdkToolsetVersion::V142,
            GdkToolsetVersion::V143,
        ] {
            assert_eq!(GdkToolsetVersion::from_int(version.as_int()), Some(version));
        }

        assert_eq!(GdkToolsetVersion::from_int(140), None);
        assert_eq!(GdkToolsetVersion::from_int(0), None);
    }

    #[test]
    fn test_toolset_version_default_is_142() {
        assert_eq!(GdkToolsetVersion::default(), GdkToolsetVersion::V142);
    }

    #[test]
    fn test_toolset_version_display() {
        assert_eq!(GdkToolsetVersion::V143.to_string(), "143");
    }

    #[test]
    fn test_xbox_platforms_resolve_to_gdk() {
        for platform in [TargetPlatform::XboxOne, TargetPlatform::XboxScarlett] {
            match toolchain_for(platform) {
                Toolchain::GdkDevKit(gdk) => {
                    assert_eq!(gdk.toolset_ver, Some(GdkToolsetVersion::V142));
                }
                other => panic!("expected GDK toolchain for {}, got {:?}", platform, other),
            }
        }
    }

    #[test]
    fn test_desktop_platforms_resolve_to_host_compilers() {
        assert_eq!(toolchain_for(TargetPlatform::Windows), Toolchain::Msvc);
        assert_eq!(
            toolchain_for(TargetPlatform::Linux),
            Toolchain::Gnu(CompilerFamily::Gcc)
        );
        assert_eq!(
            toolchain_for(TargetPlatform::Macos),
            Toolchain::Gnu(CompilerFamily::Clang)
        );
    }

    #[test]
    fn test_toolchain_names() {
        assert_eq!(toolchain_for(TargetPlatform::XboxOne).name(), "gdk");
        assert_eq!(Toolchain::Msvc.name(), "msvc");
        assert_eq!(Toolchain::Gnu(CompilerFamily::Clang).name(), "clang");
    }
}
