//! Target platform identifiers.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// A platform a build target can be compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetPlatform {
    /// Xbox One console family
    XboxOne,

    /// Xbox Series X|S console family
    XboxScarlett,

    /// Desktop Windows
    Windows,

    /// Desktop Linux
    Linux,

    /// Desktop macOS
    Macos,
}

impl TargetPlatform {
    /// Get the platform identifier as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetPlatform::XboxOne => "xbox-one",
            TargetPlatform::XboxScarlett => "xbox-scarlett",
            TargetPlatform::Windows => "windows",
            TargetPlatform::Linux => "linux",
            TargetPlatform::Macos => "macos",
        }
    }

    /// Check if this platform builds with the GDK dev-kit toolchain.
    pub fn is_gdk(&self) -> bool {
        matches!(self, TargetPlatform::XboxOne | TargetPlatform::XboxScarlett)
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TargetPlatform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xbox-one" => Ok(TargetPlatform::XboxOne),
            "xbox-scarlett" => Ok(TargetPlatform::XboxScarlett),
            "windows" => Ok(TargetPlatform::Windows),
            "linux" => Ok(TargetPlatform::Linux),
            "macos" => Ok(TargetPlatform::Macos),
            other => bail!(
                "unknown platform `{}`\n\
                 help: expected one of xbox-one, xbox-scarlett, windows, linux, macos",
                other
            ),
        }
    }
}
