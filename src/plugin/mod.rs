//! Editor plugin descriptions.
//!
//! The editor's plugin host discovers optional capabilities through a fixed
//! description record. Records are plain values built once when the plugin
//! loads and never mutated afterwards; the host reads them for display only.

pub mod xbox_live;

pub use xbox_live::XboxLivePlugin;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Two-component plugin version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginVersion {
    pub major: u32,
    pub minor: u32,
}

impl PluginVersion {
    /// Create a version from its components.
    pub fn new(major: u32, minor: u32) -> Self {
        PluginVersion { major, minor }
    }
}

impl fmt::Display for PluginVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Description record advertising a plugin to the editor's plugin browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescription {
    /// Display name
    pub name: String,

    /// Plugin browser category
    pub category: String,

    /// Human-readable summary
    pub description: String,

    /// Author shown in the plugin browser
    pub author: String,

    /// Upstream repository
    pub repository_url: String,

    /// Plugin version
    pub version: PluginVersion,
}

/// An editor plugin advertising an optional capability.
pub trait EditorPlugin {
    /// The plugin's description record, stable for the process lifetime.
    fn description(&self) -> &PluginDescription;
}
