//! Build target declarations.
//!
//! A target declaration names the platforms a build covers and the modules
//! it pulls in. Declarations are read once when the target graph is
//! constructed and are not validated beyond module-name existence checks,
//! which the graph driver performs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::platform::TargetPlatform;

/// A named build target: the platforms it covers and the modules it pulls in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpec {
    /// Target name
    pub name: String,

    /// Platforms to construct build passes for, in declared order
    pub platforms: Vec<TargetPlatform>,

    /// Module names this target pulls in
    pub modules: Vec<String>,
}

impl TargetSpec {
    /// The Xbox Live project target: both GDK console platforms plus the
    /// online platform module.
    pub fn xbox_live() -> Self {
        TargetSpec {
            name: "OnlinePlatformXboxLive".to_string(),
            platforms: vec![TargetPlatform::XboxOne, TargetPlatform::XboxScarlett],
            modules: vec!["OnlinePlatformXboxLive".to_string()],
        }
    }

    /// Parse a target declaration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| "failed to parse target declaration")
    }

    /// Load a target declaration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read target declaration: {}", path.display()))?;
        Self::from_toml_str(&content)
    }
}
