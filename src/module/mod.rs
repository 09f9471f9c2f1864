//! Build modules and their registry.
//!
//! A build module contributes dependency and link configuration to one
//! build pass. The graph driver resolves module names declared by a target
//! through the `ModuleSet` registry and invokes each module's `setup`
//! exactly once per target platform.

pub mod xbox_live;

pub use xbox_live::XboxLiveModule;

use thiserror::Error;

use crate::core::options::BuildOptions;
use crate::core::platform::TargetPlatform;

/// Error raised when a module cannot configure a build pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The dev-kit toolchain did not declare a services toolset version.
    #[error("GDK toolchain for `{platform}` declares no services toolset version")]
    MissingToolsetVersion { platform: TargetPlatform },
}

/// A module that contributes link configuration to a build pass.
///
/// Implementations append to the options in place and must not retain the
/// reference. `setup` is invoked at most once per target platform per pass;
/// invoking it again on the same options duplicates entries.
pub trait BuildModule {
    /// Module name as referenced by target declarations.
    fn name(&self) -> &str;

    /// Contribute dependencies and native libraries for one build pass.
    fn setup(&self, options: &mut BuildOptions) -> Result<(), ConfigError>;
}

/// Ordered registry of build modules, looked up by name.
pub struct ModuleSet {
    modules: Vec<Box<dyn BuildModule>>,
}

impl ModuleSet {
    /// Create an empty module set.
    pub fn new() -> Self {
        ModuleSet {
            modules: Vec::new(),
        }
    }

    /// Register a module.
    pub fn add(&mut self, module: Box<dyn BuildModule>) {
        self.modules.push(module);
    }

    /// Look up a module by name.
    pub fn get(&self, name: &str) -> Option<&dyn BuildModule> {
        self.modules
            .iter()
            .find(|m| m.name() == name)
            .map(|m| m.as_ref())
    }

    /// Check if a module with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl Default for ModuleSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_set_lookup_by_name() {
        let mut modules = ModuleSet::new();
        assert!(!modules.contains("OnlinePlatformXboxLive"));

        modules.add(Box::new(XboxLiveModule::new()));

        assert!(modules.contains("OnlinePlatformXboxLive"));
        assert_eq!(
            modules.get("OnlinePlatformXboxLive").map(|m| m.name()),
            Some("OnlinePlatformXboxLive")
        );
        assert!(modules.get("Online").is_none());
    }
}
