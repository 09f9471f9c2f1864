//! Per-pass build options mutated by module setup.

use crate::core::platform::TargetPlatform;
use crate::core::toolchain::Toolchain;

/// Link and dependency configuration for one (platform, toolchain) pass.
///
/// The graph driver creates a fresh instance per target platform and hands
/// it to each module's `setup` by mutable reference. Both sequences are
/// append only. Library names are passed to the platform linker verbatim,
/// and some link steps resolve duplicate symbols by name order, so entries
/// must never be replaced or reordered once added.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Platform this pass is building for
    pub platform: TargetPlatform,

    /// Toolchain resolved for the platform, read-only during setup
    pub toolchain: Toolchain,

    /// Public module dependency names, in contribution order
    pub public_dependencies: Vec<String>,

    /// Native library file names, in link order
    pub libraries: Vec<String>,
}

impl BuildOptions {
    /// Create empty options for one build pass.
    pub fn new(platform: TargetPlatform, toolchain: Toolchain) -> Self {
        BuildOptions {
            platform,
            toolchain,
            public_dependencies: Vec::new(),
            libraries: Vec::new(),
        }
    }

    /// Append a public module dependency.
    pub fn add_public_dependency(&mut self, name: impl Into<String>) {
        self.public_dependencies.push(name.into());
    }

    /// Append a native library file name.
    pub fn add_library(&mut self, name: impl Into<String>) {
        self.libraries.push(name.into());
    }
}
