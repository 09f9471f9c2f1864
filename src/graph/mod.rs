//! Build-graph construction over a target declaration.
//!
//! One synchronous, single-threaded pass. Each platform of the target gets
//! its own fresh `BuildOptions`, every declared module runs its setup
//! against it once, and the result is snapshotted into a serializable link
//! plan. Construction is deterministic and all-or-nothing: the first
//! failure aborts the pass with no partial result.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::options::BuildOptions;
use crate::core::platform::TargetPlatform;
use crate::core::target::TargetSpec;
use crate::core::toolchain::{toolchain_for, Toolchain};
use crate::module::{ConfigError, ModuleSet};
use crate::util::diagnostic::Diagnostic;

/// Snapshot of one target platform's configured link environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetLinkPlan {
    /// Platform the pass was constructed for
    pub platform: TargetPlatform,

    /// Name of the toolchain the pass resolved
    pub toolchain: String,

    /// Public module dependency names, in contribution order
    pub public_dependencies: Vec<String>,

    /// Native library file names, in link order
    pub libraries: Vec<String>,
}

/// Error during build-graph construction.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A target declaration names a module nobody registered.
    #[error("target `{target}` pulls in unknown module `{module}`")]
    UnknownModule { target: String, module: String },

    /// A module refused to configure one of the target's platforms.
    #[error("module `{module}` failed to configure `{platform}`")]
    ModuleSetup {
        module: String,
        platform: TargetPlatform,
        source: ConfigError,
    },
}

impl GraphError {
    /// Convert to a user-facing diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            GraphError::UnknownModule { target, module } => Diagnostic::error(format!(
                "target `{}` pulls in unknown module `{}`",
                target, module
            ))
            .with_suggestion("Register the module before constructing the graph")
            .with_suggestion(format!(
                "Check the spelling of `{}` in the target declaration",
                module
            )),

            GraphError::ModuleSetup {
                module,
                platform,
                source,
            } => Diagnostic::error(format!(
                "module `{}` failed to configure `{}`",
                module, platform
            ))
            .with_context(source.to_string())
            .with_suggestion("Install a GDK that declares a services toolset version")
            .with_suggestion("Pin a version explicitly with `oxl linkplan --toolset <n>`"),
        }
    }
}

/// Construct build passes for every platform of a target declaration.
///
/// Platforms are processed in declared order, toolchains resolved through
/// [`toolchain_for`].
pub fn construct(spec: &TargetSpec, modules: &ModuleSet) -> Result<Vec<TargetLinkPlan>, GraphError> {
    construct_with(spec, modules, toolchain_for)
}

/// Construct build passes with a caller-supplied toolchain resolver.
///
/// The resolver seam exists for tooling that substitutes toolchain
/// attributes, such as pinning a GDK toolset version.
pub fn construct_with<F>(
    spec: &TargetSpec,
    modules: &ModuleSet,
    resolve: F,
) -> Result<Vec<TargetLinkPlan>, GraphError>
where
    F: Fn(TargetPlatform) -> Toolchain,
{
    // Resolve every declared module up front so a typo fails before any
    // pass runs.
    let mut resolved = Vec::with_capacity(spec.modules.len());
    for name in &spec.modules {
        match modules.get(name) {
            Some(module) => resolved.push(module),
            None => {
                return Err(GraphError::UnknownModule {
                    target: spec.name.clone(),
                    module: name.clone(),
                })
            }
        }
    }

    let mut plans = Vec::with_capacity(spec.platforms.len());

    for &platform in &spec.platforms {
        let toolchain = resolve(platform);
        let mut options = BuildOptions::new(platform, toolchain);

        for module in &resolved {
            module
                .setup(&mut options)
                .map_err(|source| GraphError::ModuleSetup {
                    module: module.name().to_string(),
                    platform,
                    source,
                })?;
        }

        debug!(
            "configured `{}` for {}: {} libraries, {} dependencies",
            spec.name,
            platform,
            options.libraries.len(),
            options.public_dependencies.len()
        );

        plans.push(TargetLinkPlan {
            platform,
            toolchain: toolchain.name().to_string(),
            public_dependencies: options.public_dependencies,
            libraries: options.libraries,
        });
    }

    Ok(plans)
}
