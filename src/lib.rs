//! Xbox Live online platform module for the Ember build pipeline.
//!
//! This crate provides the build-time half of the engine's Xbox Live
//! integration: it decides which vendor libraries a target links against
//! based on the active toolchain, and it carries the plugin description
//! record the editor uses to discover the capability.

pub mod core;
pub mod graph;
pub mod module;
pub mod plugin;
pub mod util;

pub use crate::core::options::BuildOptions;
pub use crate::core::platform::TargetPlatform;
pub use crate::core::target::TargetSpec;
pub use crate::core::toolchain::{toolchain_for, GdkToolsetVersion, Toolchain};
pub use crate::graph::TargetLinkPlan;
pub use crate::module::{BuildModule, ModuleSet, XboxLiveModule};
pub use crate::plugin::{EditorPlugin, PluginDescription, XboxLivePlugin};
