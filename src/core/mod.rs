//! Core data structures for the build module.
//!
//! This module contains the foundational types shared by the graph driver
//! and the build modules:
//! - Target platform identifiers
//! - Toolchain variants and resolution
//! - Per-pass build options
//! - Target declarations

pub mod options;
pub mod platform;
pub mod target;
pub mod toolchain;

pub use options::BuildOptions;
pub use platform::TargetPlatform;
pub use target::TargetSpec;
pub use toolchain::{toolchain_for, CompilerFamily, GdkToolchain, GdkToolsetVersion, Toolchain};
