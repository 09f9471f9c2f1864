//! Command implementations

pub mod completions;
pub mod describe;
pub mod linkplan;
pub mod targets;
