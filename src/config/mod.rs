//! Launcher configuration.
//!
//! This module defines the Config record that the option parser populates
//! and the execution plan consumes. It is built once from the parsed
//! arguments and the startup environment, then treated as read-only.

mod build;
mod model;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use types::{
    CheckedArrays, Optimizations, Script, ScriptSource, SocketEndpoint, SourceKind, SourcePath,
};
