//! Config struct definition and default implementation.

use super::types::*;
use serde::Serialize;
use std::path::PathBuf;

/// Fully resolved launcher configuration.
///
/// Built once by [`Config::build`](super::Config::build), then handed
/// read-only to the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    // =========================================================================
    // Diagnostics and terminal
    // =========================================================================
    /// Emit verbose diagnostic output.
    pub verbose: bool,

    /// Suppress the REPL banner.
    pub quiet: bool,

    /// Disable line editing and VT100 control.
    pub dumb_terminal: bool,

    /// Whether standard input is an interactive terminal.
    pub is_tty: bool,

    /// Color theme name.
    pub theme: String,

    // =========================================================================
    // Compiler settings
    // =========================================================================
    /// Generate static dispatch function calls.
    pub static_fns: bool,

    /// Bind `*assert*` to false.
    pub elide_asserts: bool,

    pub optimizations: Optimizations,

    pub checked_arrays: CheckedArrays,

    /// Emit compiled JavaScript (development).
    pub javascript: bool,

    // =========================================================================
    // Directories
    // =========================================================================
    /// Compilation cache directory, if caching is enabled.
    pub cache_path: Option<PathBuf>,

    /// Output directory for compiled JavaScript (ends with `/`).
    pub out_path: Option<PathBuf>,

    /// Directory to dump the bundled SDK sources into.
    pub dump_sdk: Option<PathBuf>,

    /// Ordered classpath entries.
    pub src_paths: Vec<SourcePath>,

    /// Socket REPL endpoint, if enabled.
    pub socket_repl: Option<SocketEndpoint>,

    // =========================================================================
    // Actions
    // =========================================================================
    /// Init actions in command-line order.
    pub init_actions: Vec<Script>,

    /// Namespace whose `-main` is invoked.
    pub main_ns: Option<String>,

    /// Run the interactive REPL.
    pub repl: bool,

    /// Arguments forwarded verbatim to the script, namespace, or REPL.
    pub rest_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            quiet: false,
            dumb_terminal: false,
            is_tty: false,
            theme: DEFAULT_THEME.to_string(),
            static_fns: false,
            elide_asserts: false,
            optimizations: Optimizations::default(),
            checked_arrays: CheckedArrays::default(),
            javascript: false,
            cache_path: None,
            out_path: None,
            dump_sdk: None,
            src_paths: Vec::new(),
            socket_repl: None,
            init_actions: Vec::new(),
            main_ns: None,
            repl: false,
            rest_args: Vec::new(),
        }
    }
}
