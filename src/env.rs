//! Startup environment snapshot.
//!
//! Everything the configuration builder reads from the process environment is
//! captured here once, so the builder itself stays a pure function of its
//! inputs.

use std::env;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Environment variable consulted when no explicit classpath is given.
pub const CLASSPATH_VAR: &str = "PLANCK_CLASSPATH";

/// Home directory variable used to default the dependency repository.
pub const HOME_VAR: &str = "HOME";

/// Process environment captured at startup.
#[derive(Debug, Clone, Default)]
pub struct LaunchEnv {
    /// Working directory used to qualify relative paths.
    pub cwd: PathBuf,

    /// Value of `PLANCK_CLASSPATH`, if set.
    pub classpath: Option<String>,

    /// Value of `HOME`, if set and non-empty.
    pub home: Option<PathBuf>,

    /// Whether standard input is a terminal.
    pub stdin_is_tty: bool,
}

impl LaunchEnv {
    /// Capture the current process environment.
    ///
    /// An unreadable working directory falls back to `/` with a warning;
    /// relative paths then qualify against the filesystem root.
    pub fn capture() -> Self {
        let cwd = env::current_dir().unwrap_or_else(|e| {
            tracing::warn!("failed to get current working directory: {}", e);
            PathBuf::from("/")
        });

        Self {
            cwd,
            classpath: env::var(CLASSPATH_VAR).ok(),
            home: env::var_os(HOME_VAR)
                .filter(|home| !home.is_empty())
                .map(PathBuf::from),
            stdin_is_tty: std::io::stdin().is_terminal(),
        }
    }
}
