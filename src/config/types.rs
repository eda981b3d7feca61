//! Configuration types and defaults for the launcher.
//!
//! This module defines the enums and value types held by the Config struct.

use clap::ValueEnum;
use serde::Serialize;
use std::path::PathBuf;

/// Default color theme.
pub const DEFAULT_THEME: &str = "light";

/// Theme forced by `--dumb-terminal`.
pub const DUMB_THEME: &str = "dumb";

/// Cache directory used by `--auto-cache`, relative to the working directory.
pub const AUTO_CACHE_DIR: &str = ".planck_cache";

/// Host used when `--socket-repl` is given a bare port.
pub const DEFAULT_SOCKET_HOST: &str = "localhost";

/// Compiler optimization level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum, Default)]
#[serde(rename_all = "snake_case")]
pub enum Optimizations {
    #[default]
    None,
    Whitespace,
    Simple,
}

/// Checked array access mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum, Default)]
#[serde(rename_all = "snake_case")]
pub enum CheckedArrays {
    /// Not selectable on the command line; it is what omitting `-A` means.
    #[default]
    #[value(skip)]
    Off,
    Warn,
    Error,
}

/// Kind of a classpath entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// A directory of source files.
    Directory,
    /// A JAR archive.
    Archive,
}

/// One classpath entry. Earlier entries take precedence on lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourcePath {
    pub kind: SourceKind,

    /// Absolute path; directories end with `/`.
    pub path: PathBuf,

    /// Reserved; always false.
    pub denylisted: bool,
}

/// Where a script's source comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ScriptSource {
    /// Inline source text.
    Text(String),
    /// A file path or classpath resource.
    Path(String),
}

/// A unit of source handed to the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Script {
    pub source: ScriptSource,

    /// When true the evaluator prints non-nil results.
    pub expression: bool,
}

impl Script {
    /// An `--init` file or resource.
    pub fn path(path: impl Into<String>) -> Self {
        Self {
            source: ScriptSource::Path(path.into()),
            expression: false,
        }
    }

    /// An `--eval` expression string.
    pub fn expression(text: impl Into<String>) -> Self {
        Self {
            source: ScriptSource::Text(text.into()),
            expression: true,
        }
    }

    /// Inline source run as a script, e.g. read from standard input.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            source: ScriptSource::Text(text.into()),
            expression: false,
        }
    }
}

/// Socket REPL listen address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocketEndpoint {
    pub host: String,
    pub port: u16,
}

impl SocketEndpoint {
    /// Parse `HOST:PORT` or a bare `PORT`. Port 0 is rejected.
    pub fn parse(addr: &str) -> Option<Self> {
        let (host, port) = match addr.rsplit_once(':') {
            Some((host, port)) if !host.is_empty() => (host, port),
            Some(_) => return None,
            None => (DEFAULT_SOCKET_HOST, addr),
        };

        let port: u16 = port.parse().ok().filter(|port| *port != 0)?;
        Some(Self {
            host: host.to_string(),
            port,
        })
    }
}
