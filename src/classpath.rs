//! Classpath string parsing.
//!
//! A classpath is a `:`-delimited list of source directories and JAR
//! archives. Entries keep their input order; relative entries are qualified
//! against the working directory captured at startup.

use crate::config::{SourceKind, SourcePath};
use crate::paths;
use std::path::Path;

/// Archive suffix that marks a classpath entry as a JAR.
pub const ARCHIVE_SUFFIX: &str = ".jar";

/// Classify and qualify every entry of `classpath`. Empty entries are skipped.
pub fn parse(classpath: &str, cwd: &Path) -> Vec<SourcePath> {
    classpath
        .split(':')
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry_for(entry, cwd))
        .collect()
}

fn entry_for(entry: &str, cwd: &Path) -> SourcePath {
    let (kind, path) = if entry.ends_with(ARCHIVE_SUFFIX) {
        (SourceKind::Archive, paths::qualify(cwd, entry))
    } else {
        (SourceKind::Directory, paths::qualify_dir(cwd, entry))
    };

    SourcePath {
        kind,
        path,
        denylisted: false,
    }
}

/// Resolve the classpath from the explicit string, falling back to the
/// environment classpath only when the explicit one yields no entries.
pub fn resolve(explicit: &str, env_classpath: Option<&str>, cwd: &Path) -> Vec<SourcePath> {
    let entries = parse(explicit, cwd);
    if !entries.is_empty() {
        return entries;
    }

    match env_classpath {
        Some(classpath) => {
            tracing::debug!(classpath, "using classpath from environment");
            parse(classpath, cwd)
        }
        None => entries,
    }
}
