//! Dependency coordinate resolution against a local Maven-layout repository.
//!
//! A coordinate `group[.sub]*[/artifact]:version` names exactly one archive:
//! `<root>/<group path>/<artifact>/<version>/<artifact>-<version>.jar`.
//! Nothing is downloaded and no index is consulted; the archive may not exist.

use crate::error::{LaunchError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Repository root relative to the home directory.
pub const DEFAULT_REPOSITORY: &str = ".m2/repository";

static COORDINATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<group>[^/:\s]+)(?:/(?P<artifact>[^/:\s]+))?:(?P<version>[^/:\s]+)$")
        .expect("Invalid coordinate regex")
});

/// A parsed dependency coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl Coordinate {
    /// Parse a single coordinate such as `org.clojure/test.check:0.9.0`.
    ///
    /// When the artifact is omitted it defaults to the last dot-separated
    /// segment of the group (`org.foo:1.0` is `org.foo/foo:1.0`).
    pub fn parse(s: &str) -> Result<Self> {
        let caps = COORDINATE_REGEX.captures(s).ok_or_else(|| {
            LaunchError::Usage(format!(
                "invalid dependency '{}': expected group[/artifact]:version",
                s
            ))
        })?;

        let group = caps["group"].to_string();
        if group.split('.').any(str::is_empty) {
            return Err(LaunchError::Usage(format!(
                "invalid dependency '{}': empty group segment",
                s
            )));
        }

        let artifact = match caps.name("artifact") {
            Some(artifact) => artifact.as_str().to_string(),
            None => group.rsplit('.').next().unwrap_or(&group).to_string(),
        };

        Ok(Self {
            group,
            artifact,
            version: caps["version"].to_string(),
        })
    }

    /// The archive this coordinate names under `root`.
    pub fn archive_path(&self, root: &Path) -> PathBuf {
        let mut path = root.to_path_buf();
        path.extend(self.group.split('.'));
        path.push(&self.artifact);
        path.push(&self.version);
        path.push(format!("{}-{}.jar", self.artifact, self.version));
        path
    }
}

/// Parse a comma-separated coordinate list. Blank items are skipped.
pub fn parse_list(list: &str) -> Result<Vec<Coordinate>> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(Coordinate::parse)
        .collect()
}

/// Join the archives of `coordinates` into a `:`-delimited classpath fragment, in input order.
pub fn fragment(coordinates: &[Coordinate], root: &Path) -> String {
    coordinates
        .iter()
        .map(|coordinate| coordinate.archive_path(root).to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(":")
}

/// The default repository root under `home`, if a home directory is known.
pub fn default_repository(home: Option<&Path>) -> Option<PathBuf> {
    home.filter(|home| !home.as_os_str().is_empty())
        .map(|home| home.join(DEFAULT_REPOSITORY))
}
