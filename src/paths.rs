//! Path string helpers shared by the classpath, dependency, and cache resolution.

use std::path::{Path, PathBuf};

/// Returns `s` with exactly the trailing `/` it needs to name a directory.
pub fn ensure_trailing_slash(s: &str) -> String {
    if s.ends_with('/') {
        s.to_string()
    } else {
        format!("{}/", s)
    }
}

/// Qualifies `path` against `cwd` when it is relative.
///
/// `.` components are dropped; `..` is kept as written since the target may
/// not exist yet.
pub fn qualify(cwd: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    joined.components().collect()
}

/// Qualifies `path` against `cwd` and appends a trailing separator.
pub fn qualify_dir(cwd: &Path, path: &str) -> PathBuf {
    let qualified = qualify(cwd, path);
    PathBuf::from(ensure_trailing_slash(&qualified.to_string_lossy()))
}
