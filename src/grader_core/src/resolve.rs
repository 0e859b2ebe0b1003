use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{GraderError, GraderResult};

/// Makes sure a user-supplied input path is present before anything reads it.
///
/// An empty path means "not given" and is handed back untouched.
pub fn resolve(path: &Path) -> GraderResult<PathBuf> {
    if path.as_os_str().is_empty() {
        return Ok(path.to_path_buf());
    }
    if !path.exists() {
        return Err(GraderError::MissingFile(path.to_path_buf()));
    }
    debug!(path = %path.display(), "input resolved");
    Ok(path.to_path_buf())
}

/// Like [`resolve`], for inputs that cannot be left out; an empty path is missing.
pub fn resolve_required(path: &Path) -> GraderResult<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(GraderError::MissingFile(path.to_path_buf()));
    }
    resolve(path)
}
