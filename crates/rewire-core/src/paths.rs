use std::path::{Path, PathBuf};

use crate::error::Error;

/// Ancestor levels searched above the start directory before giving up.
pub const MAX_ANCESTOR_LEVELS: usize = 19;

/// Find the nearest `node_modules` directory by walking up from `start`.
///
/// Checks `start` itself plus at most [`MAX_ANCESTOR_LEVELS`] ancestors,
/// stopping early at the filesystem root.
///
/// # Errors
/// Returns [`Error::NodeModulesNotFound`] when the walk exhausts its bound
/// without finding one.
pub fn find_node_modules(start: &Path) -> Result<PathBuf, Error> {
    let mut current = start.to_path_buf();

    for _ in 0..=MAX_ANCESTOR_LEVELS {
        let candidate = current.join("node_modules");
        if candidate.is_dir() {
            return Ok(candidate);
        }

        if !current.pop() {
            break;
        }
    }

    Err(Error::NodeModulesNotFound {
        start: start.to_path_buf(),
    })
}
