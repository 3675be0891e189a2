use std::path::PathBuf;
use thiserror::Error;

use crate::paths::MAX_ANCESTOR_LEVELS;

/// Boxed error type module producers may fail with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Core error type for rewire operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "no node_modules directory found within {} ancestor levels of {}",
        MAX_ANCESTOR_LEVELS,
        .start.display()
    )]
    NodeModulesNotFound { start: PathBuf },

    /// A module producer failed. The underlying error is surfaced
    /// unmodified, not wrapped in a new message.
    #[error(transparent)]
    Producer(#[from] BoxError),
}
