//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Failures that carry enough structure for callers to decide between
/// skip-and-continue and aborting the pass.
#[derive(Debug, Error)]
pub enum Error {
    /// The directory walk itself failed; aborts the current pass.
    #[error("traversal failed under {root}")]
    Traversal {
        root: PathBuf,
        #[source]
        source: ignore::Error,
    },

    /// The rewritten output could not be finalized; the original file is
    /// left untouched.
    #[error("could not replace {path}")]
    Replace {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
