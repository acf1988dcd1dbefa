use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading, pruning or saving the target file.
#[derive(Debug, Error)]
pub enum PruneError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write progress report")]
    Report(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, PruneError>;
