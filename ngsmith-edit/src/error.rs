use std::path::PathBuf;

use thiserror::Error;

/// Result type for buffer host operations.
///
/// Only real I/O failures travel this channel; "structure not found" and
/// "host declined the edit" are ordinary `bool` outcomes.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
