//! Error types shared by every stage of the report pipeline.

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for report operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while counting, building or reporting.
///
/// All of them are fatal for the command-line tool.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong number of command-line arguments
    #[error("usage = '{program} <file to huffman>'")]
    Usage { program: String },

    /// The input file could not be opened
    #[error("unable to open file '{}': {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an already opened input failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Queue storage could not be reserved
    #[error("unable to allocate space: {0}")]
    Allocation(#[from] TryReserveError),

    /// A merge was attempted with fewer than two queue entries
    #[error("not enough members in queue to remove two (size {size})")]
    QueueUnderflow { size: usize },

    /// No symbol occurs in the input, so there is no tree to build
    #[error("empty frequency table: cannot build tree")]
    EmptyInput,
}

impl Error {
    pub fn usage(program: impl Into<String>) -> Self {
        Error::Usage {
            program: program.into(),
        }
    }
}
