//! Error types for fastakit

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fastakit operations
pub type Result<T> = std::result::Result<T, FastakitError>;

/// Error types that can occur in fastakit
#[derive(Debug, Error)]
pub enum FastakitError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A contig name was not found while scanning a FASTA file
    #[error("contig '{name}' not found inside {path}")]
    ContigNotFound {
        /// Name that was searched for (without the '>' marker)
        name: String,
        /// FASTA file that was scanned
        path: PathBuf,
    },

    /// A reverse-complement slice fell outside the wrapped sequence
    #[error("reverse-complement range out of bounds: {begin} {end} vs. length {length}")]
    RangeOutOfBounds {
        /// Computed begin index (may be negative)
        begin: i64,
        /// Computed end index (may be negative)
        end: i64,
        /// Length of the wrapped sequence
        length: usize,
    },

    /// A base with no entry in the complement table
    #[error("no complement defined for base '{0}'")]
    UnknownBase(char),

    /// Assembly statistics requested for an empty contig list
    #[error("cannot compute N50/N90 statistics for an empty assembly")]
    EmptyAssembly,

    /// A logged shell command exited with a non-zero status
    #[error("command '{command}' exited with status {code:?}")]
    CommandFailed {
        /// The shell command that was run
        command: String,
        /// Exit code, if the process was not killed by a signal
        code: Option<i32>,
    },
}
