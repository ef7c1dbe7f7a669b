//! Error types shared across the crate.

use std::io;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building, multiplying, or
/// (de)serializing matrices.
///
/// All multiplication errors are detected before any thread is spawned;
/// the one exception is [`Error::WorkerPanicked`], which reports a fault
/// observed while joining the workers.
#[derive(Debug, Error)]
pub enum Error {
    /// Inner dimensions disagree: the left operand's column count must
    /// equal the right operand's row count.
    #[error("matrices are not compatible for multiplication: {0}x{1} * {2}x{3}")]
    IncompatibleShapes(usize, usize, usize, usize),

    /// A caller-supplied value is unusable, e.g. a zero worker count.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested dimensions cannot be allocated.
    #[error("cannot allocate a {rows}x{columns} matrix")]
    Allocation { rows: usize, columns: usize },

    /// A flat buffer whose length does not equal `rows * columns`.
    #[error("buffer of length {len} does not fit a {rows}x{columns} matrix")]
    BufferLength {
        rows: usize,
        columns: usize,
        len: usize,
    },

    /// Element access outside the matrix bounds.
    #[error("position ({row}, {column}) is out of range for a {rows}x{columns} matrix")]
    OutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// One or more workers died before finishing their rows.
    #[error("{panicked} of {spawned} worker threads panicked")]
    WorkerPanicked { panicked: usize, spawned: usize },

    /// A matrix file could not be opened or read.
    #[error("can't read {path}: {source}")]
    Io { path: String, source: io::Error },

    /// A matrix file did not match the expected text format.
    #[error("{path}:{line}: {reason}")]
    Parse {
        path: String,
        line: usize,
        reason: String,
    },

    /// The serializer's output sink failed.
    #[error("can't write matrix: {0}")]
    Write(#[from] io::Error),
}
