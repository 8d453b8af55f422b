//! Error types for batch jobs.

use labelkit_toolpath::CompileError;
use std::io;
use thiserror::Error;

/// Errors that can occur while ingesting labels or delivering artifacts.
#[derive(Error, Debug)]
pub enum JobError {
    /// The requested label column is missing from the input.
    #[error("column '{column}' not found in input")]
    MissingColumn { column: String },

    /// The input could not be parsed as CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Archive construction failed.
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// I/O error while reading input or writing artifacts.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A toolpath compilation error surfaced to the orchestrator.
    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Result type alias for job operations.
pub type JobResult<T> = Result<T, JobError>;
