//! Error types for toolpath compilation.

use thiserror::Error;

/// Errors that can occur while compiling geometry into instructions.
///
/// Compilation never fails on well-formed input; both variants are input
/// defects surfaced to the caller, never retried internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    /// A segment contains a non-finite coordinate.
    #[error("non-finite coordinate ({x}, {y}) at segment {segment}, point {point}")]
    InvalidGeometry {
        /// Index of the offending segment in the geometry.
        segment: usize,
        /// Index of the offending point within the segment.
        point: usize,
        x: f64,
        y: f64,
    },

    /// The configured workspace origin is non-finite.
    #[error("non-finite plot origin ({x}, {y})")]
    InvalidOrigin { x: f64, y: f64 },
}

/// Result type alias for compilation.
pub type CompileResult<T> = Result<T, CompileError>;
