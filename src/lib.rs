//! # LabelKit
//!
//! Batch conversion of textual labels into pen-plotter toolpath programs.
//!
//! ## Architecture
//!
//! LabelKit is organized as a workspace with focused crates:
//!
//! 1. **labelkit-core** - Geometry model, units, positioning modes
//! 2. **labelkit-toolpath** - Vector-to-toolpath compiler, G-code formatter, program validator
//! 3. **labelkit-jobs** - CSV ingestion, batch orchestration, archive bundling
//! 4. **labelkit** - CLI binary that integrates the crates
//!
//! ## Pipeline
//!
//! Labels are read from a CSV column, each label's vector outline is
//! compiled into a deterministic instruction sequence, rendered as G-code,
//! and the resulting programs are delivered as individual files and/or a
//! single zip archive. The compiler and formatter are pure functions, so
//! the same batch always produces byte-identical output.

pub use labelkit_core::{LabelGeometry, Offset, PathSegment, Point, Positioning, Units};

pub use labelkit_toolpath::{
    format_instruction, format_program, CompileError, ProgramError, ProgramValidator,
    ToolInstruction, ToolpathCompiler,
};

pub use labelkit_jobs::{
    artifact_name, read_labels, write_archive, write_archive_file, write_files, Artifact,
    BaselineStrokeSource, BatchResult, BatchRunner, GeometrySource, JobError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and RUST_LOG environment
/// variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
