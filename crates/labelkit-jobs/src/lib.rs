//! # LabelKit Jobs
//!
//! Batch orchestration around the pure toolpath core:
//!
//! - **Ingestion**: read labels from a CSV column, dropping blanks and
//!   de-duplicating while preserving first-occurrence order.
//! - **Geometry source**: the [`GeometrySource`] boundary trait plus the
//!   built-in [`BaselineStrokeSource`] stand-in.
//! - **Batch runner**: compile and format one program per label with
//!   skip-and-continue error collection.
//! - **Delivery**: write artifacts as individual files or bundle them into
//!   a zip archive.
//!
//! Nothing here touches the filesystem except the ingestion and delivery
//! edges; geometry and artifacts travel through the pipeline as values.

pub mod archive;
pub mod batch;
pub mod error;
pub mod naming;
pub mod reader;
pub mod source;

pub use archive::{write_archive, write_archive_file, write_files};
pub use batch::{Artifact, BatchResult, BatchRunner};
pub use error::{JobError, JobResult};
pub use naming::{artifact_name, ARTIFACT_EXTENSION};
pub use reader::read_labels;
pub use source::{BaselineStrokeSource, GeometrySource};
