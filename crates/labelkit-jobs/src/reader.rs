//! Label ingestion from CSV input.

use crate::error::{JobError, JobResult};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Reads the labels to plot from one column of a CSV file.
///
/// Blank cells are dropped and duplicate labels are collapsed to their
/// first occurrence, so one batch produces one artifact per distinct
/// label. Fails with [`JobError::MissingColumn`] when the header row does
/// not contain `column`.
pub fn read_labels<P: AsRef<Path>>(path: P, column: &str) -> JobResult<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?;
    let index = headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| JobError::MissingColumn {
            column: column.to_string(),
        })?;

    let mut seen = HashSet::new();
    let mut labels = Vec::new();
    for record in reader.records() {
        let record = record?;
        let Some(value) = record.get(index) else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        if seen.insert(value.to_string()) {
            labels.push(value.to_string());
        }
    }

    debug!(count = labels.len(), column, "labels ingested");
    Ok(labels)
}
