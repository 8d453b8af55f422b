//! Per-label compilation and batch bookkeeping.

use crate::error::JobResult;
use crate::naming::{artifact_name, ARTIFACT_EXTENSION};
use crate::source::GeometrySource;
use labelkit_core::{LabelGeometry, Offset};
use labelkit_toolpath::{format_program, ToolpathCompiler};
use std::collections::HashSet;
use tracing::warn;

/// The formatted plotter program produced for one label.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    /// Sanitized, collision-resistant file name (stem plus extension).
    pub name: String,
    /// The formatter's exact output text.
    pub text: String,
}

/// Outcome of a batch run.
///
/// A label whose geometry fails to compile is skipped with its error
/// recorded; the batch itself never aborts mid-way.
#[derive(Debug, Default)]
pub struct BatchResult {
    /// Artifacts in label order.
    pub artifacts: Vec<Artifact>,
    /// Number of labels submitted.
    pub total_labels: usize,
    /// Number of labels skipped due to errors.
    pub skipped_labels: usize,
    /// One message per skipped label.
    pub errors: Vec<String>,
}

/// Drives the compile/format pipeline across a batch of labels.
pub struct BatchRunner<S> {
    compiler: ToolpathCompiler,
    source: S,
}

impl<S: GeometrySource> BatchRunner<S> {
    /// Creates a runner for the given workspace origin and geometry source.
    ///
    /// A non-finite origin is rejected here, before any label is processed.
    pub fn new(origin: Offset, source: S) -> JobResult<Self> {
        let compiler = ToolpathCompiler::new(origin)?;
        Ok(Self { compiler, source })
    }

    /// Compiles and formats the program for a single label.
    ///
    /// The artifact name is the sanitized label stem; callers running whole
    /// batches get collision suffixes from [`BatchRunner::run`] instead.
    pub fn produce_artifact(&self, label: &str, geometry: &LabelGeometry) -> JobResult<Artifact> {
        let program = self.compiler.compile(geometry)?;
        Ok(Artifact {
            name: format!("{}.{}", artifact_name(label), ARTIFACT_EXTENSION),
            text: format_program(&program),
        })
    }

    /// Processes every label, skipping and recording the ones that fail.
    pub fn run(&self, labels: &[String]) -> BatchResult {
        let mut result = BatchResult {
            total_labels: labels.len(),
            ..BatchResult::default()
        };
        let mut used_stems: HashSet<String> = HashSet::new();

        for label in labels {
            let geometry = self.source.geometry(label);
            match self.compiler.compile(&geometry) {
                Ok(program) => {
                    let stem = unique_stem(artifact_name(label), &mut used_stems);
                    result.artifacts.push(Artifact {
                        name: format!("{}.{}", stem, ARTIFACT_EXTENSION),
                        text: format_program(&program),
                    });
                }
                Err(e) => {
                    warn!(label = %label, error = %e, "skipping label");
                    result.skipped_labels += 1;
                    result.errors.push(format!("label '{}': {}", label, e));
                }
            }
        }

        result
    }
}

/// Resolves stem collisions between distinct labels with `-2`, `-3` suffixes.
fn unique_stem(stem: String, used: &mut HashSet<String>) -> String {
    if used.insert(stem.clone()) {
        return stem;
    }
    let mut counter = 2;
    loop {
        let candidate = format!("{}-{}", stem, counter);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        counter += 1;
    }
}
