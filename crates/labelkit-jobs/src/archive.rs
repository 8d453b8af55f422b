//! Artifact delivery: individual files and zip bundles.

use crate::batch::Artifact;
use crate::error::JobResult;
use std::fs::{self, File};
use std::io::{Seek, Write};
use std::path::Path;
use tracing::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Serializes artifacts into a zip archive, one entry per artifact in
/// batch order. Entry contents are the formatter's exact bytes.
pub fn write_archive<W: Write + Seek>(artifacts: &[Artifact], writer: W) -> JobResult<W> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for artifact in artifacts {
        zip.start_file(artifact.name.as_str(), options)?;
        zip.write_all(artifact.text.as_bytes())?;
    }

    Ok(zip.finish()?)
}

/// Writes a zip archive of the artifacts at `path`.
pub fn write_archive_file<P: AsRef<Path>>(artifacts: &[Artifact], path: P) -> JobResult<()> {
    let file = File::create(path.as_ref())?;
    write_archive(artifacts, file)?;
    info!(
        path = %path.as_ref().display(),
        entries = artifacts.len(),
        "archive written"
    );
    Ok(())
}

/// Writes each artifact as its own file under `dir`, creating the
/// directory if needed.
pub fn write_files<P: AsRef<Path>>(artifacts: &[Artifact], dir: P) -> JobResult<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    for artifact in artifacts {
        fs::write(dir.join(&artifact.name), &artifact.text)?;
    }
    info!(path = %dir.display(), files = artifacts.len(), "artifacts written");
    Ok(())
}
