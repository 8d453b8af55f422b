use anyhow::{Context, Result};
use clap::Parser;
use labelkit::{
    init_logging, read_labels, write_archive_file, write_files, BaselineStrokeSource, BatchRunner,
    Offset,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "labelkit", version)]
#[command(about = "Convert a CSV of labels into pen-plotter G-code programs")]
struct Args {
    /// CSV file containing the labels to plot
    input: PathBuf,

    /// Column to read labels from
    #[arg(short, long, default_value = "First Name")]
    column: String,

    /// Path of the zip archive bundling all programs
    #[arg(short, long, default_value = "generated_gcode.zip")]
    archive: PathBuf,

    /// Also write each program as an individual file in this directory
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// X offset of the plotting area origin, in mm
    #[arg(long, default_value_t = 10.0)]
    origin_x: f64,

    /// Y offset of the plotting area origin, in mm
    #[arg(long, default_value_t = 10.0)]
    origin_y: f64,

    /// Width allotted to each label character, in mm
    #[arg(long, default_value_t = 10.0)]
    char_width: f64,
}

fn main() -> Result<()> {
    init_logging()?;
    let args = Args::parse();

    let labels = read_labels(&args.input, &args.column)
        .with_context(|| format!("reading labels from {}", args.input.display()))?;
    info!(count = labels.len(), "labels loaded");

    let source = BaselineStrokeSource::new(args.char_width);
    let runner = BatchRunner::new(Offset::new(args.origin_x, args.origin_y), source)
        .context("configuring toolpath compiler")?;

    let result = runner.run(&labels);

    if let Some(dir) = &args.out_dir {
        write_files(&result.artifacts, dir)
            .with_context(|| format!("writing programs to {}", dir.display()))?;
    }
    write_archive_file(&result.artifacts, &args.archive)
        .with_context(|| format!("writing archive {}", args.archive.display()))?;

    info!(
        produced = result.artifacts.len(),
        skipped = result.skipped_labels,
        total = result.total_labels,
        "batch complete"
    );

    Ok(())
}
