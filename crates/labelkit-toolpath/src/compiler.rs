//! Geometry to instruction-sequence compilation.

use crate::error::{CompileError, CompileResult};
use crate::instruction::ToolInstruction;
use labelkit_core::{LabelGeometry, Offset, Positioning, Units};
use tracing::debug;

/// Compiles label geometry into plotter instruction sequences.
///
/// The compiler holds the fixed workspace origin that anchors local label
/// coordinates into the device's absolute coordinate space. It is stateless
/// across calls: compiling the same geometry twice yields identical output.
#[derive(Debug, Clone)]
pub struct ToolpathCompiler {
    origin: Offset,
}

impl ToolpathCompiler {
    /// Creates a compiler for the given workspace origin.
    ///
    /// A non-finite origin is a fatal configuration error and is rejected
    /// here, before any compilation begins.
    pub fn new(origin: Offset) -> CompileResult<Self> {
        if !origin.is_finite() {
            return Err(CompileError::InvalidOrigin {
                x: origin.x,
                y: origin.y,
            });
        }
        Ok(Self { origin })
    }

    /// The workspace origin applied to every compiled coordinate.
    pub fn origin(&self) -> Offset {
        self.origin
    }

    /// Compiles one label's geometry into an ordered instruction sequence.
    ///
    /// The program always opens with `SetUnits` and `SetPositioning` and
    /// closes with `ReturnHome`. Each drawable segment becomes one
    /// move/down/draw/up cycle, so the tool is structurally up before the
    /// final home move. Empty geometry is valid and produces the minimal
    /// three-instruction program.
    ///
    /// Segments with fewer than two points are degenerate and skipped;
    /// a non-finite coordinate anywhere in the input fails the whole
    /// compilation with no partial output.
    pub fn compile(&self, geometry: &LabelGeometry) -> CompileResult<Vec<ToolInstruction>> {
        validate_geometry(geometry)?;

        let mut program = vec![
            ToolInstruction::SetUnits(Units::Mm),
            ToolInstruction::SetPositioning(Positioning::Absolute),
        ];

        for (index, segment) in geometry.segments.iter().enumerate() {
            if !segment.is_drawable() {
                debug!(segment = index, points = segment.points.len(), "skipping degenerate segment");
                continue;
            }

            let first = segment.points[0];
            program.push(ToolInstruction::MoveTo {
                x: first.x + self.origin.x,
                y: first.y + self.origin.y,
            });
            program.push(ToolInstruction::ToolDown);
            for point in &segment.points[1..] {
                program.push(ToolInstruction::DrawTo {
                    x: point.x + self.origin.x,
                    y: point.y + self.origin.y,
                });
            }
            program.push(ToolInstruction::ToolUp);
        }

        // Home is the device's fixed (0,0), independent of the origin.
        program.push(ToolInstruction::ReturnHome);

        Ok(program)
    }
}

/// Rejects geometry containing non-finite coordinates, identifying the
/// first offending segment and point.
fn validate_geometry(geometry: &LabelGeometry) -> CompileResult<()> {
    for (segment_index, segment) in geometry.segments.iter().enumerate() {
        for (point_index, point) in segment.points.iter().enumerate() {
            if !point.is_finite() {
                return Err(CompileError::InvalidGeometry {
                    segment: segment_index,
                    point: point_index,
                    x: point.x,
                    y: point.y,
                });
            }
        }
    }
    Ok(())
}
