//! Abstract plotter instructions.

use labelkit_core::{Positioning, Units};
use serde::{Deserialize, Serialize};

/// One atomic device directive.
///
/// A compiled program is an ordered `Vec<ToolInstruction>` with a
/// well-defined tool state at every position: the tool starts up, `DrawTo`
/// only appears while it is down, and consecutive redundant tool-state
/// transitions never occur. [`crate::ProgramValidator`] checks these
/// invariants for sequences assembled outside the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ToolInstruction {
    /// Establish the measurement unit. Emitted once, first.
    SetUnits(Units),
    /// Establish coordinate interpretation. Emitted once, second.
    SetPositioning(Positioning),
    /// Reposition without marking; the tool must be up.
    MoveTo { x: f64, y: f64 },
    /// Engage the tool (pen down / laser on).
    ToolDown,
    /// Lift the tool (pen up / laser off).
    ToolUp,
    /// Reposition while marking; the tool must be down.
    DrawTo { x: f64, y: f64 },
    /// Move to the device's fixed (0,0). Emitted once, last.
    ReturnHome,
}
