//! Instruction-sequence to wire-format rendering.
//!
//! Every instruction maps to exactly one `\n`-terminated line of G-code.
//! The directive vocabulary is fixed and stable across versions; the
//! mapping is total and one-way (no parser is provided).
//!
//! Coordinates are rendered with exactly 3 fractional digits (`{:.3}`),
//! uniformly for `MoveTo` and `DrawTo`, so the same instruction sequence
//! formats to byte-identical text on every platform. `ReturnHome` renders
//! its fixed `X0 Y0` literally.

use crate::instruction::ToolInstruction;
use labelkit_core::{Positioning, Units};

/// Spindle power used for the pen-down directive (`M3 S100`).
pub const PEN_DOWN_POWER: u32 = 100;

/// Renders one instruction as its single line of G-code, without the
/// trailing newline.
pub fn format_instruction(instruction: &ToolInstruction) -> String {
    match instruction {
        ToolInstruction::SetUnits(Units::Mm) => "G21 ; Set units to mm".to_string(),
        ToolInstruction::SetUnits(Units::Inch) => "G20 ; Set units to inches".to_string(),
        ToolInstruction::SetPositioning(Positioning::Absolute) => {
            "G90 ; Absolute positioning".to_string()
        }
        ToolInstruction::SetPositioning(Positioning::Relative) => {
            "G91 ; Relative positioning".to_string()
        }
        ToolInstruction::MoveTo { x, y } => format!("G0 X{:.3} Y{:.3}", x, y),
        ToolInstruction::ToolDown => format!("M3 S{} ; Pen down", PEN_DOWN_POWER),
        ToolInstruction::ToolUp => "M5 ; Pen up".to_string(),
        ToolInstruction::DrawTo { x, y } => format!("G1 X{:.3} Y{:.3}", x, y),
        ToolInstruction::ReturnHome => "G0 X0 Y0 ; Return to home".to_string(),
    }
}

/// Renders a whole program, one line per instruction, each terminated
/// with `\n`. Formatting never fails.
pub fn format_program(program: &[ToolInstruction]) -> String {
    let mut gcode = String::new();
    for instruction in program {
        gcode.push_str(&format_instruction(instruction));
        gcode.push('\n');
    }
    gcode
}
