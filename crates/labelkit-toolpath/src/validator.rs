//! Structural validation of instruction sequences.
//!
//! The compiler produces well-formed programs by construction; this
//! validator exists for sequences assembled or transformed elsewhere, and
//! as the executable statement of the program invariants.

use crate::instruction::ToolInstruction;
use labelkit_core::{Positioning, Units};
use thiserror::Error;

/// Violations of the program's structural invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgramError {
    /// The program does not open with `SetUnits` then `SetPositioning`.
    #[error("program must begin with unit and positioning setup")]
    MissingSetup,

    /// A setup instruction appears after the opening pair.
    #[error("setup instruction at index {index} after program start")]
    LateSetup { index: usize },

    /// A `DrawTo` was issued while the tool is up.
    #[error("draw at index {index} while the tool is up")]
    DrawWhileUp { index: usize },

    /// A `DrawTo` was issued before any position was established.
    #[error("draw at index {index} before any positioning move")]
    DrawBeforeMove { index: usize },

    /// A `ToolDown`/`ToolUp` that does not change the tool state.
    #[error("redundant tool-state change at index {index}")]
    RedundantToolState { index: usize },

    /// A travel move was issued while the tool is down.
    #[error("travel move at index {index} while the tool is down")]
    TravelWhileDown { index: usize },

    /// `ReturnHome` appears somewhere other than the final instruction.
    #[error("return-to-home at index {index} is not the final instruction")]
    MisplacedReturnHome { index: usize },

    /// The program does not end with `ReturnHome`.
    #[error("program must end with return-to-home")]
    MissingReturnHome,

    /// The tool is still down when the program reaches its end.
    #[error("tool is down at the end of the program")]
    ToolDownAtEnd,
}

/// Checks instruction sequences against the invariants the compiler
/// guarantees structurally.
#[derive(Debug, Default)]
pub struct ProgramValidator;

impl ProgramValidator {
    /// Validates a full program: setup framing, tool-state well-formedness,
    /// and terminal return-home.
    pub fn validate(&self, program: &[ToolInstruction]) -> Result<(), ProgramError> {
        if program.len() < 3 {
            return Err(if program.is_empty() {
                ProgramError::MissingSetup
            } else {
                ProgramError::MissingReturnHome
            });
        }

        if !matches!(program[0], ToolInstruction::SetUnits(Units::Mm | Units::Inch))
            || !matches!(
                program[1],
                ToolInstruction::SetPositioning(Positioning::Absolute | Positioning::Relative)
            )
        {
            return Err(ProgramError::MissingSetup);
        }

        let last = program.len() - 1;
        if program[last] != ToolInstruction::ReturnHome {
            return Err(ProgramError::MissingReturnHome);
        }

        let mut tool_down = false;
        let mut positioned = false;
        for (index, instruction) in program.iter().enumerate().skip(2) {
            match instruction {
                ToolInstruction::SetUnits(_) | ToolInstruction::SetPositioning(_) => {
                    return Err(ProgramError::LateSetup { index });
                }
                ToolInstruction::MoveTo { .. } => {
                    if tool_down {
                        return Err(ProgramError::TravelWhileDown { index });
                    }
                    positioned = true;
                }
                ToolInstruction::ToolDown => {
                    if tool_down {
                        return Err(ProgramError::RedundantToolState { index });
                    }
                    tool_down = true;
                }
                ToolInstruction::ToolUp => {
                    if !tool_down {
                        return Err(ProgramError::RedundantToolState { index });
                    }
                    tool_down = false;
                }
                ToolInstruction::DrawTo { .. } => {
                    if !positioned {
                        return Err(ProgramError::DrawBeforeMove { index });
                    }
                    if !tool_down {
                        return Err(ProgramError::DrawWhileUp { index });
                    }
                }
                ToolInstruction::ReturnHome => {
                    if index != last {
                        return Err(ProgramError::MisplacedReturnHome { index });
                    }
                    if tool_down {
                        return Err(ProgramError::ToolDownAtEnd);
                    }
                }
            }
        }

        Ok(())
    }
}
