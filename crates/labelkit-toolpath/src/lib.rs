//! # LabelKit Toolpath
//!
//! Compiles a label's vector outline into a deterministic sequence of
//! plotter instructions and renders it in the device wire format.
//!
//! ## Pipeline
//!
//! - **Compiler**: [`ToolpathCompiler`] turns a [`labelkit_core::LabelGeometry`]
//!   into an ordered [`ToolInstruction`] sequence: unit/positioning setup,
//!   one move/down/draw/up cycle per segment, and a terminal return-to-home.
//! - **Formatter**: [`format_program`] renders an instruction sequence as
//!   G-code, one line per instruction, with a fixed directive vocabulary.
//! - **Validator**: [`ProgramValidator`] checks the structural invariants of
//!   an instruction sequence (setup framing, tool-state well-formedness).
//!
//! Compilation and formatting are pure functions of their inputs: the same
//! geometry and origin always produce byte-identical output.

pub mod compiler;
pub mod error;
pub mod formatter;
pub mod instruction;
pub mod validator;

pub use compiler::ToolpathCompiler;
pub use error::{CompileError, CompileResult};
pub use formatter::{format_instruction, format_program, PEN_DOWN_POWER};
pub use instruction::ToolInstruction;
pub use validator::{ProgramError, ProgramValidator};
