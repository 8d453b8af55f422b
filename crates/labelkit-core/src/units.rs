//! Machine coordinate units and positioning modes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine coordinate units (millimeters or inches)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Millimeters (metric)
    Mm,
    /// Inches (imperial)
    Inch,
}

impl Units {
    /// Convert a value from one unit to another.
    ///
    /// Returns the original value unchanged when the units are the same.
    pub fn convert(value: f64, from: Units, to: Units) -> f64 {
        match (from, to) {
            (Units::Mm, Units::Inch) => value / 25.4,
            (Units::Inch, Units::Mm) => value * 25.4,
            _ => value,
        }
    }
}

impl Default for Units {
    fn default() -> Self {
        Self::Mm
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Units::Mm => write!(f, "mm"),
            Units::Inch => write!(f, "in"),
        }
    }
}

/// Coordinate interpretation mode for motion commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Positioning {
    /// Every coordinate is absolute in the device workspace
    Absolute,
    /// Coordinates are offsets from the current position
    Relative,
}

impl Default for Positioning {
    fn default() -> Self {
        Self::Absolute
    }
}

impl fmt::Display for Positioning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Positioning::Absolute => write!(f, "absolute"),
            Positioning::Relative => write!(f, "relative"),
        }
    }
}
