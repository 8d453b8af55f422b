//! The geometry-source boundary.

use labelkit_core::{LabelGeometry, PathSegment, Point};

/// Supplies the vector outline for a label.
///
/// Implementations must be deterministic: the same label always yields the
/// same geometry, so the whole pipeline stays reproducible. Coordinates are
/// local to the label (origin near its baseline); the compiler applies the
/// workspace offset.
pub trait GeometrySource {
    fn geometry(&self, label: &str) -> LabelGeometry;
}

/// Built-in stand-in source: one horizontal baseline stroke per label,
/// sized by character count.
///
/// Glyph outline production is out of scope for this crate; deployments
/// plug a real outline producer in through [`GeometrySource`]. This source
/// keeps the pipeline usable end to end while staying deliberately simple:
/// a label of `n` characters becomes a single stroke from local (0,0) to
/// (`n` × `char_width`, 0).
#[derive(Debug, Clone)]
pub struct BaselineStrokeSource {
    char_width: f64,
}

impl BaselineStrokeSource {
    /// Creates a source allotting `char_width` millimeters per character.
    pub fn new(char_width: f64) -> Self {
        Self { char_width }
    }
}

impl Default for BaselineStrokeSource {
    fn default() -> Self {
        Self { char_width: 10.0 }
    }
}

impl GeometrySource for BaselineStrokeSource {
    fn geometry(&self, label: &str) -> LabelGeometry {
        let chars = label.chars().count();
        if chars == 0 {
            return LabelGeometry::new();
        }
        let width = chars as f64 * self.char_width;
        LabelGeometry::from_segments(vec![PathSegment::new(vec![
            Point::new(0.0, 0.0),
            Point::new(width, 0.0),
        ])])
    }
}
