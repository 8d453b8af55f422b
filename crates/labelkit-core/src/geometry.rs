//! Geometry model for label outlines.
//!
//! A label's drawable shape is a [`LabelGeometry`]: an ordered list of
//! [`PathSegment`]s, each one continuous pen-down stroke in a local
//! coordinate space with the origin near the label baseline. An [`Offset`]
//! anchors that local space into the device workspace.

use serde::{Deserialize, Serialize};

/// A 2-D point in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Both coordinates are finite (neither NaN nor infinite).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One continuous pen-down stroke: an ordered list of points.
///
/// A drawable segment has at least two points. Segments with fewer are
/// degenerate; the toolpath compiler skips them rather than emitting a
/// zero-length draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub points: Vec<Point>,
}

impl PathSegment {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build a segment from raw coordinate pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self {
            points: coords.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        }
    }

    /// Whether this segment has enough points to produce a visible stroke.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Total pen-down distance along the stroke.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }
}

/// The ordered vector outline for one label.
///
/// Insertion order is draw order. An empty geometry is valid and compiles
/// to a minimal program (setup and return-home only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelGeometry {
    pub segments: Vec<PathSegment>,
}

impl LabelGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    pub fn add_segment(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Fixed translation anchoring local label coordinates into the device
/// workspace. Configuration, not derived state; both components must be
/// finite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn test_point_finiteness() {
        assert!(Point::new(1.0, -2.5).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_segment_drawable() {
        assert!(!PathSegment::from_coords(&[]).is_drawable());
        assert!(!PathSegment::from_coords(&[(1.0, 1.0)]).is_drawable());
        assert!(PathSegment::from_coords(&[(0.0, 0.0), (1.0, 0.0)]).is_drawable());
    }

    #[test]
    fn test_segment_length() {
        let segment = PathSegment::from_coords(&[(0.0, 0.0), (3.0, 4.0), (3.0, 14.0)]);
        assert_eq!(segment.length(), 15.0);
    }

    #[test]
    fn test_geometry_order_preserved() {
        let mut geometry = LabelGeometry::new();
        geometry.add_segment(PathSegment::from_coords(&[(0.0, 0.0), (1.0, 0.0)]));
        geometry.add_segment(PathSegment::from_coords(&[(2.0, 0.0), (3.0, 0.0)]));
        assert_eq!(geometry.segments.len(), 2);
        assert_eq!(geometry.segments[0].points[0], Point::new(0.0, 0.0));
        assert_eq!(geometry.segments[1].points[0], Point::new(2.0, 0.0));
    }
}
