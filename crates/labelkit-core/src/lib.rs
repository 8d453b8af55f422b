//! # LabelKit Core
//!
//! Core types shared by the LabelKit crates: 2-D points, path segments,
//! label geometry, workspace offsets, and machine mode enums (units and
//! positioning).

pub mod geometry;
pub mod units;

pub use geometry::{LabelGeometry, Offset, PathSegment, Point};
pub use units::{Positioning, Units};
