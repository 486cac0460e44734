//! Core types for the pointboard canvas.
//!
//! Positions come in two flavours that must never be mixed: [`ScreenPos`] is
//! what the pointer reports, [`CanvasPos`] is where points live. Only
//! [`crate::input::coords`] converts between them.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

/// Stable identifier of a point. Unique within a store, never reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(pub u64);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PointId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

// ============================================================================
// Positions
// ============================================================================

/// A position in screen space, as reported by the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenPos {
    pub x: f32,
    pub y: f32,
}

impl ScreenPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A position in canvas space, after the pan offset has been removed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasPos {
    pub x: f32,
    pub y: f32,
}

impl CanvasPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Rectangles
// ============================================================================

/// Axis-aligned rectangle in canvas space, normalized so width/height >= 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CanvasRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle spanned by two arbitrary corners.
    pub fn from_corners(a: CanvasPos, b: CanvasPos) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Strict axis-aligned overlap: projections must overlap on both axes.
    ///
    /// Touching edges do not count. A zero-size rectangle only intersects a box
    /// whose interior contains it.
    #[inline]
    pub fn intersects(&self, other: &CanvasRect) -> bool {
        self.x < other.max_x()
            && self.max_x() > other.x
            && self.y < other.max_y()
            && self.max_y() > other.y
    }

    /// Inclusive containment of a position.
    #[inline]
    pub fn contains(&self, pos: CanvasPos) -> bool {
        pos.x >= self.x && pos.x <= self.max_x() && pos.y >= self.y && pos.y <= self.max_y()
    }
}

// ============================================================================
// Points
// ============================================================================

/// A selectable point on the canvas.
///
/// `selected` is read-only outside the crate; only the selection controller
/// produces point sets with different flags.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Point {
    pub id: PointId,
    /// Top-left corner of the point's extent
    pub position: CanvasPos,
    /// Width and height of the extent
    pub size: f32,
    pub(crate) selected: bool,
}

impl Point {
    pub fn new(id: PointId, position: CanvasPos, size: f32) -> Self {
        Self {
            id,
            position,
            size,
            selected: false,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// The point's extent as a canvas rectangle
    pub fn extent(&self) -> CanvasRect {
        CanvasRect::new(self.position.x, self.position.y, self.size, self.size)
    }

    /// Centre of the extent, which is what gets drawn
    pub fn center(&self) -> CanvasPos {
        CanvasPos::new(self.position.x + self.size / 2.0, self.position.y + self.size / 2.0)
    }
}

/// A point as supplied by external data: its centre and an optional id.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub x: f32,
    pub y: f32,
}

impl RawPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { id: None, x, y }
    }

    pub const fn with_id(id: u64, x: f32, y: f32) -> Self {
        Self { id: Some(id), x, y }
    }
}
