//! Coordinate mapping between screen space and canvas space.
//!
//! Every coordinate the marquee consumes goes through [`CoordinateMapper`], so
//! the rectangle and the point extents are always compared in canvas space.

use crate::types::{CanvasPos, ScreenPos};
use serde::{Deserialize, Serialize};

/// Translation between screen space and canvas space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PanOffset {
    pub dx: f32,
    pub dy: f32,
}

impl PanOffset {
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Offset moved by the screen-space delta between two pointer positions.
    #[inline]
    pub fn panned(self, from: ScreenPos, to: ScreenPos) -> Self {
        Self {
            dx: self.dx + (to.x - from.x),
            dy: self.dy + (to.y - from.y),
        }
    }
}

pub struct CoordinateMapper;

impl CoordinateMapper {
    /// Convert screen position to canvas position
    #[inline]
    pub fn to_canvas(screen_pos: ScreenPos, offset: PanOffset) -> CanvasPos {
        CanvasPos::new(screen_pos.x - offset.dx, screen_pos.y - offset.dy)
    }
}
