//! Render model - everything the rendering collaborator needs to draw a frame.
//!
//! Serializable so a non-Rust host can consume it as JSON.

use crate::engine::SelectionEngine;
use crate::input::PanOffset;
use crate::types::{CanvasRect, PointId};
use serde::Serialize;

/// Pointer cursor the host should show
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    #[default]
    Default,
    /// Pan mode armed, no button held
    Grab,
    /// Panning in progress
    Grabbing,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderPoint {
    pub id: PointId,
    /// Centre of the point in canvas space
    pub x: f32,
    pub y: f32,
    /// Diameter
    pub size: f32,
    pub selected: bool,
}

/// Selection rectangle overlay, in canvas space
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MarqueeOverlay {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<CanvasRect> for MarqueeOverlay {
    fn from(rect: CanvasRect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderModel {
    pub points: Vec<RenderPoint>,
    /// Present only while a marquee drag is in progress
    pub marquee: Option<MarqueeOverlay>,
    pub cursor: Cursor,
    pub background: (f32, f32),
    pub pan_offset: PanOffset,
}

impl SelectionEngine {
    pub fn render_model(&self) -> RenderModel {
        let points = self
            .points()
            .iter()
            .map(|p| {
                let center = p.center();
                RenderPoint {
                    id: p.id,
                    x: center.x,
                    y: center.y,
                    size: p.size,
                    selected: p.is_selected(),
                }
            })
            .collect();

        RenderModel {
            points,
            marquee: self.marquee().active_bounds().map(MarqueeOverlay::from),
            cursor: self.cursor(),
            background: self.background_size(),
            pan_offset: self.pan_offset(),
        }
    }
}
