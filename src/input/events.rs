//! Pointer event values handed in by the rendering collaborator.
//!
//! The collaborator performs its own hit testing and reports the result as a
//! [`PointerTarget`], so the engine never depends on a scene graph API.

use crate::constants::{BUTTON_AUXILIARY, BUTTON_PRIMARY, BUTTON_SECONDARY};
use crate::types::{PointId, ScreenPos};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    /// Selects (left)
    Primary,
    /// Pans (middle / wheel)
    Auxiliary,
    /// Cancels (right)
    Secondary,
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` index. Extra buttons (back/forward) map to None.
    pub fn from_dom_index(index: u8) -> Option<Self> {
        match index {
            BUTTON_PRIMARY => Some(Self::Primary),
            BUTTON_AUXILIARY => Some(Self::Auxiliary),
            BUTTON_SECONDARY => Some(Self::Secondary),
            _ => None,
        }
    }

    /// Whether the host's native action (context menu, autoscroll) must be suppressed
    pub fn suppresses_default(self) -> bool {
        matches!(self, Self::Auxiliary | Self::Secondary)
    }
}

/// What the pointer went down on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum PointerTarget {
    Point(PointId),
    Background,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MouseDown {
    pub button: PointerButton,
    pub position: ScreenPos,
    pub target: PointerTarget,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MouseMove {
    pub position: ScreenPos,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MouseUp {
    pub button: PointerButton,
    pub position: ScreenPos,
}

/// One step of a gesture, in arrival order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerEvent {
    Down(MouseDown),
    Move(MouseMove),
    Up(MouseUp),
}

impl PointerEvent {
    pub fn down(button: PointerButton, x: f32, y: f32, target: PointerTarget) -> Self {
        Self::Down(MouseDown {
            button,
            position: ScreenPos::new(x, y),
            target,
        })
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::Move(MouseMove {
            position: ScreenPos::new(x, y),
        })
    }

    pub fn up(button: PointerButton, x: f32, y: f32) -> Self {
        Self::Up(MouseUp {
            button,
            position: ScreenPos::new(x, y),
        })
    }

    /// Screen position the event was reported at.
    pub fn position(&self) -> ScreenPos {
        match self {
            Self::Down(down) => down.position,
            Self::Move(moved) => moved.position,
            Self::Up(up) => up.position,
        }
    }
}

/// What the host should do after an event was handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Call the host's default-suppression (e.g. `preventDefault`)
    pub prevent_default: bool,
    /// Engine state changed; the host should re-render
    pub changed: bool,
}

impl EventResponse {
    pub const IGNORED: Self = Self {
        prevent_default: false,
        changed: false,
    };

    pub const CHANGED: Self = Self {
        prevent_default: false,
        changed: true,
    };

    pub fn with_prevent_default(mut self, prevent: bool) -> Self {
        self.prevent_default |= prevent;
        self
    }
}
