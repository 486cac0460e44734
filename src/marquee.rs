//! Marquee (rubber-band) selector.
//!
//! Owns the transient [`SelectionRectangle`] and resolves it into a set of ids.
//! It never touches point selection flags; the ids it returns are applied by
//! the selection controller. All coordinates are canvas space.

use crate::error::{SelectionError, SelectionResult};
use crate::profile_scope;
use crate::store::PointSet;
use crate::types::{CanvasPos, CanvasRect, PointId};
use std::collections::HashSet;
use tracing::trace;

/// Two-corner rectangle tracked during a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SelectionRectangle {
    /// Fixed at drag start
    pub anchor: CanvasPos,
    /// Follows the live pointer
    pub current: CanvasPos,
    pub active: bool,
}

impl SelectionRectangle {
    /// Normalized bounds spanned by the two corners.
    pub fn bounds(&self) -> CanvasRect {
        CanvasRect::from_corners(self.anchor, self.current)
    }
}

#[derive(Clone, Debug, Default)]
pub struct MarqueeSelector {
    rect: SelectionRectangle,
}

impl MarqueeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, anchor: CanvasPos) {
        self.rect = SelectionRectangle {
            anchor,
            current: anchor,
            active: true,
        };
    }

    /// Move the live corner. Ignored unless a marquee is active.
    pub fn update(&mut self, current: CanvasPos) {
        if self.rect.active {
            self.rect.current = current;
            trace!(x = current.x, y = current.y, "marquee updated");
        }
    }

    /// Ids of every point whose extent intersects the rectangle, then closes
    /// the marquee. Errors if no marquee is active.
    pub fn resolve(&mut self, points: &PointSet) -> SelectionResult<HashSet<PointId>> {
        profile_scope!("marquee_resolve");

        if !self.rect.active {
            return Err(SelectionError::MarqueeInactive);
        }
        let bounds = self.rect.bounds();
        let ids = points.ids_intersecting(&bounds).into_iter().collect();
        self.rect.active = false;
        Ok(ids)
    }

    /// Close the marquee without resolving it.
    pub fn cancel(&mut self) {
        self.rect.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.rect.active
    }

    pub fn rectangle(&self) -> &SelectionRectangle {
        &self.rect
    }

    /// Current bounds while active, for the overlay.
    pub fn active_bounds(&self) -> Option<CanvasRect> {
        self.rect.active.then(|| self.rect.bounds())
    }
}
