//! Pointer move handling - marquee update and panning.
//!
//! Mouse move is called very frequently during a gesture, so it exits early
//! when idle and only touches the state the current gesture owns.

use super::{EventResponse, InteractionState, MouseMove};
use crate::engine::SelectionEngine;
use crate::input::coords::CoordinateMapper;
use tracing::trace;

impl SelectionEngine {
    pub fn handle_mouse_move(&mut self, event: &MouseMove) -> EventResponse {
        match self.state {
            InteractionState::Idle => EventResponse::IGNORED,

            InteractionState::Marqueeing { .. } => {
                let current = CoordinateMapper::to_canvas(event.position, self.pan_offset);
                self.marquee.update(current);
                EventResponse::CHANGED
            }

            InteractionState::Panning { last_pos } => {
                self.pan_offset = self.pan_offset.panned(last_pos, event.position);
                self.state = InteractionState::Panning {
                    last_pos: event.position,
                };
                trace!(dx = self.pan_offset.dx, dy = self.pan_offset.dy, "panned");
                EventResponse::CHANGED
            }
        }
    }
}
