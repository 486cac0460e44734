//! Pointer up handling - resolve the marquee, end panning.

use super::{EventResponse, InteractionState, MouseUp, PointerButton};
use crate::engine::SelectionEngine;
use crate::error::SelectionResult;
use crate::profile_scope;
use tracing::debug;

impl SelectionEngine {
    pub fn handle_mouse_up(&mut self, event: &MouseUp) -> SelectionResult<EventResponse> {
        profile_scope!("handle_mouse_up");

        let response = match (&self.state, event.button) {
            (InteractionState::Marqueeing { .. }, PointerButton::Primary) => {
                let ids = self.marquee.resolve(self.selection.points())?;
                debug!(hits = ids.len(), "marquee resolved");
                self.transition(InteractionState::Idle);
                self.selection.select_only(&ids);
                EventResponse::CHANGED
            }

            (InteractionState::Panning { .. }, PointerButton::Auxiliary) => {
                self.transition(InteractionState::Idle);
                EventResponse::CHANGED
            }

            // Release of a button that did not start the current gesture
            _ => EventResponse::IGNORED,
        };

        Ok(response)
    }
}
