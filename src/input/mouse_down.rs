//! Pointer down handling - click selection, marquee/pan start, marquee cancel.

use super::{EventResponse, InteractionState, MouseDown, PointerButton, PointerTarget};
use crate::engine::SelectionEngine;
use crate::error::SelectionResult;
use crate::input::coords::CoordinateMapper;
use crate::profile_scope;
use std::collections::HashSet;
use tracing::debug;

impl SelectionEngine {
    pub fn handle_mouse_down(&mut self, event: &MouseDown) -> SelectionResult<EventResponse> {
        profile_scope!("handle_mouse_down");

        let response = match (&self.state, event.button) {
            (InteractionState::Idle, PointerButton::Primary) => match event.target {
                PointerTarget::Point(id) => {
                    // Validate before touching anything
                    self.selection.points().by_id(id)?;
                    self.pan_armed = false;
                    self.selection.select_only(&HashSet::from([id]));
                    EventResponse::CHANGED
                }
                PointerTarget::Background => {
                    self.pan_armed = false;
                    let prior_selection = self.selection.selected_ids();
                    self.selection.deselect_all();
                    let anchor = CoordinateMapper::to_canvas(event.position, self.pan_offset);
                    self.marquee.begin(anchor);
                    self.transition(InteractionState::Marqueeing { prior_selection });
                    EventResponse::CHANGED
                }
            },

            (InteractionState::Idle, PointerButton::Auxiliary) => {
                self.pan_armed = true;
                self.transition(InteractionState::Panning {
                    last_pos: event.position,
                });
                EventResponse::CHANGED
            }

            (InteractionState::Idle, PointerButton::Secondary) => {
                // Only the cursor can change here
                let was_armed = std::mem::replace(&mut self.pan_armed, false);
                EventResponse {
                    changed: was_armed,
                    ..EventResponse::IGNORED
                }
            }

            (InteractionState::Marqueeing { .. }, PointerButton::Secondary) => {
                self.marquee.cancel();
                let previous = self.state.take();
                debug!(from = previous.name(), "marquee cancelled");
                if let Some(prior) = previous.prior_selection() {
                    self.selection.select_only(prior);
                }
                EventResponse::CHANGED
            }

            (state, button) => {
                debug!(state = state.name(), ?button, "pointer down ignored mid-gesture");
                EventResponse::IGNORED
            }
        };

        Ok(response.with_prevent_default(event.button.suppresses_default()))
    }
}
