//! The selection engine - one explicitly constructed, explicitly owned instance
//! per canvas.
//!
//! The engine owns every piece of mutable interaction state: the working point
//! set (through the selection controller), the marquee, the interaction state
//! and the pan offset. Nothing is shared between instances. Pointer handlers
//! live in [`crate::input`] as further `impl SelectionEngine` blocks.

use crate::constants::{BACKGROUND_SIZE, POINT_SIZE};
use crate::data::DataResult;
use crate::error::{SelectionError, SelectionResult};
use crate::input::{EventResponse, InteractionState, PanOffset, PointerEvent};
use crate::marquee::MarqueeSelector;
use crate::profile_scope;
use crate::render::{Cursor, RenderModel};
use crate::selection::SelectionController;
use crate::settings::Settings;
use crate::store::PointSet;
use crate::types::{PointId, RawPoint};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct SelectionEngine {
    pub(crate) selection: SelectionController,
    pub(crate) marquee: MarqueeSelector,
    pub(crate) state: InteractionState,
    pub(crate) pan_offset: PanOffset,
    /// Pan mode stays armed after a pan ends, until the next primary or
    /// secondary pointer-down. Only affects the cursor.
    pub(crate) pan_armed: bool,
    background_size: (f32, f32),
}

impl SelectionEngine {
    /// Load points with the default point size.
    pub fn new(raw: &[RawPoint]) -> DataResult<Self> {
        Ok(Self::from_point_set(PointSet::load(raw, POINT_SIZE)?))
    }

    pub fn with_settings(raw: &[RawPoint], settings: &Settings) -> DataResult<Self> {
        let mut engine = Self::from_point_set(PointSet::load(raw, settings.point_size)?);
        engine.background_size = settings.background_size;
        Ok(engine)
    }

    /// Start from an already built set; it becomes the reset target.
    pub fn from_point_set(points: PointSet) -> Self {
        debug!(count = points.len(), "selection engine created");
        Self {
            selection: SelectionController::new(points),
            marquee: MarqueeSelector::new(),
            state: InteractionState::Idle,
            pan_offset: PanOffset::default(),
            pan_armed: false,
            background_size: BACKGROUND_SIZE,
        }
    }

    /// Dispatch one pointer event. On error nothing was changed.
    pub fn handle_event(&mut self, event: &PointerEvent) -> SelectionResult<EventResponse> {
        profile_scope!("handle_event");

        let pos = event.position();
        let result = if !pos.x.is_finite() || !pos.y.is_finite() {
            Err(SelectionError::NonFinitePosition { x: pos.x, y: pos.y })
        } else {
            match event {
                PointerEvent::Down(down) => self.handle_mouse_down(down),
                PointerEvent::Move(moved) => Ok(self.handle_mouse_move(moved)),
                PointerEvent::Up(up) => self.handle_mouse_up(up),
            }
        };
        if let Err(ref e) = result {
            warn!(error = %e, state = self.state.name(), "rejected pointer event");
        }
        result
    }

    /// Remove every selected point. Empty selection is a no-op.
    pub fn delete_selected(&mut self) -> &PointSet {
        self.selection.delete_selected()
    }

    /// Restore the loaded points with nothing selected. An in-flight marquee
    /// is abandoned; the pan offset is kept.
    pub fn reset_selection(&mut self) -> &PointSet {
        if self.state.is_marqueeing() {
            self.marquee.cancel();
            self.state = InteractionState::Idle;
        }
        self.selection.reset()
    }

    pub fn points(&self) -> &PointSet {
        self.selection.points()
    }

    pub fn selected_ids(&self) -> HashSet<PointId> {
        self.selection.selected_ids()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn pan_offset(&self) -> PanOffset {
        self.pan_offset
    }

    pub fn marquee(&self) -> &MarqueeSelector {
        &self.marquee
    }

    pub fn background_size(&self) -> (f32, f32) {
        self.background_size
    }

    pub fn cursor(&self) -> Cursor {
        match self.state {
            InteractionState::Panning { .. } => Cursor::Grabbing,
            _ if self.pan_armed => Cursor::Grab,
            _ => Cursor::Default,
        }
    }

    /// Replace the interaction state, logging the transition.
    pub(crate) fn transition(&mut self, next: InteractionState) {
        if self.state.name() != next.name() {
            debug!(from = self.state.name(), to = next.name(), "interaction state change");
        }
        self.state = next;
    }
}

/// Mutex-guarded engine for hosts that deliver events from more than one thread.
///
/// Each call takes the lock once, so every event still completes before the
/// next one is applied.
#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<SelectionEngine>>,
}

impl SharedEngine {
    pub fn new(engine: SelectionEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn handle_event(&self, event: &PointerEvent) -> SelectionResult<EventResponse> {
        self.inner.lock().handle_event(event)
    }

    /// Returns the number of points left.
    pub fn delete_selected(&self) -> usize {
        self.inner.lock().delete_selected().len()
    }

    /// Returns the number of points restored.
    pub fn reset_selection(&self) -> usize {
        self.inner.lock().reset_selection().len()
    }

    pub fn render_model(&self) -> RenderModel {
        self.inner.lock().render_model()
    }

    /// Run a read-only query against a consistent snapshot.
    pub fn read<R>(&self, f: impl FnOnce(&SelectionEngine) -> R) -> R {
        f(&self.inner.lock())
    }
}
