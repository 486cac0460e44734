//! Interaction state machine - one explicit state for the current gesture.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Idle                 (primary down on a point: select only it)
//! Idle -> Marqueeing           (primary down on background)
//! Idle -> Panning              (auxiliary down anywhere)
//! Idle -> Idle                 (secondary down: default suppressed only)
//!
//! Marqueeing -> Idle           (primary up resolves, secondary down cancels)
//! Panning -> Idle              (auxiliary up)
//! ```
//!
//! Any other pointer-down while a gesture is active is ignored.

use crate::types::{PointId, ScreenPos};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionState {
    /// No active gesture
    #[default]
    Idle,

    /// Rubber-band selection in progress
    Marqueeing {
        /// Selection before the drag started, restored on cancel
        prior_selection: HashSet<PointId>,
    },

    /// View panning (auxiliary button held)
    Panning {
        /// Last pointer position for delta calculation
        last_pos: ScreenPos,
    },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_marqueeing(&self) -> bool {
        matches!(self, Self::Marqueeing { .. })
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Marqueeing { .. } => "marqueeing",
            Self::Panning { .. } => "panning",
        }
    }

    /// Selection to restore if the marquee is cancelled
    pub fn prior_selection(&self) -> Option<&HashSet<PointId>> {
        match self {
            Self::Marqueeing { prior_selection } => Some(prior_selection),
            _ => None,
        }
    }

    /// Reset to Idle, returning the state that was replaced
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}
