//! Selection controller - the only component that changes selection flags.
//!
//! Keeps the immutable point set captured at load time next to the working
//! set. Every operation computes a complete replacement set and swaps it in,
//! so there is never an intermediate state with stale flags.

use crate::store::PointSet;
use crate::types::PointId;
use std::collections::HashSet;
use tracing::{debug, info};

#[derive(Clone, Debug)]
pub struct SelectionController {
    initial: PointSet,
    current: PointSet,
}

impl SelectionController {
    /// Take ownership of the freshly loaded set. It is kept as the reset target.
    pub fn new(initial: PointSet) -> Self {
        Self {
            current: initial.clone(),
            initial,
        }
    }

    pub fn points(&self) -> &PointSet {
        &self.current
    }

    pub fn initial_points(&self) -> &PointSet {
        &self.initial
    }

    pub fn selected_ids(&self) -> HashSet<PointId> {
        self.current.selected_ids()
    }

    /// Select exactly `ids`; everything else is deselected. Unknown ids are
    /// ignored. Returns whether any flag changed.
    pub fn select_only(&mut self, ids: &HashSet<PointId>) -> bool {
        let next = self.current.with_selection(ids);
        let changed = next != self.current;
        if changed {
            debug!(count = ids.len(), "selection replaced");
        }
        self.current = next;
        changed
    }

    pub fn deselect_all(&mut self) -> bool {
        self.select_only(&HashSet::new())
    }

    /// Drop every selected point. Empty selection leaves the set unchanged.
    pub fn delete_selected(&mut self) -> &PointSet {
        let selected = self.current.selected_ids();
        if !selected.is_empty() {
            self.current = self.current.remove(&selected);
            info!(
                deleted = selected.len(),
                remaining = self.current.len(),
                "deleted selected points"
            );
        }
        &self.current
    }

    /// Restore the loaded point list with nothing selected.
    pub fn reset(&mut self) -> &PointSet {
        self.current = self.initial.clone();
        info!(count = self.current.len(), "point set reset");
        &self.current
    }
}
