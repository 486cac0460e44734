//! Point Store - immutable, versioned sets of points.
//!
//! A [`PointSet`] is never mutated in place. Every change produces a fresh set
//! that callers swap in atomically, so readers never see a half-applied
//! selection. Sets that differ only in selection flags share the same spatial
//! index; `remove` builds a new one.

use crate::data::{DataError, DataResult};
use crate::error::{SelectionError, SelectionResult};
use crate::spatial_index::SpatialIndex;
use crate::types::{CanvasPos, CanvasRect, Point, PointId, RawPoint};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct PointSet {
    points: Arc<[Point]>,
    slots: Arc<HashMap<PointId, usize>>,
    index: Arc<SpatialIndex>,
}

impl PointSet {
    /// Build a point set from external data. Every point starts unselected.
    ///
    /// Raw coordinates are point centres; the stored position is the top-left
    /// of a `size` by `size` extent. Points without an explicit id get their
    /// list index.
    pub fn load(raw: &[RawPoint], size: f32) -> DataResult<Self> {
        let mut points = Vec::with_capacity(raw.len());
        let mut seen = HashSet::with_capacity(raw.len());

        for (i, raw_point) in raw.iter().enumerate() {
            let id = PointId(raw_point.id.unwrap_or(i as u64));
            if !raw_point.x.is_finite() || !raw_point.y.is_finite() {
                return Err(DataError::NonFinite {
                    id,
                    x: raw_point.x,
                    y: raw_point.y,
                });
            }
            if !seen.insert(id) {
                return Err(DataError::DuplicateId(id));
            }
            let half = size / 2.0;
            points.push(Point::new(
                id,
                CanvasPos::new(raw_point.x - half, raw_point.y - half),
                size,
            ));
        }

        Ok(Self::from_points(points))
    }

    pub fn empty() -> Self {
        Self::from_points(Vec::new())
    }

    fn from_points(points: Vec<Point>) -> Self {
        let slots = points.iter().enumerate().map(|(i, p)| (p.id, i)).collect();
        let index = SpatialIndex::from_extents(points.iter().map(|p| (p.id, p.extent())));
        Self {
            points: points.into(),
            slots: Arc::new(slots),
            index: Arc::new(index),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, id: PointId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn by_id(&self, id: PointId) -> SelectionResult<&Point> {
        self.slots
            .get(&id)
            .map(|&slot| &self.points[slot])
            .ok_or(SelectionError::UnknownPoint(id))
    }

    /// Read-only query, in store order.
    pub fn points_matching<F>(&self, predicate: F) -> Vec<Point>
    where
        F: Fn(&Point) -> bool,
    {
        self.points.iter().filter(|p| predicate(p)).cloned().collect()
    }

    pub fn selected_ids(&self) -> HashSet<PointId> {
        self.points
            .iter()
            .filter(|p| p.selected)
            .map(|p| p.id)
            .collect()
    }

    /// New set without the given ids. Remaining points keep their order.
    pub fn remove(&self, ids: &HashSet<PointId>) -> Self {
        if ids.is_empty() || !ids.iter().any(|id| self.contains(*id)) {
            return self.clone();
        }
        let kept = self
            .points
            .iter()
            .filter(|p| !ids.contains(&p.id))
            .cloned()
            .collect();
        Self::from_points(kept)
    }

    /// Ids whose extents strictly overlap `rect`, in store order.
    pub fn ids_intersecting(&self, rect: &CanvasRect) -> Vec<PointId> {
        let mut hits = self.index.query_rect(rect);
        hits.sort_by_key(|id| self.slots.get(id).copied().unwrap_or(usize::MAX));
        hits
    }

    /// Topmost point whose extent contains `pos`; later points draw on top.
    pub fn hit_test(&self, pos: CanvasPos) -> Option<PointId> {
        self.index
            .query_point(pos)
            .into_iter()
            .max_by_key(|id| self.slots.get(id).copied().unwrap_or(0))
    }

    /// New set where exactly the matching ids are selected. Crate-private so
    /// only the selection controller decides what gets selected.
    pub(crate) fn with_selection(&self, ids: &HashSet<PointId>) -> Self {
        let points: Vec<Point> = self
            .points
            .iter()
            .map(|p| Point {
                selected: ids.contains(&p.id),
                ..p.clone()
            })
            .collect();
        Self {
            points: points.into(),
            slots: Arc::clone(&self.slots),
            index: Arc::clone(&self.index),
        }
    }
}

impl Default for PointSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for PointSet {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}
