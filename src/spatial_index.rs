//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing over point extents. Marquee
//! resolution and hit testing go from O(n) to O(log n + k).

use crate::types::{CanvasPos, CanvasRect, PointId};
use rstar::{AABB, RTree, RTreeObject};

/// A spatial entry representing one point's extent.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub point_id: PointId,
    pub extent: CanvasRect,
}

impl SpatialEntry {
    pub fn new(point_id: PointId, extent: CanvasRect) -> Self {
        Self { point_id, extent }
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.extent.x, self.extent.y],
            [self.extent.max_x(), self.extent.max_y()],
        )
    }
}

/// Spatial index for points using an R-tree.
///
/// The tree's envelope queries are inclusive, so every query re-checks the
/// candidates with the exact predicate the caller asked for.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Build a spatial index from an iterator of (id, extent) pairs.
    pub fn from_extents<I>(extents: I) -> Self
    where
        I: Iterator<Item = (PointId, CanvasRect)>,
    {
        let entries: Vec<SpatialEntry> = extents
            .map(|(id, extent)| SpatialEntry::new(id, extent))
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Ids of all points whose extent contains the position (inclusive).
    pub fn query_point(&self, pos: CanvasPos) -> Vec<PointId> {
        let envelope = AABB::from_point([pos.x, pos.y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.extent.contains(pos))
            .map(|entry| entry.point_id)
            .collect()
    }

    /// Ids of all points whose extent strictly overlaps the rectangle.
    pub fn query_rect(&self, rect: &CanvasRect) -> Vec<PointId> {
        let envelope = AABB::from_corners([rect.x, rect.y], [rect.max_x(), rect.max_y()]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| rect.intersects(&entry.extent))
            .map(|entry| entry.point_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl std::fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialIndex")
            .field("len", &self.len())
            .finish()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
