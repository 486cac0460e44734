//! Unit tests for the point store.

use pointboard::SelectionError;
use pointboard::constants::POINT_SIZE;
use pointboard::data::DataError;
use pointboard::store::PointSet;
use pointboard::types::{CanvasPos, PointId, RawPoint};
use std::collections::HashSet;

fn row(count: usize) -> PointSet {
    let raw: Vec<RawPoint> = (0..count).map(|i| RawPoint::new(i as f32 * 30.0, 0.0)).collect();
    PointSet::load(&raw, POINT_SIZE).unwrap()
}

#[test]
fn test_load_empty_is_valid() {
    let set = PointSet::load(&[], POINT_SIZE).unwrap();
    assert!(set.is_empty());
    assert_eq!(set, PointSet::empty());
}

#[test]
fn test_explicit_ids_are_kept() {
    let raw = [RawPoint::with_id(40, 0.0, 0.0), RawPoint::with_id(7, 5.0, 5.0)];
    let set = PointSet::load(&raw, POINT_SIZE).unwrap();
    let ids: Vec<PointId> = set.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![PointId(40), PointId(7)]);
}

#[test]
fn test_explicit_id_colliding_with_index_is_rejected() {
    // Second point defaults to id 1, which the first already claimed
    let raw = [RawPoint::with_id(1, 0.0, 0.0), RawPoint::new(5.0, 5.0)];
    let err = PointSet::load(&raw, POINT_SIZE).unwrap_err();
    assert!(matches!(err, DataError::DuplicateId(PointId(1))));
}

#[test]
fn test_points_matching_is_read_only() {
    let set = row(3);
    let matches = set.points_matching(|p| p.position.x > 0.0);
    assert_eq!(matches.len(), 2);
    assert_eq!(set.len(), 3);
}

#[test]
fn test_remove_unknown_ids_returns_equal_set() {
    let set = row(3);
    let same = set.remove(&HashSet::from([PointId(99)]));
    assert_eq!(same, set);
}

#[test]
fn test_remove_all() {
    let set = row(3);
    let all: HashSet<PointId> = set.iter().map(|p| p.id).collect();
    assert!(set.remove(&all).is_empty());
}

#[test]
fn test_by_id_after_remove() {
    let set = row(3).remove(&HashSet::from([PointId(1)]));
    assert_eq!(set.by_id(PointId(1)).unwrap_err(), SelectionError::UnknownPoint(PointId(1)));
    assert_eq!(set.by_id(PointId(2)).unwrap().center(), CanvasPos::new(60.0, 0.0));
}

#[test]
fn test_hit_test_after_remove() {
    let set = row(3);
    assert_eq!(set.hit_test(CanvasPos::new(30.0, 0.0)), Some(PointId(1)));
    let set = set.remove(&HashSet::from([PointId(1)]));
    assert_eq!(set.hit_test(CanvasPos::new(30.0, 0.0)), None);
}
