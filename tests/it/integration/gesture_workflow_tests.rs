//! Gesture workflows mixing pan, marquee, delete and reset.

use crate::helpers::{
    TestEngineBuilder, assert_point_count, assert_selected, click_point, drag_marquee, pan, send,
    start_marquee, two_point_engine,
};
use pointboard::input::{PanOffset, PointerButton, PointerEvent, PointerTarget};
use pointboard::render::Cursor;
use pointboard::types::PointId;

#[test]
fn test_marquee_after_pan_compares_in_canvas_space() {
    let mut engine = two_point_engine();
    pan(&mut engine, (0.0, 0.0), (100.0, 100.0));

    // Point 0 now shows at screen (110, 110)
    drag_marquee(&mut engine, (100.0, 100.0), (150.0, 150.0));
    assert_selected(&engine, &[0]);

    // Screen (190..230) maps to canvas (90..130)
    drag_marquee(&mut engine, (190.0, 190.0), (230.0, 230.0));
    assert_selected(&engine, &[1]);
}

#[test]
fn test_delete_selected_then_reset_restores_everything() {
    let mut engine = TestEngineBuilder::new().with_row(5).build();

    drag_marquee(&mut engine, (40.0, -10.0), (110.0, 10.0));
    assert_selected(&engine, &[1, 2]);

    engine.delete_selected();
    assert_point_count(&engine, 3);
    assert_selected(&engine, &[]);
    let order: Vec<PointId> = engine.points().iter().map(|p| p.id).collect();
    assert_eq!(order, vec![PointId(0), PointId(3), PointId(4)]);

    click_point(&mut engine, 4, (200.0, 0.0));
    engine.reset_selection();
    assert_point_count(&engine, 5);
    assert_selected(&engine, &[]);
}

#[test]
fn test_delete_with_empty_selection_is_idempotent() {
    let mut engine = two_point_engine();
    let before = engine.points().clone();
    engine.delete_selected();
    engine.delete_selected();
    assert_eq!(engine.points(), &before);
}

#[test]
fn test_clicking_deleted_point_is_rejected() {
    let mut engine = two_point_engine();
    click_point(&mut engine, 0, (10.0, 10.0));
    engine.delete_selected();

    let result = engine.handle_event(&PointerEvent::down(
        PointerButton::Primary,
        10.0,
        10.0,
        PointerTarget::Point(PointId(0)),
    ));
    assert!(result.is_err());
    assert!(engine.state().is_idle());
}

#[test]
fn test_delete_during_marquee_resolves_against_remaining_points() {
    let mut engine = two_point_engine();
    click_point(&mut engine, 0, (10.0, 10.0));
    start_marquee(&mut engine, (0.0, 0.0), (200.0, 200.0));

    // Nothing is selected mid-drag, so delete is a no-op
    engine.delete_selected();
    assert_point_count(&engine, 2);

    send(&mut engine, PointerEvent::up(PointerButton::Primary, 200.0, 200.0));
    assert_selected(&engine, &[0, 1]);
}

#[test]
fn test_cursor_follows_pan_gesture() {
    let mut engine = two_point_engine();
    assert_eq!(engine.cursor(), Cursor::Default);

    send(
        &mut engine,
        PointerEvent::down(PointerButton::Auxiliary, 0.0, 0.0, PointerTarget::Background),
    );
    assert_eq!(engine.cursor(), Cursor::Grabbing);

    send(&mut engine, PointerEvent::up(PointerButton::Auxiliary, 0.0, 0.0));
    assert_eq!(engine.cursor(), Cursor::Grab);

    click_point(&mut engine, 0, (10.0, 10.0));
    assert_eq!(engine.cursor(), Cursor::Default);
}

#[test]
fn test_marquee_ignores_auxiliary_press_mid_drag() {
    let mut engine = two_point_engine();
    start_marquee(&mut engine, (0.0, 0.0), (50.0, 50.0));

    let response = send(
        &mut engine,
        PointerEvent::down(PointerButton::Auxiliary, 50.0, 50.0, PointerTarget::Background),
    );
    assert!(response.prevent_default);
    assert!(!response.changed);
    assert!(engine.state().is_marqueeing());

    send(&mut engine, PointerEvent::moved(60.0, 60.0));
    send(&mut engine, PointerEvent::up(PointerButton::Primary, 60.0, 60.0));
    assert_selected(&engine, &[0]);
    assert_eq!(engine.pan_offset(), PanOffset::default());
}

#[test]
fn test_nan_move_mid_pan_does_not_poison_later_marquee() {
    let mut engine = two_point_engine();
    send(
        &mut engine,
        PointerEvent::down(PointerButton::Auxiliary, 0.0, 0.0, PointerTarget::Background),
    );
    assert!(engine.handle_event(&PointerEvent::moved(f32::NAN, 0.0)).is_err());
    send(&mut engine, PointerEvent::up(PointerButton::Auxiliary, 0.0, 0.0));
    assert_eq!(engine.pan_offset(), PanOffset::default());

    drag_marquee(&mut engine, (-1000.0, -1000.0), (1000.0, 1000.0));
    assert_selected(&engine, &[0, 1]);
}
