//! Snapshot tests for the render model using the insta crate.
//!
//! The render model is what a non-Rust host consumes as JSON, so its shape is
//! pinned here. To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{click_point, pan, send, start_marquee, two_point_engine, TestEngineBuilder};
use pointboard::input::{PointerButton, PointerEvent, PointerTarget};

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap()
}

#[test]
fn snapshot_render_model_after_click() {
    let mut engine = two_point_engine();
    click_point(&mut engine, 1, (100.0, 100.0));

    insta::assert_snapshot!(to_json(&engine.render_model()), @r#"
    {
      "points": [
        {
          "id": 0,
          "x": 10.0,
          "y": 10.0,
          "size": 10.0,
          "selected": false
        },
        {
          "id": 1,
          "x": 100.0,
          "y": 100.0,
          "size": 10.0,
          "selected": true
        }
      ],
      "marquee": null,
      "cursor": "default",
      "background": [
        800.0,
        600.0
      ],
      "pan_offset": {
        "dx": 0.0,
        "dy": 0.0
      }
    }
    "#);
}

#[test]
fn snapshot_render_model_mid_marquee_after_pan() {
    let mut engine = TestEngineBuilder::new().with_point(10.0, 10.0).build();
    pan(&mut engine, (0.0, 0.0), (20.0, 10.0));
    start_marquee(&mut engine, (20.0, 10.0), (70.0, 40.0));

    insta::assert_snapshot!(to_json(&engine.render_model()), @r#"
    {
      "points": [
        {
          "id": 0,
          "x": 10.0,
          "y": 10.0,
          "size": 10.0,
          "selected": false
        }
      ],
      "marquee": {
        "x": 0.0,
        "y": 0.0,
        "width": 50.0,
        "height": 30.0
      },
      "cursor": "default",
      "background": [
        800.0,
        600.0
      ],
      "pan_offset": {
        "dx": 20.0,
        "dy": 10.0
      }
    }
    "#);
}

#[test]
fn snapshot_cursor_values() {
    let mut engine = two_point_engine();
    send(
        &mut engine,
        PointerEvent::down(PointerButton::Auxiliary, 0.0, 0.0, PointerTarget::Background),
    );
    insta::assert_json_snapshot!(engine.cursor(), @r#""grabbing""#);

    send(&mut engine, PointerEvent::up(PointerButton::Auxiliary, 0.0, 0.0));
    insta::assert_json_snapshot!(engine.cursor(), @r#""grab""#);
}
