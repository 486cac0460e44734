//! Pointer input handling for the canvas.
//!
//! This module turns raw pointer events into selection and pan changes.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InteractionState`) to
//! track the current gesture. Exactly one gesture is active at a time; every
//! handler reads the current state and replaces it in one step.
//!
//! ## Modules
//!
//! - `state` - Interaction state machine enum and helper methods
//! - `coords` - Pan offset and screen/canvas conversion
//! - `events` - Pointer event values handed in by the rendering collaborator
//! - `mouse_down` - Pointer down handling (select, marquee/pan start, cancel)
//! - `drag` - Pointer move handling (marquee update, pan)
//! - `mouse_up` - Pointer up handling (resolve marquee, end pan)

pub mod coords;
mod drag;
mod events;
mod mouse_down;
mod mouse_up;
mod state;

pub use coords::{CoordinateMapper, PanOffset};
pub use events::{EventResponse, MouseDown, MouseMove, MouseUp, PointerButton, PointerEvent, PointerTarget};
pub use state::InteractionState;
