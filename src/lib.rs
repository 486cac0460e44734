//! Pointboard - selection and pan interaction engine for points on a 2D canvas.
//!
//! The crate turns raw pointer events into selection-state changes. Drawing is
//! left to an external rendering collaborator, which feeds [`input::PointerEvent`]s
//! in and reads a [`render::RenderModel`] back out.
//!
//! ## Modules
//!
//! - `store` - immutable point sets (copy-on-write replacement)
//! - `spatial_index` - R-tree over point extents
//! - `marquee` - rubber-band rectangle and its resolution
//! - `selection` - the only place selection flags are flipped
//! - `input` - interaction state machine and pointer handlers
//! - `engine` - the owned engine instance tying it all together
//! - `render` - render-ready output
//! - `settings` / `data` - configuration and point data loading

pub mod constants;
pub mod data;
pub mod engine;
pub mod error;
pub mod input;
pub mod marquee;
pub mod perf;
pub mod render;
pub mod selection;
pub mod settings;
pub mod spatial_index;
pub mod store;
pub mod types;

pub use engine::{SelectionEngine, SharedEngine};
pub use error::{SelectionError, SelectionResult};
