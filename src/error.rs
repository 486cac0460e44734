//! Contract violations raised by the selection engine.
//!
//! These indicate a caller bug, not a user-facing failure. Operations that hit
//! one leave all state untouched. Harmless no-ops (a move with no gesture,
//! deleting an empty selection) are not errors.

use crate::types::PointId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    /// `resolve` was called without a preceding `begin`
    #[error("marquee resolved while no marquee is active")]
    MarqueeInactive,

    /// An id that is not in the current point set
    #[error("unknown point id: {0}")]
    UnknownPoint(PointId),

    /// A pointer event carried a NaN or infinite coordinate
    #[error("non-finite pointer position ({x}, {y})")]
    NonFinitePosition { x: f32, y: f32 },
}

pub type SelectionResult<T> = Result<T, SelectionError>;
