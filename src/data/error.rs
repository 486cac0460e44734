//! Error types for data operations
//!
//! Provides unified error handling for point data loading and validation.

use crate::types::PointId;
use thiserror::Error;

/// Errors that can occur while loading point data
#[derive(Error, Debug)]
pub enum DataError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON was valid but not a list of points
    #[error("Invalid point data: {0}")]
    Shape(String),

    /// Two points share the same id
    #[error("Duplicate point id: {0}")]
    DuplicateId(PointId),

    /// A coordinate is NaN or infinite
    #[error("Point {id} has a non-finite coordinate ({x}, {y})")]
    NonFinite { id: PointId, x: f32, y: f32 },
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
