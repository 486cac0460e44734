//! JSON point list parsing
//!
//! Accepts either a bare array of `{"x", "y"}` objects or an object wrapping
//! that array under one of the common keys (`points`, `data`, `items`).

use super::error::{DataError, DataResult};
use crate::types::RawPoint;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Load a point list from a JSON file
pub fn load_raw_points(path: &Path) -> DataResult<Vec<RawPoint>> {
    let content = std::fs::read_to_string(path)?;
    let points = parse_raw_points(&content)?;
    debug!(path = %path.display(), count = points.len(), "loaded raw points");
    Ok(points)
}

/// Parse a point list from JSON content
pub fn parse_raw_points(json: &str) -> DataResult<Vec<RawPoint>> {
    let value: Value = serde_json::from_str(json)?;
    let array = extract_array(value)?;
    let points: Vec<RawPoint> = serde_json::from_value(Value::Array(array))?;
    Ok(points)
}

fn extract_array(value: Value) -> DataResult<Vec<Value>> {
    match value {
        Value::Array(arr) => Ok(arr),
        Value::Object(mut obj) => {
            let wrapper_keys = ["points", "data", "items"];
            for key in wrapper_keys {
                if let Some(Value::Array(arr)) = obj.remove(key) {
                    return Ok(arr);
                }
            }
            Err(DataError::Shape(
                "JSON must be an array or have a points/data/items array".to_string(),
            ))
        }
        _ => Err(DataError::Shape("JSON must be an array of points".to_string())),
    }
}
