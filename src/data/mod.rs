//! Point data loading
//!
//! Initial points are supplied as an external static list, usually a JSON file
//! of point centres. This module parses that list into [`RawPoint`]s which the
//! store then turns into a [`crate::store::PointSet`].
//!
//! ## Error Handling
//!
//! All loading operations return `DataResult<T>` which uses the `DataError` type.
//! Common errors include:
//! - `Io`: File system errors
//! - `Json`/`Shape`: Parse errors
//! - `DuplicateId`/`NonFinite`: Data that would break store invariants
//!
//! [`RawPoint`]: crate::types::RawPoint

mod error;
mod points_parser;

pub use error::*;
pub use points_parser::*;
