//! Engine-wide constants.
//!
//! Centralizes magic numbers so input handling and rendering agree on them.

// ============================================================================
// Point Defaults
// ============================================================================

/// Diameter of a point; used as both width and height of its extent
pub const POINT_SIZE: f32 = 10.0;

// ============================================================================
// Canvas Layout
// ============================================================================

/// Size of the clickable background panel drawn behind the points
pub const BACKGROUND_SIZE: (f32, f32) = (800.0, 600.0);

// ============================================================================
// Pointer Buttons (DOM `MouseEvent.button` numbering)
// ============================================================================

/// Primary (usually left) button
pub const BUTTON_PRIMARY: u8 = 0;

/// Auxiliary (usually middle / wheel) button
pub const BUTTON_AUXILIARY: u8 = 1;

/// Secondary (usually right) button
pub const BUTTON_SECONDARY: u8 = 2;

// ============================================================================
// Logging
// ============================================================================

/// Default tracing filter when neither `RUST_LOG` nor settings provide one
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Name of the directory under the platform config dir
pub const CONFIG_DIR_NAME: &str = "pointboard";

/// Settings file name inside the config directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";
