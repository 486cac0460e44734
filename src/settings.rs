//! Engine settings, persisted as JSON in the platform config directory.
//!
//! Missing fields fall back to defaults, so older or hand-written files keep
//! loading as new options are added.

use crate::constants::{
    BACKGROUND_SIZE, CONFIG_DIR_NAME, DEFAULT_LOG_FILTER, POINT_SIZE, SETTINGS_FILE_NAME,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Diameter of every point
    pub point_size: f32,
    /// Size of the background panel
    pub background_size: (f32, f32),
    /// tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            point_size: POINT_SIZE,
            background_size: BACKGROUND_SIZE,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// `<config dir>/pointboard/settings.json`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> SettingsResult<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.point_size.is_finite() && self.point_size > 0.0) {
            return Err(SettingsError::Invalid {
                field: "point_size",
                reason: format!("must be positive, got {}", self.point_size),
            });
        }
        let (w, h) = self.background_size;
        if !(w.is_finite() && h.is_finite() && w >= 0.0 && h >= 0.0) {
            return Err(SettingsError::Invalid {
                field: "background_size",
                reason: format!("must be non-negative, got ({w}, {h})"),
            });
        }
        Ok(())
    }
}
