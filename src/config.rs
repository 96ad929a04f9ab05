//! Session configuration.
//!
//! `EditorConfig` is read from a TOML file; every field is optional and falls
//! back to the defaults below.

use std::io::ErrorKind;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::error::EditorError;

/// Default canvas width in surface pixels.
pub const CANVAS_WIDTH: u32 = 800;
/// Default canvas height in surface pixels.
pub const CANVAS_HEIGHT: u32 = 500;
/// Straight lines per cubic segment for backends that flatten curves.
pub const CURVE_STEPS: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub width: u32,
    pub height: u32,
    pub curve_steps: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            curve_steps: CURVE_STEPS,
        }
    }
}

impl EditorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, EditorError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, EditorError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reads the config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, EditorError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Reads the config from a TOML file. Falls back to the defaults if the file
    /// is missing, unreadable or malformed; only a missing file goes unwarned.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                info!("config loaded from {}", path.display());
                config
            }
            Err(e) if is_missing_file(&e) => {
                info!("no config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("config at {} is invalid, using defaults: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), EditorError> {
        std::fs::write(path, self.to_toml_string()?)?;
        info!("config saved to {}", path.display());
        Ok(())
    }
}

fn is_missing_file(err: &EditorError) -> bool {
    matches!(err, EditorError::Io(e) if e.kind() == ErrorKind::NotFound)
}
