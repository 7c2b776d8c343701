//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (scene population, motion constants, camera
//! projection, colors, display scaling) are consolidated here. Options
//! serialize to/from TOML so a preset file can override any subset.

mod camera;
mod colors;
mod display;
mod motion;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use display::DisplayOptions;
pub use motion::MotionOptions;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};

use crate::error::DriftfieldError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[motion]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Scene population: point count, spread, wireframe placement.
    pub scene: SceneOptions,
    /// Per-frame motion constants (drift, scroll coupling, wave).
    pub motion: MotionOptions,
    /// Camera projection and placement parameters.
    pub camera: CameraOptions,
    /// Color palette options.
    pub colors: ColorOptions,
    /// Display scaling options.
    pub display: DisplayOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DriftfieldError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, DriftfieldError> {
        let content =
            std::fs::read_to_string(path).map_err(DriftfieldError::Io)?;
        toml::from_str(&content)
            .map_err(|e| DriftfieldError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`DriftfieldError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), DriftfieldError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DriftfieldError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DriftfieldError::Io)?;
        }
        std::fs::write(path, content).map_err(DriftfieldError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_overrides_one_section() {
        let parsed: Options =
            toml::from_str("[motion]\ndrift_rate = 0.1\n").unwrap();
        assert_eq!(parsed.motion.drift_rate, 0.1);
        // Untouched sections keep their defaults.
        assert_eq!(parsed.scene, SceneOptions::default());
        assert_eq!(parsed.colors, ColorOptions::default());
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let parsed: Options = toml::from_str("").unwrap();
        assert_eq!(parsed, Options::default());
    }
}
