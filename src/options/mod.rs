//! Viewer options with TOML preset support.
//!
//! Camera control and orientation-marker settings are consolidated here.
//! Options serialize to/from TOML so a view setup can be stored as a preset.

mod camera;
mod marker;

use std::path::Path;

pub use camera::CameraOptions;
pub use marker::{MarkerOptions, ViewportCorner};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VolviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[marker]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Orientation marker placement and interaction.
    pub marker: MarkerOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults; bounds
    /// that contradict each other are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`VolviewError::Io`] if the file cannot be read, or
    /// [`VolviewError::OptionsParse`] if it is not valid options TOML or
    /// fails [`Options::validate`].
    pub fn load(path: &Path) -> Result<Self, VolviewError> {
        let content = std::fs::read_to_string(path).map_err(VolviewError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| VolviewError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Check that every min/max pair is ordered and finite.
    ///
    /// # Errors
    ///
    /// Returns [`VolviewError::OptionsParse`] naming the first offending
    /// pair.
    pub fn validate(&self) -> Result<(), VolviewError> {
        let camera = &self.camera;
        let ordered = camera.min_distance.is_finite()
            && camera.max_distance.is_finite()
            && camera.min_distance <= camera.max_distance;
        if !ordered {
            return Err(VolviewError::OptionsParse(format!(
                "camera.min_distance ({}) must not exceed camera.max_distance ({})",
                camera.min_distance, camera.max_distance
            )));
        }
        let marker = &self.marker;
        if marker.min_pixel_size > marker.max_pixel_size {
            return Err(VolviewError::OptionsParse(format!(
                "marker.min_pixel_size ({}) must not exceed marker.max_pixel_size ({})",
                marker.min_pixel_size, marker.max_pixel_size
            )));
        }
        Ok(())
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`VolviewError::OptionsParse`] if serialization fails, or
    /// [`VolviewError::Io`] if the file or its directory cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), VolviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VolviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VolviewError::Io)?;
        }
        std::fs::write(path, content).map_err(VolviewError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
