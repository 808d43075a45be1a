//! Deck configuration with TOML preset support.
//!
//! Everything an author sets before a session starts (fade timings,
//! navigation, per-slide camera rigs, simulations) lives here. Options
//! serialize to/from TOML; every section uses `#[serde(default)]` so partial
//! files work.

mod camera;
mod navigation;
mod slides;
mod transitions;

use std::path::Path;

pub use camera::CameraRigOptions;
pub use navigation::{HeaderOptions, NavigationOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use slides::{SimulationOptions, SlideOptions};
pub use transitions::TransitionOptions;

use crate::error::DeckError;

/// Top-level deck options.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct DeckOptions {
    /// Header visibility.
    pub header: HeaderOptions,
    /// Slide fade timings.
    pub transitions: TransitionOptions,
    /// Navigation bubbles; absent means no navigation UI.
    pub navigation: Option<NavigationOptions>,
    /// Index of the slide shown first.
    pub start_slide: usize,
    /// Slides in presentation order.
    pub slides: Vec<SlideOptions>,
}

impl DeckOptions {
    /// Generate JSON Schema describing the deck file format.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(DeckOptions)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`DeckError::OptionsParse`] on malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, DeckError> {
        toml::from_str(content).map_err(|e| DeckError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// I/O failures and malformed TOML.
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let content = std::fs::read_to_string(path).map_err(DeckError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!(
            "Loaded deck '{}' with {} slides",
            path.display(),
            options.slides.len()
        );
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Serialization and I/O failures.
    pub fn save(&self, path: &Path) -> Result<(), DeckError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DeckError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DeckError::Io)?;
        }
        std::fs::write(path, content).map_err(DeckError::Io)?;
        log::info!("Saved deck '{}'", path.display());
        Ok(())
    }

    /// List available deck names (TOML file stems) in a directory.
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
