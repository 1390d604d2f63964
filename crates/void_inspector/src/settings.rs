//! Inspector settings.
//!
//! Persisted as TOML next to the other editor preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{InspectorError, Result};

/// Tunables for inspectors and the undo stack they share.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorSettings {
    /// Maximum number of undo entries kept
    pub undo_capacity: usize,
    /// Characters of a plain text resource shown in its inspector
    pub plain_text_preview_chars: usize,
    /// Label width for top-level fields. Nested fields lose a little per level.
    pub default_title_width: u32,
}

impl Default for InspectorSettings {
    fn default() -> Self {
        Self {
            undo_capacity: 100,
            plain_text_preview_chars: 3000,
            default_title_width: 100,
        }
    }
}

impl InspectorSettings {
    /// Load settings from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings = toml::from_str(&content)?;
        log::info!("Loaded inspector settings from {:?}", path);
        Ok(settings)
    }

    /// Save settings to a file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        log::info!("Saved inspector settings to {:?}", path);
        Ok(())
    }

    /// Get the default settings path.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("void_editor");
            p.push("inspector.toml");
            p
        })
    }

    /// Load from the default path, falling back to defaults on any failure.
    pub fn load_or_default() -> Self {
        let result = Self::default_path()
            .ok_or(InspectorError::NoConfigDir)
            .and_then(|path| Self::load(&path));

        match result {
            Ok(settings) => settings,
            Err(e) => {
                log::debug!("Using default inspector settings: {}", e);
                Self::default()
            }
        }
    }
}
