//! Application configuration management

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::store::DEFAULT_STORAGE_KEY;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Storage slot holding the workspace
    pub storage_key: String,
    /// Quiet period before the tab list reflects typed titles
    pub tab_refresh_delay_ms: u64,
    /// Editor appearance
    pub editor: EditorStyle,
    /// Directory last used for importing
    pub last_import_dir: Option<PathBuf>,
    /// Directory last used for exporting
    pub last_export_dir: Option<PathBuf>,
}

/// Font family used by the editing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Proportional,
    Monospace,
}

/// Editing surface appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorStyle {
    pub font_family: FontFamily,
    /// Font size in pixels
    pub font_size: f32,
    /// Line height as a multiple of the font size
    pub line_height: f32,
    /// Width of the editing page in pixels
    pub page_width: f32,
}

impl EditorStyle {
    pub const FONT_SIZE_RANGE: std::ops::RangeInclusive<f32> = 10.0..=32.0;
    pub const LINE_HEIGHT_RANGE: std::ops::RangeInclusive<f32> = 1.0..=2.5;
    pub const PAGE_WIDTH_RANGE: std::ops::RangeInclusive<f32> = 400.0..=1400.0;

    /// Pull every value back into its supported range
    pub fn clamp(&mut self) {
        fn clamp_to(value: f32, range: &std::ops::RangeInclusive<f32>) -> f32 {
            if value.is_nan() {
                *range.start()
            } else {
                value.clamp(*range.start(), *range.end())
            }
        }
        self.font_size = clamp_to(self.font_size, &Self::FONT_SIZE_RANGE);
        self.line_height = clamp_to(self.line_height, &Self::LINE_HEIGHT_RANGE);
        self.page_width = clamp_to(self.page_width, &Self::PAGE_WIDTH_RANGE);
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            tab_refresh_delay_ms: 1000,
            editor: EditorStyle::default(),
            last_import_dir: None,
            last_export_dir: None,
        }
    }
}

impl Default for EditorStyle {
    fn default() -> Self {
        Self {
            font_family: FontFamily::Proportional,
            font_size: 16.0,
            line_height: 1.6,
            page_width: 800.0,
        }
    }
}

impl AppConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "typly", "Typly")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Self::load_from(&path)
    }

    /// Load configuration from `path`, using defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.editor.clamp();
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Delay before a pending tab refresh fires
    pub fn tab_refresh_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tab_refresh_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage_key, "typly_docs");
        assert_eq!(config.tab_refresh_delay_ms, 1000);
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = AppConfig::default();
        config.editor.font_family = FontFamily::Monospace;
        config.editor.font_size = 20.0;
        config.last_export_dir = Some(PathBuf::from("/tmp/exports"));
        config.save_to(&path).unwrap();

        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_config_fills_defaults_and_clamps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"editor": {"font_size": 99.0}}"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.editor.font_size, 32.0);
        assert_eq!(config.editor.page_width, 800.0);
        assert_eq!(config.storage_key, "typly_docs");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ nope").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }
}
