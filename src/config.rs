//! Board configuration persistence
//!
//! Stores user preferences in `~/.config/dragboard/config.yaml`

use serde::{Deserialize, Serialize};

use crate::gesture::DEFAULT_DRAG_THRESHOLD;
use crate::geometry::Point;
use crate::markdown::BlockLayout;

/// Board configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Pointer travel that turns a click into a drag
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold: f64,

    /// Maximum undo depth (None = unbounded)
    #[serde(default)]
    pub history_limit: Option<usize>,

    /// Width of blocks created from Markdown
    #[serde(default = "default_block_width")]
    pub block_width: f64,

    /// Height of one source line in a Markdown block
    #[serde(default = "default_line_height")]
    pub line_height: f64,

    /// Vertical gap between inserted blocks
    #[serde(default = "default_block_spacing")]
    pub block_spacing: f64,

    /// Where the first inserted block goes on an empty board
    #[serde(default = "default_insert_origin")]
    pub insert_origin: Point,
}

fn default_drag_threshold() -> f64 {
    DEFAULT_DRAG_THRESHOLD
}

fn default_block_width() -> f64 {
    480.0
}

fn default_line_height() -> f64 {
    20.0
}

fn default_block_spacing() -> f64 {
    16.0
}

fn default_insert_origin() -> Point {
    Point::new(24.0, 24.0)
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            drag_threshold: default_drag_threshold(),
            history_limit: None,
            block_width: default_block_width(),
            line_height: default_line_height(),
            block_spacing: default_block_spacing(),
            insert_origin: default_insert_origin(),
        }
    }
}

impl BoardConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse a YAML document, replacing out-of-range values with defaults
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        Ok(config.sanitized())
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), String> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    fn sanitized(mut self) -> Self {
        if !self.drag_threshold.is_finite() || self.drag_threshold < 0.0 {
            tracing::warn!(
                "Invalid drag_threshold {}, using {}",
                self.drag_threshold,
                DEFAULT_DRAG_THRESHOLD
            );
            self.drag_threshold = DEFAULT_DRAG_THRESHOLD;
        }
        if !(self.line_height.is_finite() && self.line_height > 0.0) {
            self.line_height = default_line_height();
        }
        if !(self.block_width.is_finite() && self.block_width > 0.0) {
            self.block_width = default_block_width();
        }
        if !(self.block_spacing.is_finite() && self.block_spacing >= 0.0) {
            self.block_spacing = default_block_spacing();
        }
        self
    }

    /// Layout for blocks inserted starting at `origin`
    pub fn block_layout(&self, origin: Point) -> BlockLayout {
        BlockLayout {
            origin,
            width: self.block_width,
            line_height: self.line_height,
            spacing: self.block_spacing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config = BoardConfig::from_yaml("{}").unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.drag_threshold, 10.0);
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = BoardConfig::from_yaml("drag_threshold: 4\nhistory_limit: 50\n").unwrap();
        assert_eq!(config.drag_threshold, 4.0);
        assert_eq!(config.history_limit, Some(50));
        assert_eq!(config.block_width, 480.0);
    }

    #[test]
    fn test_negative_threshold_is_replaced() {
        let config = BoardConfig::from_yaml("drag_threshold: -3").unwrap();
        assert_eq!(config.drag_threshold, DEFAULT_DRAG_THRESHOLD);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(BoardConfig::from_yaml("drag_threshold: [1, 2]").is_err());
    }
}
