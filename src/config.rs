//! Editor configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{CONTAINER_PADDING_PX, MAX_CANVAS_HEIGHT_PX, MAX_CANVAS_WIDTH_PX};

pub const ENV_MAX_CANVAS_WIDTH: &str = "SCENE_EDITOR_MAX_CANVAS_WIDTH";
pub const ENV_MAX_CANVAS_HEIGHT: &str = "SCENE_EDITOR_MAX_CANVAS_HEIGHT";
pub const ENV_CONTAINER_PADDING: &str = "SCENE_EDITOR_CONTAINER_PADDING";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    /// A size setting parsed but was zero, negative, or not finite.
    #[error("{var} must be a positive finite number, got {value}")]
    NotPositive { var: &'static str, value: f64 },
    /// The padding setting parsed but was negative or not finite.
    #[error("{var} must be a non-negative finite number, got {value}")]
    Negative { var: &'static str, value: f64 },
}

/// Canvas layout settings for one editor session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// Largest canvas width in pixels.
    pub max_canvas_width: f64,
    /// Largest canvas height in pixels.
    pub max_canvas_height: f64,
    /// Pixels subtracted from each container dimension before sizing.
    pub container_padding: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_canvas_width: MAX_CANVAS_WIDTH_PX,
            max_canvas_height: MAX_CANVAS_HEIGHT_PX,
            container_padding: CONTAINER_PADDING_PX,
        }
    }
}

impl EditorConfig {
    /// Build typed editor config from environment variables.
    ///
    /// Optional:
    /// - `SCENE_EDITOR_MAX_CANVAS_WIDTH`: default 900
    /// - `SCENE_EDITOR_MAX_CANVAS_HEIGHT`: default 600
    /// - `SCENE_EDITOR_CONTAINER_PADDING`: default 32
    ///
    /// Values that do not parse as numbers fall back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a parsed value is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        let max_canvas_width = env_parse_f64(ENV_MAX_CANVAS_WIDTH, MAX_CANVAS_WIDTH_PX);
        let max_canvas_height = env_parse_f64(ENV_MAX_CANVAS_HEIGHT, MAX_CANVAS_HEIGHT_PX);
        let container_padding = env_parse_f64(ENV_CONTAINER_PADDING, CONTAINER_PADDING_PX);

        require_positive(ENV_MAX_CANVAS_WIDTH, max_canvas_width)?;
        require_positive(ENV_MAX_CANVAS_HEIGHT, max_canvas_height)?;
        if !container_padding.is_finite() || container_padding < 0.0 {
            return Err(ConfigError::Negative { var: ENV_CONTAINER_PADDING, value: container_padding });
        }

        Ok(Self { max_canvas_width, max_canvas_height, container_padding })
    }
}

fn env_parse_f64(key: &str, default: f64) -> f64 {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<f64>().unwrap_or(default),
        Err(_) => default,
    }
}

fn require_positive(var: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { var, value })
    }
}
