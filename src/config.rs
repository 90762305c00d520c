use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;

/// Errors that can occur while loading an editor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Inclusive bounds on grid width and height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeLimits {
    pub min: usize,
    pub max: usize,
}

impl SizeLimits {
    pub const MIN_SIZE: usize = 4;
    pub const MAX_SIZE: usize = 64;

    pub fn contains(&self, size: usize) -> bool {
        (self.min..=self.max).contains(&size)
    }

    /// Never returns zero, even for degenerate limits
    pub fn clamp(&self, size: usize) -> usize {
        size.max(self.min).min(self.max).max(1)
    }
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            min: Self::MIN_SIZE,
            max: Self::MAX_SIZE,
        }
    }
}

/// Export resolution slider: `min..=max` in increments of `step`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub min_resolution: usize,
    pub max_resolution: usize,
    pub step: usize,
    pub default_resolution: usize,
}

impl ExportSettings {
    /// Clamp into range and snap to the nearest slider position
    pub fn clamp_resolution(&self, resolution: usize) -> usize {
        let clamped = resolution.max(self.min_resolution).min(self.max_resolution);
        if self.step == 0 || clamped < self.min_resolution {
            return clamped;
        }
        let offset = clamped - self.min_resolution;
        let steps = (offset + self.step / 2) / self.step;
        let mut snapped = self.min_resolution + steps * self.step;
        while snapped > self.max_resolution {
            snapped -= self.step;
        }
        snapped
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            min_resolution: 16,
            max_resolution: 1600,
            step: 16,
            default_resolution: 512,
        }
    }
}

/// Parameters an editing session is created with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub size_limits: SizeLimits,
    pub default_width: usize,
    pub default_height: usize,
    pub brush_sizes: Vec<usize>,
    pub default_brush_size: usize,
    pub export: ExportSettings,
    pub palette: Vec<Color>,
    pub default_color: Color,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            size_limits: SizeLimits::default(),
            default_width: 16,
            default_height: 16,
            brush_sizes: vec![1, 2, 3],
            default_brush_size: 1,
            export: ExportSettings::default(),
            palette: crate::palette::Palette::default().colors().to_vec(),
            default_color: Color::BLACK,
        }
    }
}

impl EditorConfig {
    /// Parse a JSON document; missing fields take their default values
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let limits = self.size_limits;
        if limits.min == 0 || limits.min > limits.max {
            return Err(ConfigError::Invalid(format!(
                "size limits {}..={} are empty",
                limits.min, limits.max
            )));
        }
        if !limits.contains(self.default_width) || !limits.contains(self.default_height) {
            return Err(ConfigError::Invalid(format!(
                "default grid {}x{} is outside {}..={}",
                self.default_width, self.default_height, limits.min, limits.max
            )));
        }
        if self.brush_sizes.is_empty() || self.brush_sizes.contains(&0) {
            return Err(ConfigError::Invalid(
                "brush sizes must be non-empty and positive".to_string(),
            ));
        }
        if !self.brush_sizes.contains(&self.default_brush_size) {
            return Err(ConfigError::Invalid(format!(
                "default brush size {} is not one of {:?}",
                self.default_brush_size, self.brush_sizes
            )));
        }

        let export = self.export;
        if export.step == 0
            || export.min_resolution == 0
            || export.min_resolution > export.max_resolution
            || !(export.min_resolution..=export.max_resolution)
                .contains(&export.default_resolution)
        {
            return Err(ConfigError::Invalid(format!(
                "export settings {export:?} are inconsistent"
            )));
        }
        Ok(())
    }
}
