use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{FigureError, Result};
use crate::geometry::JitterParams;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "OutputConfig::default_dir")]
    pub dir: PathBuf,
}

impl OutputConfig {
    fn default_dir() -> PathBuf {
        PathBuf::from(".")
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: Self::default_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualitativeConfig {
    #[serde(default = "QualitativeConfig::default_width")]
    pub width: u32,
    #[serde(default = "QualitativeConfig::default_height")]
    pub height: u32,
    #[serde(default = "QualitativeConfig::default_y_tick_step")]
    pub y_tick_step: u32,
    #[serde(default = "QualitativeConfig::default_bar_width")]
    pub bar_width: f32,
    #[serde(default = "QualitativeConfig::default_font_size")]
    pub font_size: u32,
}

impl QualitativeConfig {
    fn default_width() -> u32 {
        2400
    }
    fn default_height() -> u32 {
        1200
    }
    fn default_y_tick_step() -> u32 {
        4
    }
    fn default_bar_width() -> f32 {
        0.5
    }
    fn default_font_size() -> u32 {
        40
    }
}

impl Default for QualitativeConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
            y_tick_step: Self::default_y_tick_step(),
            bar_width: Self::default_bar_width(),
            font_size: Self::default_font_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantitativeConfig {
    #[serde(default = "QuantitativeConfig::default_width")]
    pub width: u32,
    #[serde(default = "QuantitativeConfig::default_height")]
    pub height: u32,
    #[serde(default = "QuantitativeConfig::default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "QuantitativeConfig::default_jitter_half_width")]
    pub jitter_half_width: f32,
    #[serde(default = "QuantitativeConfig::default_jitter_seed")]
    pub jitter_seed: u64,
    #[serde(default = "QuantitativeConfig::default_point_radius")]
    pub point_radius: u32,
    #[serde(default = "QuantitativeConfig::default_point_alpha")]
    pub point_alpha: f64,
    #[serde(default = "QuantitativeConfig::default_zero_line_width")]
    pub zero_line_width: u32,
    #[serde(default = "QuantitativeConfig::default_font_size")]
    pub font_size: u32,
}

impl QuantitativeConfig {
    fn default_width() -> u32 {
        1600
    }
    fn default_height() -> u32 {
        1600
    }
    fn default_data_dir() -> PathBuf {
        PathBuf::from(".")
    }
    fn default_jitter_half_width() -> f32 {
        0.1
    }
    fn default_jitter_seed() -> u64 {
        0xC0FFEE
    }
    fn default_point_radius() -> u32 {
        14
    }
    fn default_point_alpha() -> f64 {
        0.5
    }
    fn default_zero_line_width() -> u32 {
        6
    }
    fn default_font_size() -> u32 {
        40
    }

    pub fn jitter(&self) -> JitterParams {
        JitterParams {
            half_width: self.jitter_half_width,
            seed: self.jitter_seed,
        }
    }
}

impl Default for QuantitativeConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
            data_dir: Self::default_data_dir(),
            jitter_half_width: Self::default_jitter_half_width(),
            jitter_seed: Self::default_jitter_seed(),
            point_radius: Self::default_point_radius(),
            point_alpha: Self::default_point_alpha(),
            zero_line_width: Self::default_zero_line_width(),
            font_size: Self::default_font_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FigureConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub qualitative: QualitativeConfig,
    #[serde(default)]
    pub quantitative: QuantitativeConfig,
}

impl FigureConfig {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads `path` when it exists. The file is never created.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                warn!("Failed to read config {}: {err}. Using defaults.", path.display());
                return Self::default();
            }
        };
        match Self::parse(&text) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!("Failed to parse config {}: {err}. Using defaults.", path.display());
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.qualitative.width == 0 || self.qualitative.height == 0 {
            return Err(FigureError::Config("qualitative canvas is empty".into()));
        }
        if self.quantitative.width == 0 || self.quantitative.height == 0 {
            return Err(FigureError::Config("quantitative canvas is empty".into()));
        }
        if !(0.0..=1.0).contains(&self.qualitative.bar_width) {
            return Err(FigureError::Config(format!(
                "bar_width {} outside 0..=1",
                self.qualitative.bar_width
            )));
        }
        if !(0.0..0.5).contains(&self.quantitative.jitter_half_width) {
            return Err(FigureError::Config(format!(
                "jitter_half_width {} must stay inside a lamina band",
                self.quantitative.jitter_half_width
            )));
        }
        if self.quantitative.zero_line_width == 0 {
            return Err(FigureError::Config("zero_line_width must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.quantitative.point_alpha) {
            return Err(FigureError::Config(format!(
                "point_alpha {} outside 0..=1",
                self.quantitative.point_alpha
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = FigureConfig::parse("").unwrap();
        assert_eq!(cfg.output.dir, PathBuf::from("."));
        assert_eq!(cfg.qualitative.y_tick_step, 4);
        assert_eq!(cfg.qualitative.bar_width, 0.5);
        assert_eq!(cfg.quantitative.jitter_half_width, 0.1);
        assert_eq!(cfg.quantitative.jitter_seed, 0xC0FFEE);
        assert_eq!(cfg.quantitative.point_alpha, 0.5);
        cfg.validate().unwrap();
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let cfg = FigureConfig::parse(
            "[quantitative]\ndata_dir = \"tables\"\njitter_seed = 42\n\n[output]\ndir = \"out\"\n",
        )
        .unwrap();
        assert_eq!(cfg.quantitative.data_dir, PathBuf::from("tables"));
        assert_eq!(cfg.quantitative.jitter().seed, 42);
        assert_eq!(cfg.quantitative.point_radius, 14);
        assert_eq!(cfg.output.dir, PathBuf::from("out"));
        assert_eq!(cfg.qualitative.width, 2400);
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let err = FigureConfig::parse("[qualitative\nwidth = ").unwrap_err();
        assert!(matches!(err, FigureError::Config(_)));
    }

    #[test]
    fn validate_rejects_jitter_wider_than_band() {
        let mut cfg = FigureConfig::default();
        cfg.quantitative.jitter_half_width = 0.6;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_invisible_zero_line() {
        let mut cfg = FigureConfig::parse("[quantitative]\nzero_line_width = 0\n").unwrap();
        assert!(matches!(cfg.validate(), Err(FigureError::Config(_))));
        cfg.quantitative.zero_line_width = 1;
        cfg.validate().unwrap();
    }
}
