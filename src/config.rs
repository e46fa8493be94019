//! Plot settings, loadable from a TOML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::mesh::{DEFAULT_MARGIN, DEFAULT_STEP};

/// Default marker area, in points squared.
pub const DEFAULT_MARKER_SIZE: f64 = 40.0;
/// Default opacity of the filled class regions.
pub const DEFAULT_REGION_ALPHA: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Mesh step `h`.
    pub step: f64,
    /// Bounding box padding on every side.
    pub margin: f64,
    pub width: u32,
    pub height: u32,
    /// Scatter marker area in points squared.
    pub marker_size: f64,
    pub region_alpha: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            margin: DEFAULT_MARGIN,
            width: 640,
            height: 480,
            marker_size: DEFAULT_MARKER_SIZE,
            region_alpha: DEFAULT_REGION_ALPHA,
        }
    }
}

impl PlotConfig {
    /// Reads and validates a TOML config. Missing keys take their defaults.
    pub fn load(path: &Path) -> PlotResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| PlotError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path.to_path_buf())
    }

    pub fn from_toml_str(text: &str) -> PlotResult<Self> {
        Self::parse(text, PathBuf::from("<inline>"))
    }

    fn parse(text: &str, path: PathBuf) -> PlotResult<Self> {
        let config: PlotConfig =
            toml::from_str(text).map_err(|source| PlotError::ConfigParse { path, source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(PlotError::InvalidConfig(format!(
                "step must be positive and finite, got {}",
                self.step
            )));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(PlotError::InvalidConfig(format!(
                "margin must be finite and non-negative, got {}",
                self.margin
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(PlotError::InvalidConfig(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.marker_size.is_finite() || self.marker_size <= 0.0 {
            return Err(PlotError::InvalidConfig(format!(
                "marker_size must be positive, got {}",
                self.marker_size
            )));
        }
        if !(0.0..=1.0).contains(&self.region_alpha) {
            return Err(PlotError::InvalidConfig(format!(
                "region_alpha must be within [0, 1], got {}",
                self.region_alpha
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_matches_playground_constants() {
        let config = PlotConfig::default();
        assert_eq!(config.step, 0.25);
        assert_eq!(config.margin, 1.0);
        assert_eq!(config.marker_size, 40.0);
        assert_eq!(config.region_alpha, 0.8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PlotConfig::from_toml_str("width = 320\nstep = 0.1\n").unwrap();
        assert_eq!(config.width, 320);
        assert_eq!(config.step, 0.1);
        assert_eq!(config.height, 480);
        assert_eq!(config.margin, 1.0);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        for text in [
            "step = 0.0",
            "step = -0.25",
            "margin = -1.0",
            "width = 0",
            "marker_size = 0.0",
            "region_alpha = 1.5",
        ] {
            let result = PlotConfig::from_toml_str(text);
            assert!(
                matches!(result, Err(PlotError::InvalidConfig(_))),
                "expected InvalidConfig for {:?}, got {:?}",
                text,
                result
            );
        }
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let result = PlotConfig::from_toml_str("step = \"fine\"");
        assert!(matches!(result, Err(PlotError::ConfigParse { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "height = 200\nregion_alpha = 0.5").unwrap();
        let config = PlotConfig::load(file.path()).unwrap();
        assert_eq!(config.height, 200);
        assert_eq!(config.region_alpha, 0.5);

        let missing = PlotConfig::load(Path::new("/definitely/not/here/plot.toml"));
        assert!(matches!(missing, Err(PlotError::ConfigRead { .. })));
    }
}
