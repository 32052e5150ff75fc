use crate::geometry::limits;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("parameter '{param}' must be finite")]
    NonFinite { param: &'static str },
    #[error("parameter '{param}' out of range [{min}, {max}]: {got}")]
    OutOfRange { param: &'static str, min: f64, max: f64, got: f64 },
    #[error("parameter '{param}' is not a color: {got:?}")]
    InvalidColor { param: &'static str, got: String },
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Parse(_) => "invalid_config",
            ConfigError::NonFinite { .. } => "non_finite",
            ConfigError::OutOfRange { .. } => "out_of_range",
            ConfigError::InvalidColor { .. } => "invalid_config",
        }
    }
}

/// What the intersection scan does on meeting a pair of parallel lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParallelPolicy {
    /// Stop the whole scan at the first parallel pair.
    #[default]
    AbortScan,
    /// Skip only that pair.
    SkipPair,
}

/// How a line crossing is accepted as lying on both segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Containment {
    /// Slope/intercept solve, then the crossing x must lie strictly inside
    /// each segment's x-span.
    #[default]
    StrictSpan,
    /// Orientation-based segment intersection; endpoint touches count.
    Exact,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    pub parallel: ParallelPolicy,
    pub containment: Containment,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self { SurfaceConfig { width: 600.0, height: 600.0 } }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub line_color: String,
    pub line_width: f64,
    pub marker_color: String,
    pub marker_radius: f64,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            line_color: "black".to_string(),
            line_width: 1.0,
            marker_color: "red".to_string(),
            marker_radius: 4.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub surface: SurfaceConfig,
    pub style: Style,
    pub scan: ScanOptions,
}

fn check_range(param: &'static str, got: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if !got.is_finite() {
        return Err(ConfigError::NonFinite { param });
    }
    if !limits::in_range(got, min, max) {
        return Err(ConfigError::OutOfRange { param, min, max, got });
    }
    Ok(())
}

fn check_color(param: &'static str, got: &str) -> Result<(), ConfigError> {
    if limits::is_color_token(got) { Ok(()) } else { Err(ConfigError::InvalidColor { param, got: got.to_string() }) }
}

impl SceneConfig {
    /// Parse a (possibly partial) JSON document; missing fields take defaults.
    pub fn from_json(doc: &str) -> Result<SceneConfig, ConfigError> {
        let cfg: SceneConfig = serde_json::from_str(doc)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("surface.width", self.surface.width, limits::SURFACE_MIN, limits::SURFACE_MAX)?;
        check_range("surface.height", self.surface.height, limits::SURFACE_MIN, limits::SURFACE_MAX)?;
        check_range("style.line_width", self.style.line_width, limits::LINE_WIDTH_MIN, limits::LINE_WIDTH_MAX)?;
        check_range("style.marker_radius", self.style.marker_radius, limits::MARKER_RADIUS_MIN, limits::MARKER_RADIUS_MAX)?;
        check_color("style.line_color", &self.style.line_color)?;
        check_color("style.marker_color", &self.style.marker_color)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_a_600_square_with_literal_scan() {
        let c = SceneConfig::default();
        assert_eq!(c.surface.width, 600.0);
        assert_eq!(c.surface.height, 600.0);
        assert_eq!(c.style.marker_radius, 4.0);
        assert_eq!(c.scan.parallel, ParallelPolicy::AbortScan);
        assert_eq!(c.scan.containment, Containment::StrictSpan);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c = SceneConfig::from_json(r#"{"surface":{"width":800},"scan":{"parallel":"skip_pair"}}"#).unwrap();
        assert_eq!(c.surface.width, 800.0);
        assert_eq!(c.surface.height, 600.0);
        assert_eq!(c.scan.parallel, ParallelPolicy::SkipPair);
        assert_eq!(c.style.marker_color, "red");
    }

    #[test]
    fn rejects_bad_values() {
        let e = SceneConfig::from_json(r#"{"style":{"marker_radius":0}}"#).unwrap_err();
        assert_eq!(e.code(), "out_of_range");
        let e = SceneConfig::from_json(r#"{"style":{"marker_color":"red\"/><script>"}}"#).unwrap_err();
        assert_eq!(e.code(), "invalid_config");
        let e = SceneConfig::from_json("{not json").unwrap_err();
        assert!(matches!(e, ConfigError::Parse(_)));
    }
}
