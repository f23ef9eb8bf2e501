use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Inclusive scale range used for clamping zoom operations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleRange {
    pub min: f64,
    pub max: f64,
}

impl ScaleRange {
    /// Build a range, swapping the bounds if they arrive reversed
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Clamp `scale` into the range. A NaN bound is ignored rather than
    /// propagated.
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.max(self.min).min(self.max)
    }

    /// Both bounds finite and positive
    pub fn is_usable(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min > 0.0
    }

    pub fn contains(&self, scale: f64) -> bool {
        (self.min..=self.max).contains(&scale)
    }
}

/// Translation and scale a viewport starts from (and resets to)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefaultView {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

/// Zoom and pan constants for one viewport mode (desktop or compact)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeConfig {
    pub default_view: DefaultView,
    /// Gap kept around the content by fit-to-view
    pub fit_padding: f64,
    pub fit_max_scale: f64,
    /// Scale change per unit of wheel delta
    pub wheel_sensitivity: f64,
    pub wheel_bounds: ScaleRange,
    /// Multiplier applied by the zoom-in/zoom-out buttons
    pub button_step: f64,
    pub button_bounds: ScaleRange,
    pub pinch_bounds: ScaleRange,
}

impl ModeConfig {
    pub fn desktop() -> Self {
        Self {
            default_view: DefaultView {
                x: 50.0,
                y: 50.0,
                scale: 0.8,
            },
            fit_padding: 40.0,
            ..Self::shared()
        }
    }

    pub fn compact() -> Self {
        Self {
            default_view: DefaultView {
                x: 20.0,
                y: 20.0,
                scale: 0.4,
            },
            fit_padding: 20.0,
            ..Self::shared()
        }
    }

    fn shared() -> Self {
        Self {
            default_view: DefaultView {
                x: 0.0,
                y: 0.0,
                scale: 1.0,
            },
            fit_padding: 0.0,
            fit_max_scale: 1.0,
            wheel_sensitivity: 0.03,
            wheel_bounds: ScaleRange::new(0.2, 2.0),
            button_step: 1.07,
            button_bounds: ScaleRange::new(0.2, 2.0),
            pinch_bounds: ScaleRange::new(0.1, 3.0),
        }
    }
}

/// A mode table as written in TOML: every field optional, layered over the
/// built-in constants of the mode it configures.
#[derive(Debug, Deserialize)]
struct ModeOverrides {
    default_view: Option<DefaultView>,
    fit_padding: Option<f64>,
    fit_max_scale: Option<f64>,
    wheel_sensitivity: Option<f64>,
    wheel_bounds: Option<ScaleRange>,
    button_step: Option<f64>,
    button_bounds: Option<ScaleRange>,
    pinch_bounds: Option<ScaleRange>,
}

impl ModeOverrides {
    fn apply(self, base: ModeConfig) -> ModeConfig {
        ModeConfig {
            default_view: self.default_view.unwrap_or(base.default_view),
            fit_padding: self.fit_padding.unwrap_or(base.fit_padding),
            fit_max_scale: self.fit_max_scale.unwrap_or(base.fit_max_scale),
            wheel_sensitivity: self.wheel_sensitivity.unwrap_or(base.wheel_sensitivity),
            wheel_bounds: usable_or(self.wheel_bounds, base.wheel_bounds),
            button_step: self.button_step.unwrap_or(base.button_step),
            button_bounds: usable_or(self.button_bounds, base.button_bounds),
            pinch_bounds: usable_or(self.pinch_bounds, base.pinch_bounds),
        }
    }
}

/// Configured range with its bounds ordered, or `fallback` when the range
/// is missing or has non-finite or non-positive bounds.
fn usable_or(range: Option<ScaleRange>, fallback: ScaleRange) -> ScaleRange {
    range
        .map(|r| ScaleRange::new(r.min, r.max))
        .filter(ScaleRange::is_usable)
        .unwrap_or(fallback)
}

fn desktop_mode<'de, D>(deserializer: D) -> Result<ModeConfig, D::Error>
where
    D: serde::Deserializer<'de>,
{
    ModeOverrides::deserialize(deserializer).map(|o| o.apply(ModeConfig::desktop()))
}

fn compact_mode<'de, D>(deserializer: D) -> Result<ModeConfig, D::Error>
where
    D: serde::Deserializer<'de>,
{
    ModeOverrides::deserialize(deserializer).map(|o| o.apply(ModeConfig::compact()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Viewport widths at or below this value use the compact mode
    pub breakpoint: f64,
    #[serde(deserialize_with = "desktop_mode")]
    pub desktop: ModeConfig,
    #[serde(deserialize_with = "compact_mode")]
    pub compact: ModeConfig,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            breakpoint: 768.0,
            desktop: ModeConfig::desktop(),
            compact: ModeConfig::compact(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub viewport: ViewportConfig,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Load the user's config, falling back to built-in defaults when absent
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/bmc-canvas");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/bmc-canvas/config.toml"));
    }

    #[test]
    fn test_defaults_match_mode_constants() {
        let config = Config::default();

        assert_eq!(config.viewport.breakpoint, 768.0);
        assert_eq!(
            config.viewport.desktop.default_view,
            DefaultView {
                x: 50.0,
                y: 50.0,
                scale: 0.8
            }
        );
        assert_eq!(
            config.viewport.compact.default_view,
            DefaultView {
                x: 20.0,
                y: 20.0,
                scale: 0.4
            }
        );
        assert_eq!(config.viewport.desktop.fit_padding, 40.0);
        assert_eq!(config.viewport.compact.fit_padding, 20.0);
        assert_eq!(config.viewport.desktop.pinch_bounds, ScaleRange::new(0.1, 3.0));
        assert_eq!(config.viewport.compact.wheel_bounds, ScaleRange::new(0.2, 2.0));
    }

    #[test]
    fn test_scale_range_normalizes_reversed_bounds() {
        let range = ScaleRange::new(2.0, 0.2);
        assert_eq!(range.min, 0.2);
        assert_eq!(range.max, 2.0);
        assert_eq!(range.clamp(5.0), 2.0);
        assert_eq!(range.clamp(0.01), 0.2);
        assert!(range.contains(1.0));
        assert!(!range.contains(2.5));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut original = Config::default();
        original.viewport.breakpoint = 1024.0;
        original.viewport.compact.button_step = 1.2;

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config_content = r#"
[viewport]
breakpoint = 600.0

[viewport.compact]
fit_padding = 10.0
"#;

        let config: Config = toml::from_str(config_content).unwrap();

        assert_eq!(config.viewport.breakpoint, 600.0);
        assert_eq!(config.viewport.compact.fit_padding, 10.0);
        assert_eq!(
            config.viewport.compact.default_view,
            ModeConfig::compact().default_view
        );
        assert_eq!(config.viewport.compact.button_step, 1.07);
        assert_eq!(config.viewport.desktop, ModeConfig::desktop());
    }

    #[test]
    fn test_missing_compact_table_uses_compact_defaults() {
        let config: Config = toml::from_str("[viewport]\nbreakpoint = 500.0\n").unwrap();
        assert_eq!(config.viewport.compact, ModeConfig::compact());
    }

    #[test]
    fn test_reversed_bounds_in_toml_are_normalized() {
        let config: Config =
            toml::from_str("[viewport.desktop]\nwheel_bounds = { min = 4.0, max = 0.5 }\n").unwrap();
        assert_eq!(config.viewport.desktop.wheel_bounds, ScaleRange::new(0.5, 4.0));
    }

    #[test]
    fn test_unusable_bounds_in_toml_fall_back_to_defaults() {
        let config_content = r#"
[viewport.desktop]
wheel_bounds = { min = nan, max = 2.0 }
pinch_bounds = { min = 0.0, max = inf }
"#;

        let config: Config = toml::from_str(config_content).unwrap();

        assert_eq!(config.viewport.desktop.wheel_bounds, ScaleRange::new(0.2, 2.0));
        assert_eq!(config.viewport.desktop.pinch_bounds, ScaleRange::new(0.1, 3.0));
    }

    #[test]
    fn test_clamp_with_nan_bound_does_not_panic() {
        let range = ScaleRange {
            min: f64::NAN,
            max: 2.0,
        };
        assert_eq!(range.clamp(5.0), 2.0);
        assert_eq!(range.clamp(0.5), 0.5);
        assert!(!range.is_usable());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_config_parse_error_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "viewport = 12").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let mut test_config = Config::default();
        test_config.viewport.desktop.fit_padding = 64.0;

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }
}
