use std::path::Path;
use std::str::FromStr;

use cgmath::Deg;
use serde::Deserialize;
use thiserror::Error;

use crate::animation::{
    AnimationParameters, ParameterError, DEFAULT_SKEW_ANGLE, DEFAULT_STRETCH_DURATION,
    DEFAULT_ZOOM_DURATION,
};

/// Animation settings as written in a JSON5 file or passed on the command line. Unset values
/// fall through to the next layer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimationConfig {
    pub zoom_duration: Option<f32>,
    pub stretch_duration: Option<f32>,
    /// Initial slant in degrees.
    pub skew_angle: Option<f32>,
}

impl AnimationConfig {
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config_str = std::fs::read_to_string(path)?;

        config_str.parse()
    }

    /// Values set in `self` win over `fallback`.
    pub fn or(self, fallback: Self) -> Self {
        Self {
            zoom_duration: self.zoom_duration.or(fallback.zoom_duration),
            stretch_duration: self.stretch_duration.or(fallback.stretch_duration),
            skew_angle: self.skew_angle.or(fallback.skew_angle),
        }
    }

    pub fn resolve(self) -> Result<AnimationParameters, ConfigError> {
        let params = AnimationParameters::with_angle(
            self.zoom_duration.unwrap_or(DEFAULT_ZOOM_DURATION),
            self.stretch_duration.unwrap_or(DEFAULT_STRETCH_DURATION),
            self.skew_angle.map(Deg).unwrap_or(DEFAULT_SKEW_ANGLE),
        )?;

        Ok(params)
    }
}

impl FromStr for AnimationConfig {
    type Err = ConfigError;

    fn from_str(config_str: &str) -> Result<Self, Self::Err> {
        Ok(json5::from_str(config_str)?)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Input(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Format(#[from] json5::Error),
    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let params = "{}".parse::<AnimationConfig>().unwrap().resolve().unwrap();

        assert_eq!(params.zoom_duration(), 3.0);
        assert_eq!(params.stretch_duration(), 1.5);
        assert!((params.start_skew() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn parses_json5() {
        let config: AnimationConfig = r#"{
                // slower zoom
                zoom_duration: 6,
                skew_angle: 0.0,
            }"#
        .parse()
        .unwrap();

        assert_eq!(config.zoom_duration, Some(6.0));
        assert_eq!(config.stretch_duration, None);

        let params = config.resolve().unwrap();
        assert_eq!(params.zoom_duration(), 6.0);
        assert_eq!(params.start_skew(), 0.0);
    }

    #[test]
    fn command_line_wins() {
        let file = AnimationConfig {
            zoom_duration: Some(5.0),
            stretch_duration: Some(2.0),
            skew_angle: None,
        };
        let cli = AnimationConfig {
            zoom_duration: Some(1.0),
            ..Default::default()
        };

        let merged = cli.or(file);
        assert_eq!(merged.zoom_duration, Some(1.0));
        assert_eq!(merged.stretch_duration, Some(2.0));
        assert_eq!(merged.skew_angle, None);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            "{ zoom: 1.0 }".parse::<AnimationConfig>(),
            Err(ConfigError::Format(_))
        ));
    }

    #[test]
    fn rejects_invalid_values() {
        let config = AnimationConfig {
            stretch_duration: Some(0.0),
            ..Default::default()
        };

        assert!(matches!(
            config.resolve(),
            Err(ConfigError::Parameter(ParameterError::Duration("stretch", _)))
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            AnimationConfig::load_from_path("/nonexistent/animation.json5"),
            Err(ConfigError::Input(_))
        ));
    }
}
