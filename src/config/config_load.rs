// src/config/config_load.rs
//
// loading of config.toml

use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::*;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub layout: LayoutConfig,
    pub animation: AnimationConfig,
    pub speed: SpeedConfig,
    pub sticker_view: StickerViewConfig,
    pub osc: OscConfig,
}

impl Config {
    /// Loads config.toml from the executable's directory, then from the
    /// working directory. Falls back to defaults when neither exists; a file
    /// that exists but doesn't parse or validate is an error.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        match Self::find_config_file() {
            Some(path) => {
                info!("Loading config from {}", path.display());
                Self::load_from_path(&path)
            }
            None => {
                info!("No {} found, using defaults", CONFIG_FILE);
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the animator can't work with: a speed range that
    /// doesn't rise through 1.0, or a rate or tolerance that isn't positive.
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        let speed = &self.speed;
        if !(speed.min_multiplier > 0.0 && speed.min_multiplier <= 1.0) {
            return Err(format!(
                "speed.min_multiplier must be in (0, 1], got {}",
                speed.min_multiplier
            )
            .into());
        }
        if !(speed.max_multiplier >= 1.0 && speed.max_multiplier.is_finite()) {
            return Err(format!(
                "speed.max_multiplier must be at least 1, got {}",
                speed.max_multiplier
            )
            .into());
        }

        let animation = &self.animation;
        let positive = [
            ("animation.translation_tolerance", animation.translation_tolerance),
            ("animation.rotation_tolerance", animation.rotation_tolerance),
            ("animation.rotation_speed", animation.rotation_speed),
            ("animation.linear_speed", animation.linear_speed),
            ("layout.tile_size", self.layout.tile_size),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{} must be positive, got {}", name, value).into());
            }
        }
        Ok(())
    }

    fn find_config_file() -> Option<PathBuf> {
        let exe_config = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|dir| dir.join(CONFIG_FILE)));

        exe_config
            .into_iter()
            .chain(std::iter::once(PathBuf::from(CONFIG_FILE)))
            .find(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 700);
        assert_eq!(config.speed.initial_value, 50);
        assert!(!config.osc.enabled);
        assert!((config.animation.translation_tolerance - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [animation]
            linear_speed = 5.0

            [osc]
            enabled = true
            "#,
        )
        .unwrap();
        assert!((config.animation.linear_speed - 5.0).abs() < 1e-6);
        assert!((config.animation.rotation_speed - 1.0).abs() < 1e-6);
        assert!(config.osc.enabled);
        assert_eq!(config.osc.rx_port, 9000);
    }

    #[test]
    fn test_shipped_config_parses() {
        let content = include_str!("../../config.toml");
        let config = Config::from_toml_str(content).unwrap();
        assert!((config.layout.tile_size - 170.0).abs() < 1e-6);
        assert!((config.sticker_view.top_margin - 380.0).abs() < 1e-6);
        assert_eq!(config.speed.step, 5);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(Config::from_toml_str("[window]\nwidth = \"wide\"").is_err());
    }

    mod validation_tests {
        use super::*;

        fn rejects(content: &str, field: &str) {
            let err = Config::from_toml_str(content).unwrap_err();
            assert!(err.to_string().contains(field), "{}", err);
        }

        #[test]
        fn test_defaults_validate() {
            assert!(Config::default().validate().is_ok());
        }

        #[test]
        fn test_zero_min_multiplier_is_rejected() {
            rejects("[speed]\nmin_multiplier = 0.0", "speed.min_multiplier");
            rejects("[speed]\nmin_multiplier = -0.5", "speed.min_multiplier");
        }

        #[test]
        fn test_speed_range_must_rise_through_one() {
            rejects("[speed]\nmin_multiplier = 1.5", "speed.min_multiplier");
            rejects("[speed]\nmax_multiplier = 0.5", "speed.max_multiplier");
            rejects("[speed]\nmax_multiplier = 0.0", "speed.max_multiplier");
        }

        #[test]
        fn test_flat_speed_range_is_allowed() {
            let config =
                Config::from_toml_str("[speed]\nmin_multiplier = 1.0\nmax_multiplier = 1.0").unwrap();
            assert!((config.speed.min_multiplier - 1.0).abs() < 1e-6);
        }

        #[test]
        fn test_non_positive_animation_values_are_rejected() {
            rejects(
                "[animation]\ntranslation_tolerance = 0.0",
                "animation.translation_tolerance",
            );
            rejects("[animation]\nrotation_tolerance = -1.0", "animation.rotation_tolerance");
            rejects("[animation]\nrotation_speed = 0.0", "animation.rotation_speed");
            rejects("[animation]\nlinear_speed = 0.0", "animation.linear_speed");
            rejects("[layout]\ntile_size = 0.0", "layout.tile_size");
        }

        #[test]
        fn test_nan_is_rejected() {
            rejects("[animation]\nlinear_speed = nan", "animation.linear_speed");
        }
    }
}
