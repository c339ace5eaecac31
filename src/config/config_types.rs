// src/config/config_types.rs
//
// Config sections for the app. Every section has defaults so a partial
// config.toml (or none at all) still produces a playable puzzle.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 700,
        }
    }
}

/// Where the 2x4 tile grid sits on screen.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub tile_size: f32,
    pub pivot_y: f32,
    pub group_spacing: f32,
    pub tile_offset: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tile_size: 170.0,
            pivot_y: 200.0,
            group_spacing: 160.0,
            tile_offset: 60.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub translation_tolerance: f32, // pixels
    pub rotation_tolerance: f32,    // degrees
    pub rotation_speed: f32,
    pub linear_speed: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            translation_tolerance: 3.0,
            rotation_tolerance: 0.05,
            rotation_speed: 1.0,
            linear_speed: 3.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpeedConfig {
    pub min_multiplier: f32,
    pub max_multiplier: f32,
    pub initial_value: u8,
    pub step: u8,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            min_multiplier: 1.0 / 3.0,
            max_multiplier: 3.0,
            initial_value: 50,
            step: 5,
        }
    }
}

/// The sticker quads were measured by hand on a reference image of
/// `origin_width` x `origin_height` pixels.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StickerViewConfig {
    pub origin_width: f32,
    pub origin_height: f32,
    pub target_width: f32,
    pub target_height: f32,
    pub top_margin: f32,
}

impl Default for StickerViewConfig {
    fn default() -> Self {
        Self {
            origin_width: 855.0,
            origin_height: 664.0,
            target_width: 260.0,
            target_height: 200.0,
            top_margin: 380.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OscConfig {
    pub enabled: bool,
    pub rx_port: u16,
}

impl Default for OscConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            rx_port: 9000,
        }
    }
}
