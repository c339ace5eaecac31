// src/render/mod.rs
// Drawing the puzzle with nannou. The models work in screen space
// (top-left origin, y down); everything is converted here just before drawing.

pub mod sticker_renderer;
pub mod tile_renderer;

pub use sticker_renderer::StickerRenderer;
pub use tile_renderer::{TileArt, TileRenderer};

use nannou::prelude::*;

use crate::models::StickerColor;

pub const BACKGROUND: (u8, u8, u8) = (68, 68, 68);

/// Screen coordinates to nannou world coordinates (centred, y up).
pub fn screen_to_world(point: Vec2, window_size: Vec2) -> Vec2 {
    vec2(point.x - window_size.x / 2.0, window_size.y / 2.0 - point.y)
}

pub fn sticker_rgb(color: StickerColor) -> Rgb8 {
    let (r, g, b) = color.rgb8();
    rgb8(r, g, b)
}

#[derive(Debug, Clone)]
pub struct RenderParams {
    pub outline: Rgb8,
    pub stroke_weight: f32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            outline: rgb8(0, 0, 0),
            stroke_weight: 2.0,
        }
    }
}
