// src/render/sticker_renderer.rs
// Draws the unfolded cube view under the tile grid

use nannou::prelude::*;

use crate::models::{StickerModel, StickerView};
use crate::render::{screen_to_world, sticker_rgb, RenderParams};

pub struct StickerRenderer {
    view: StickerView,
    params: RenderParams,
}

impl StickerRenderer {
    pub fn new(view: StickerView, params: RenderParams) -> Self {
        Self { view, params }
    }

    pub fn draw(&self, draw: &Draw, stickers: &StickerModel, window_size: Vec2) {
        for (color, quad) in stickers.visible_stickers(&self.view) {
            let points = quad.map(|point| screen_to_world(point, window_size));
            draw.polygon()
                .color(sticker_rgb(color))
                .stroke(self.params.outline)
                .stroke_weight(self.params.stroke_weight)
                .points(points);
        }
    }
}
