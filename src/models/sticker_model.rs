// src/models/sticker_model.rs
//
// The unfolded-cube view of the puzzle. Holds 24 sticker colours and
// reorders them with the permutation tables; nothing here animates.

use nannou::prelude::{vec2, Vec2};

use crate::config::StickerViewConfig;
use crate::models::stickers::{
    Permutation, StickerColor, INITIAL_STICKERS, STICKER_COUNT, STICKER_QUADS,
};

#[derive(Debug, Clone, PartialEq)]
pub struct StickerModel {
    colors: [StickerColor; STICKER_COUNT],
}

impl Default for StickerModel {
    fn default() -> Self {
        Self::new()
    }
}

impl StickerModel {
    pub fn new() -> Self {
        Self {
            colors: INITIAL_STICKERS,
        }
    }

    pub fn reset(&mut self) {
        self.colors = INITIAL_STICKERS;
    }

    /// `S' = [S[P[i]] for i in 0..24]`, `repetition` times. Tables are
    /// validated when the move table is built.
    pub fn apply(&mut self, permutation: &Permutation, repetition: u32) {
        for _ in 0..repetition {
            let previous = self.colors;
            self.colors = std::array::from_fn(|i| previous[permutation[i]]);
        }
    }

    pub fn is_solved(&self) -> bool {
        self.colors == INITIAL_STICKERS
    }

    /// Drawable stickers with their screen-space quads.
    pub fn visible_stickers<'a>(
        &'a self,
        view: &'a StickerView,
    ) -> impl Iterator<Item = (StickerColor, [Vec2; 4])> + 'a {
        self.colors
            .iter()
            .zip(view.footprints.iter())
            .map(|(color, quad)| (*color, *quad))
    }
}

/// Sticker quads scaled from the reference image into screen space,
/// horizontally centred below the tile grid.
#[derive(Debug, Clone)]
pub struct StickerView {
    footprints: Vec<[Vec2; 4]>,
}

impl StickerView {
    pub fn new(config: &StickerViewConfig, window_width: f32) -> Self {
        let scale_x = config.target_width / config.origin_width;
        let scale_y = config.target_height / config.origin_height;
        let left = window_width / 2.0 - config.target_width / 2.0;

        let footprints = STICKER_QUADS
            .iter()
            .map(|quad| {
                quad.map(|(x, y)| vec2(x * scale_x + left, y * scale_y + config.top_margin))
            })
            .collect();

        Self { footprints }
    }

    pub fn footprints(&self) -> &[[Vec2; 4]] {
        &self.footprints
    }
}
