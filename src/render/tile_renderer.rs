// src/render/tile_renderer.rs
//
// Procedural tile artwork: three squares fanned out at 120 degrees, each
// with one corner on the tile centre, then the whole fan tilted.

use nannou::prelude::*;

use crate::animation::Tile;
use crate::models::geometry::rotate_about;
use crate::models::StickerColor::{self, Blue, Green, Orange, Red, White, Yellow};
use crate::render::{screen_to_world, sticker_rgb, RenderParams};

/// Square side relative to the tile's edge length.
const SQUARE_RATIO: f32 = 100.0 / 280.0;
const FAN_STEP: f32 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileArt {
    pub colors: [StickerColor; 3],
    pub tilt: f32,
}

/// Per tile identity, in row-major slot order.
pub const TILE_ART: [TileArt; 8] = [
    TileArt { colors: [Orange, Blue, White], tilt: 0.0 },
    TileArt { colors: [Green, Orange, White], tilt: -30.0 },
    TileArt { colors: [Red, Green, White], tilt: 0.0 },
    TileArt { colors: [Blue, Red, White], tilt: -30.0 },
    TileArt { colors: [Yellow, Blue, Orange], tilt: 30.0 },
    TileArt { colors: [Yellow, Orange, Green], tilt: 60.0 },
    TileArt { colors: [Yellow, Green, Red], tilt: 30.0 },
    TileArt { colors: [Yellow, Red, Blue], tilt: 60.0 },
];

impl TileArt {
    /// The three squares in screen space for a tile centred at `center`,
    /// `size` pixels wide and turned `angle` degrees clockwise.
    pub fn squares(&self, center: Vec2, size: f32, angle: f32) -> [(StickerColor, [Vec2; 4]); 3] {
        let side = size * SQUARE_RATIO;
        let corners = [
            vec2(0.0, 0.0),
            vec2(side, 0.0),
            vec2(side, side),
            vec2(0.0, side),
        ];

        std::array::from_fn(|i| {
            let turn = i as f32 * FAN_STEP + self.tilt + angle;
            let quad = corners.map(|corner| rotate_about(center + corner, center, turn));
            (self.colors[i], quad)
        })
    }
}

pub struct TileRenderer {
    params: RenderParams,
}

impl TileRenderer {
    pub fn new(params: RenderParams) -> Self {
        Self { params }
    }

    pub fn draw(&self, draw: &Draw, tiles: &[Tile], window_size: Vec2) {
        for tile in tiles {
            let Some(art) = TILE_ART.get(tile.id) else {
                continue;
            };
            let squares = art.squares(tile.center(), tile.size().x, tile.current_angle);
            for (color, quad) in squares {
                let points = quad.map(|point| screen_to_world(point, window_size));
                draw.polygon()
                    .color(sticker_rgb(color))
                    .stroke(self.params.outline)
                    .stroke_weight(self.params.stroke_weight)
                    .points(points);
            }
        }
    }
}

impl Default for TileRenderer {
    fn default() -> Self {
        Self::new(RenderParams::default())
    }
}
