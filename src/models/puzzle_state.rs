// src/models/puzzle_state.rs
//
// Everything a frame needs to draw: the eight tiles and the sticker colours.

use rayon::prelude::*;

use crate::animation::{MotionSettings, Tile, TileMotion};
use crate::models::geometry::{GridPos, Layout, COLS, ROWS, TILE_COUNT};
use crate::models::sticker_model::StickerModel;

/// Index of the tile currently sitting in `pos`.
pub fn tile_in_slot(tiles: &[Tile], pos: GridPos) -> Option<usize> {
    tiles.iter().position(|tile| tile.grid_pos == pos)
}

#[derive(Debug, Clone)]
pub struct PuzzleState {
    pub tiles: Vec<Tile>,
    pub stickers: StickerModel,
}

impl PuzzleState {
    pub fn new(layout: &Layout) -> Self {
        Self {
            tiles: (0..TILE_COUNT).map(|id| Tile::new(id, layout)).collect(),
            stickers: StickerModel::new(),
        }
    }

    /// Advances every tile by one tick. Tiles own disjoint state, so they
    /// update in parallel.
    pub fn update(&mut self, dt: f32, settings: &MotionSettings) {
        self.tiles
            .par_iter_mut()
            .for_each(|tile| tile.update(dt, settings));
    }

    pub fn is_settled(&self) -> bool {
        self.tiles.iter().all(|tile| tile.motion() == TileMotion::Idle)
    }

    /// True when the eight tiles occupy the eight slots one-to-one.
    pub fn is_bijection(&self) -> bool {
        let mut seen = [[false; COLS]; ROWS];
        for tile in &self.tiles {
            let pos = tile.grid_pos;
            if !pos.is_valid() || seen[pos.row][pos.col] {
                return false;
            }
            seen[pos.row][pos.col] = true;
        }
        self.tiles.len() == TILE_COUNT
    }
}
