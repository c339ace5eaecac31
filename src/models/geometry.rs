// src/models/geometry.rs
//
// Grid slots, screen layout and the small bits of angle math shared by
// the tile animator and the move tables.
//
// All pixel coordinates here are screen coordinates: origin top-left, y down.
// A positive rotation is clockwise on screen.

use nannou::prelude::{vec2, Vec2};
use std::fmt;

use crate::config::{LayoutConfig, WindowConfig};

pub const ROWS: usize = 2;
pub const COLS: usize = 4;
pub const TILE_COUNT: usize = ROWS * COLS;

/// A logical slot in the 2x4 tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Slot of the tile with the given identity in the solved layout.
    pub const fn home_of(index: usize) -> Self {
        Self::new(index / COLS, index % COLS)
    }

    pub fn all() -> impl Iterator<Item = GridPos> {
        (0..TILE_COUNT).map(GridPos::home_of)
    }

    pub fn is_valid(&self) -> bool {
        self.row < ROWS && self.col < COLS
    }

    /// True when row + col is even. Drives the gyro twist direction.
    pub fn is_even(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Named pivot points; resolved to pixels by `Layout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotPoint {
    Left,
    Right,
    FrontBack,
}

/// Pixel geometry of the tile grid.
///
/// Each 2x2 half of the grid is centred on its own pivot, and the F/B pivot
/// sits halfway between the two.
#[derive(Debug, Clone)]
pub struct Layout {
    pub tile_size: f32,
    pub tile_offset: f32,
    pub pivot_left: Vec2,
    pub pivot_right: Vec2,
}

impl Layout {
    pub fn new(window: &WindowConfig, layout: &LayoutConfig) -> Self {
        let mid_x = window.width as f32 / 2.0;
        Self {
            tile_size: layout.tile_size,
            tile_offset: layout.tile_offset,
            pivot_left: vec2(mid_x - layout.group_spacing, layout.pivot_y),
            pivot_right: vec2(mid_x + layout.group_spacing, layout.pivot_y),
        }
    }

    pub fn pivot(&self, pivot: PivotPoint) -> Vec2 {
        match pivot {
            PivotPoint::Left => self.pivot_left,
            PivotPoint::Right => self.pivot_right,
            PivotPoint::FrontBack => (self.pivot_left + self.pivot_right) * 0.5,
        }
    }

    pub fn half_extent(&self) -> Vec2 {
        Vec2::splat(self.tile_size / 2.0)
    }

    pub fn tile_center(&self, pos: GridPos) -> Vec2 {
        let pivot = if pos.col < COLS / 2 {
            self.pivot_left
        } else {
            self.pivot_right
        };
        let dx = if pos.col % 2 == 0 { -1.0 } else { 1.0 };
        let dy = if pos.row == 0 { -1.0 } else { 1.0 };
        pivot + vec2(dx, dy) * self.tile_offset
    }

    /// Top-left draw position of a tile sitting in `pos`.
    pub fn tile_origin(&self, pos: GridPos) -> Vec2 {
        self.tile_center(pos) - self.half_extent()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(&WindowConfig::default(), &LayoutConfig::default())
    }
}

/************************** Angle helpers **********************************/

/// Wraps an angle into [0, 360).
pub fn normalize_angle(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Signed shortest rotation from `from` to `to`, in (-180, 180].
pub fn shortest_angle_diff(from: f32, to: f32) -> f32 {
    let diff = normalize_angle(to - from);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

/// Unsigned angular distance, taking the wrap at 360 into account.
pub fn angle_distance(a: f32, b: f32) -> f32 {
    shortest_angle_diff(a, b).abs()
}

/// Rotates `point` around `center` by `degrees` (clockwise on screen).
pub fn rotate_about(point: Vec2, center: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let rel = point - center;
    center + vec2(rel.x * cos - rel.y * sin, rel.x * sin + rel.y * cos)
}

pub fn manhattan_distance(a: Vec2, b: Vec2) -> f32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
