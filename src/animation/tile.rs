// src/animation/tile.rs
//
// One puzzle tile and its per-frame motion toward its target slot.
// A tile either swings around a pivot or glides in a straight line;
// when a pivot swing starts diverging it drops back to the straight path.

use nannou::prelude::Vec2;

use crate::config::AnimationConfig;
use crate::models::geometry::{
    angle_distance, manhattan_distance, normalize_angle, rotate_about, shortest_angle_diff,
    GridPos, Layout,
};

/// Tuning for one tick of tile motion.
#[derive(Debug, Clone, Copy)]
pub struct MotionSettings {
    pub translation_tolerance: f32,
    pub rotation_tolerance: f32,
    pub rotation_speed: f32,
    pub linear_speed: f32,
    /// User speed multiplier, applied to both rates
    pub speed: f32,
}

impl MotionSettings {
    pub fn new(config: &AnimationConfig, speed: f32) -> Self {
        Self {
            translation_tolerance: config.translation_tolerance,
            rotation_tolerance: config.rotation_tolerance,
            rotation_speed: config.rotation_speed,
            linear_speed: config.linear_speed,
            speed,
        }
    }
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self::new(&AnimationConfig::default(), 1.0)
    }
}

/// An in-progress swing around a pivot. `rotation_angle` is the signed
/// sweep of the whole turn; the per-tick step is scaled from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotRotation {
    pub point: Vec2,
    pub rotation_angle: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileMotion {
    Idle,
    Linear,
    Pivot,
}

#[derive(Debug, Clone)]
pub struct Tile {
    pub id: usize,
    pub home: GridPos,
    pub grid_pos: GridPos,
    /// Top-left draw position
    pub current_pos: Vec2,
    pub target_pos: Vec2,
    pub current_angle: f32,
    pub target_angle: f32,
    pub pivot: Option<PivotRotation>,
    half_size: Vec2,
}

impl Tile {
    pub fn new(id: usize, layout: &Layout) -> Self {
        let home = GridPos::home_of(id);
        let origin = layout.tile_origin(home);
        Self {
            id,
            home,
            grid_pos: home,
            current_pos: origin,
            target_pos: origin,
            current_angle: 0.0,
            target_angle: 0.0,
            pivot: None,
            half_size: layout.half_extent(),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.current_pos + self.half_size
    }

    pub fn size(&self) -> Vec2 {
        self.half_size * 2.0
    }

    /// Relabels the tile into `pos` and retargets it at that slot.
    pub fn move_to(&mut self, pos: GridPos, layout: &Layout) {
        self.grid_pos = pos;
        self.target_pos = layout.tile_origin(pos);
    }

    pub fn start_pivot(&mut self, point: Vec2, rotation_angle: f32) {
        self.pivot = if rotation_angle == 0.0 {
            None
        } else {
            Some(PivotRotation {
                point,
                rotation_angle,
            })
        };
    }

    pub fn clear_pivot(&mut self) {
        self.pivot = None;
    }

    pub fn turn_target_by(&mut self, degrees: f32) {
        self.target_angle = normalize_angle(self.target_angle + degrees);
    }

    /// Back to the solved layout. The tile glides home from wherever it is.
    pub fn reset(&mut self, layout: &Layout) {
        self.move_to(self.home, layout);
        self.target_angle = 0.0;
        self.pivot = None;
    }

    pub fn motion(&self) -> TileMotion {
        if self.pivot.is_some() {
            TileMotion::Pivot
        } else if self.current_pos == self.target_pos && self.current_angle == self.target_angle {
            TileMotion::Idle
        } else {
            TileMotion::Linear
        }
    }

    /// Advances the tile by one tick of `dt` seconds.
    pub fn update(&mut self, dt: f32, settings: &MotionSettings) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }

        match self.pivot {
            Some(pivot) => self.update_pivot(pivot, dt, settings),
            None => self.update_linear(dt, settings),
        }
    }

    fn update_pivot(&mut self, pivot: PivotRotation, dt: f32, settings: &MotionSettings) {
        let step = pivot.rotation_angle * settings.rotation_speed * settings.speed * dt;
        if step == 0.0 || !step.is_finite() {
            self.pivot = None;
            return;
        }

        let before = self.current_pos.distance(self.target_pos);

        let center = rotate_about(self.center(), pivot.point, step);
        self.current_pos = center - self.half_size;
        if shortest_angle_diff(self.current_angle, self.target_angle) != 0.0 {
            self.current_angle = normalize_angle(self.current_angle + step);
        }

        if manhattan_distance(self.current_pos, self.target_pos) < settings.translation_tolerance {
            self.snap();
            return;
        }

        // also catches NaN and a pivot sitting on the tile centre
        let after = self.current_pos.distance(self.target_pos);
        if !(after < before) {
            self.pivot = None;
        }
    }

    fn update_linear(&mut self, dt: f32, settings: &MotionSettings) {
        let factor = (dt * settings.linear_speed * settings.speed).min(1.0);
        let tolerance = settings.translation_tolerance;

        let diff = self.target_pos - self.current_pos;
        self.current_pos.x = if diff.x.abs() > tolerance {
            self.current_pos.x + diff.x * factor
        } else {
            self.target_pos.x
        };
        self.current_pos.y = if diff.y.abs() > tolerance {
            self.current_pos.y + diff.y * factor
        } else {
            self.target_pos.y
        };

        let angle_diff = shortest_angle_diff(self.current_angle, self.target_angle);
        if angle_diff != 0.0 {
            self.current_angle = normalize_angle(self.current_angle + angle_diff * factor);
            if angle_distance(self.current_angle, self.target_angle) < settings.rotation_tolerance {
                self.current_angle = self.target_angle;
            }
        }
    }

    fn snap(&mut self) {
        self.current_pos = self.target_pos;
        self.current_angle = self.target_angle;
        self.pivot = None;
    }
}
