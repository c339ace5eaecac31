pub mod speed;
pub mod tile;

pub use speed::{speed_multiplier, SpeedControl};
pub use tile::{MotionSettings, PivotRotation, Tile, TileMotion};
