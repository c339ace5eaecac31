pub mod geometry;
pub mod moves;
pub mod puzzle_state;
pub mod sticker_model;
pub mod stickers;

pub use geometry::{GridPos, Layout, PivotPoint, TILE_COUNT};
pub use moves::{MoveEntry, MoveId, MoveTable, StickerTurn, Transform, Turn, TurnConfig};
pub use puzzle_state::PuzzleState;
pub use sticker_model::{StickerModel, StickerView};
pub use stickers::{PermutationId, StickerColor};
