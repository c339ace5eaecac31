// src/controllers/move_dispatcher.rs
//
// Turns symbolic moves into tile retargeting plus sticker permutations.
// A move is staged on a copy of the tiles and only committed once every
// step of it has succeeded, so a frame never sees half a move.

use log::{debug, info};

use crate::animation::{MotionSettings, Tile};
use crate::error::PuzzleError;
use crate::models::moves::GYRO_TWIST_DEGREES;
use crate::models::puzzle_state::tile_in_slot;
use crate::models::{
    Layout, MoveId, MoveTable, PuzzleState, StickerModel, Transform, Turn, TurnConfig,
};

/// Which moves may be invoked right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gating {
    /// Everything except the second gyro half
    #[default]
    Open,
    /// The first gyro half was just applied; only its second half may follow
    GyroPending,
}

impl Gating {
    pub fn allows(self, id: MoveId) -> bool {
        match self {
            Gating::Open => id != MoveId::GyroSecondHalf,
            Gating::GyroPending => id == MoveId::GyroSecondHalf,
        }
    }
}

pub struct MoveDispatcher {
    table: MoveTable,
    layout: Layout,
    state: PuzzleState,
    gating: Gating,
}

impl MoveDispatcher {
    /// Dispatcher over the standard move table. Fails if any table entry
    /// breaks the slot bijection or isn't a permutation.
    pub fn new(layout: Layout) -> Result<Self, PuzzleError> {
        Ok(Self::with_table(MoveTable::standard()?, layout))
    }

    pub fn with_table(table: MoveTable, layout: Layout) -> Self {
        Self {
            state: PuzzleState::new(&layout),
            table,
            layout,
            gating: Gating::Open,
        }
    }

    pub fn is_active(&self, id: MoveId) -> bool {
        self.gating.allows(id)
    }

    pub fn active_moves(&self) -> Vec<MoveId> {
        MoveId::ALL
            .into_iter()
            .filter(|id| self.is_active(*id))
            .collect()
    }

    pub fn invoke_named(&mut self, name: &str) -> Result<MoveId, PuzzleError> {
        let id = name.parse::<MoveId>()?;
        self.invoke(id)?;
        Ok(id)
    }

    pub fn invoke(&mut self, id: MoveId) -> Result<(), PuzzleError> {
        if !self.is_active(id) {
            return Err(PuzzleError::MoveInactive(id));
        }

        let entry = self.table.entry(id)?;
        let mut staged = self.state.tiles.clone();
        for transform in entry.transforms {
            apply_transform(&mut staged, &self.layout, *transform)?;
        }

        self.state.tiles = staged;
        for sticker_turn in entry.stickers {
            self.state
                .stickers
                .apply(sticker_turn.permutation.table(), sticker_turn.repetition);
        }

        self.gating = match id {
            MoveId::GyroFirstHalf => Gating::GyroPending,
            _ => Gating::Open,
        };

        debug!("Applied move {} (gating {:?})", id, self.gating);
        Ok(())
    }

    /// Sends every tile home facing 0, resets the stickers and reopens the
    /// gating. Always allowed.
    pub fn reset(&mut self) {
        for tile in self.state.tiles.iter_mut() {
            tile.reset(&self.layout);
        }
        self.state.stickers.reset();
        self.gating = Gating::Open;
        info!("Puzzle reset");
    }

    pub fn update(&mut self, dt: f32, settings: &MotionSettings) {
        self.state.update(dt, settings);
    }

    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.state.tiles
    }

    pub fn stickers(&self) -> &StickerModel {
        &self.state.stickers
    }

    pub fn gating(&self) -> Gating {
        self.gating
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}

fn apply_transform(tiles: &mut [Tile], layout: &Layout, transform: Transform) -> Result<(), PuzzleError> {
    match transform {
        Transform::Turn(turn) => apply_turn(tiles, layout, turn),
        Transform::GyroTwist => {
            for tile in tiles.iter_mut() {
                let twist = if tile.grid_pos.is_even() {
                    GYRO_TWIST_DEGREES
                } else {
                    -GYRO_TWIST_DEGREES
                };
                tile.turn_target_by(twist);
            }
            Ok(())
        }
    }
}

fn apply_turn(tiles: &mut [Tile], layout: &Layout, turn: Turn) -> Result<(), PuzzleError> {
    let config = turn.config();

    // resolve every source cell before relabelling any tile
    let movers = config
        .from()
        .iter()
        .map(|cell| tile_in_slot(tiles, *cell).ok_or(PuzzleError::EmptyCell(*cell)))
        .collect::<Result<Vec<_>, _>>()?;

    for (index, to) in movers.into_iter().zip(config.to()) {
        let tile = &mut tiles[index];
        tile.move_to(*to, layout);
        match config {
            TurnConfig::PivotTurn {
                pivot,
                sweep,
                angle_diff,
                ..
            } => {
                tile.start_pivot(layout.pivot(pivot), sweep);
                tile.turn_target_by(angle_diff);
            }
            TurnConfig::CyclicRelabel { .. } => tile.clear_pivot(),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::TileMotion;
    use crate::models::{GridPos, PermutationId};

    fn dispatcher() -> MoveDispatcher {
        MoveDispatcher::new(Layout::default()).unwrap()
    }

    fn slots(dispatcher: &MoveDispatcher) -> Vec<GridPos> {
        dispatcher.tiles().iter().map(|tile| tile.grid_pos).collect()
    }

    fn target_angles(dispatcher: &MoveDispatcher) -> Vec<f32> {
        dispatcher.tiles().iter().map(|tile| tile.target_angle).collect()
    }

    fn home_slots() -> Vec<GridPos> {
        GridPos::all().collect()
    }

    mod end_to_end_tests {
        use super::*;

        #[test]
        fn test_right_turn_moves_group_and_stickers() {
            let mut d = dispatcher();
            d.invoke(MoveId::R).unwrap();

            let expected = [
                (GridPos::new(0, 2), GridPos::new(0, 3)),
                (GridPos::new(0, 3), GridPos::new(1, 3)),
                (GridPos::new(1, 3), GridPos::new(1, 2)),
                (GridPos::new(1, 2), GridPos::new(0, 2)),
            ];
            for (from, to) in expected {
                let tile = d
                    .tiles()
                    .iter()
                    .find(|tile| tile.home == from)
                    .unwrap();
                assert_eq!(tile.grid_pos, to);
                assert_eq!(tile.target_angle, 90.0);
                assert!(tile.pivot.is_some());
            }

            // the left group is untouched
            for id in [0, 1, 4, 5] {
                let tile = &d.tiles()[id];
                assert_eq!(tile.grid_pos, tile.home);
                assert_eq!(tile.target_angle, 0.0);
                assert!(tile.pivot.is_none());
            }

            let mut expected_stickers = StickerModel::new();
            expected_stickers.apply(PermutationId::R.table(), 1);
            assert_eq!(d.stickers(), &expected_stickers);
        }

        #[test]
        fn test_four_right_turns_return_home() {
            let mut d = dispatcher();
            for _ in 0..4 {
                d.invoke(MoveId::R).unwrap();
            }
            assert_eq!(slots(&d), home_slots());
            assert!(d.stickers().is_solved());
            assert!(target_angles(&d).iter().all(|angle| *angle == 0.0));
        }

        #[test]
        fn test_prime_undoes_turn() {
            for (turn, undo) in [
                (MoveId::R, MoveId::RPrime),
                (MoveId::L, MoveId::LPrime),
                (MoveId::X, MoveId::XPrime),
                (MoveId::Y, MoveId::YPrime),
            ] {
                let mut d = dispatcher();
                d.invoke(turn).unwrap();
                assert!(!d.stickers().is_solved());
                d.invoke(undo).unwrap();
                assert_eq!(slots(&d), home_slots(), "{} {}", turn, undo);
                assert!(d.stickers().is_solved(), "{} {}", turn, undo);
                assert!(target_angles(&d).iter().all(|angle| *angle == 0.0));
            }
        }

        #[test]
        fn test_half_turns_are_their_own_inverse() {
            for id in [MoveId::U2, MoveId::D2, MoveId::F2, MoveId::B2] {
                let mut d = dispatcher();
                d.invoke(id).unwrap();
                d.invoke(id).unwrap();
                assert_eq!(slots(&d), home_slots(), "{}", id);
                assert!(d.stickers().is_solved(), "{}", id);
            }
        }

        #[test]
        fn test_moves_settle_on_their_targets() {
            let mut d = dispatcher();
            for id in [MoveId::R, MoveId::F2, MoveId::U2, MoveId::LPrime] {
                d.invoke(id).unwrap();
            }
            for _ in 0..600 {
                d.update(1.0 / 60.0, &MotionSettings::default());
            }
            assert!(d.state().is_settled());
            for tile in d.tiles() {
                assert_eq!(tile.current_pos, d.layout().tile_origin(tile.grid_pos));
                assert_eq!(tile.current_angle, tile.target_angle);
            }
        }

        #[test]
        fn test_slowest_configured_speed_still_settles() {
            let config = crate::config::Config::default();
            let slowest = crate::animation::speed_multiplier(
                1.0,
                config.speed.min_multiplier,
                config.speed.max_multiplier,
            );
            assert!(slowest > 0.0);
            let settings = MotionSettings::new(&config.animation, slowest);

            let mut d = dispatcher();
            d.invoke(MoveId::U2).unwrap();
            for _ in 0..2000 {
                d.update(1.0 / 60.0, &settings);
            }
            assert!(d.state().is_settled());
        }

        #[test]
        fn test_named_moves() {
            let mut d = dispatcher();
            assert_eq!(d.invoke_named("Rp"), Ok(MoveId::RPrime));
            assert_eq!(
                d.invoke_named("Z"),
                Err(PuzzleError::UnknownMove("Z".to_string()))
            );
        }
    }

    mod composite_tests {
        use super::*;

        #[test]
        fn test_x_is_right_plus_left_prime() {
            let mut whole = dispatcher();
            whole.invoke(MoveId::X).unwrap();

            let mut parts = dispatcher();
            parts.invoke(MoveId::R).unwrap();
            parts.invoke(MoveId::LPrime).unwrap();

            assert_eq!(slots(&whole), slots(&parts));
            assert_eq!(target_angles(&whole), target_angles(&parts));
            assert_eq!(whole.stickers(), parts.stickers());
        }

        #[test]
        fn test_y_is_both_gyro_halves() {
            let mut whole = dispatcher();
            whole.invoke(MoveId::Y).unwrap();

            let mut parts = dispatcher();
            parts.invoke(MoveId::GyroFirstHalf).unwrap();
            parts.invoke(MoveId::GyroSecondHalf).unwrap();

            assert_eq!(slots(&whole), slots(&parts));
            assert_eq!(target_angles(&whole), target_angles(&parts));
            assert_eq!(whole.stickers(), parts.stickers());
            assert_eq!(whole.gating(), Gating::Open);
        }

        #[test]
        fn test_gyro_relabel_shifts_columns_left() {
            let mut d = dispatcher();
            d.invoke(MoveId::GyroFirstHalf).unwrap();
            assert_eq!(d.tiles()[0].grid_pos, GridPos::new(0, 3));
            assert_eq!(d.tiles()[1].grid_pos, GridPos::new(0, 0));
            assert_eq!(d.tiles()[7].grid_pos, GridPos::new(1, 2));
            assert!(d.tiles().iter().all(|tile| tile.pivot.is_none()));
        }

        #[test]
        fn test_gyro_twist_follows_slot_parity() {
            let mut d = dispatcher();
            d.invoke(MoveId::GyroFirstHalf).unwrap();
            let stickers_before = d.stickers().clone();
            d.invoke(MoveId::GyroSecondHalf).unwrap();

            for tile in d.tiles() {
                let expected = if tile.grid_pos.is_even() { 30.0 } else { 330.0 };
                assert_eq!(tile.target_angle, expected, "tile {}", tile.id);
            }
            assert_eq!(d.stickers(), &stickers_before);
        }

        #[test]
        fn test_bijection_holds_after_every_move() {
            let mut d = dispatcher();
            for id in MoveId::ALL {
                if !d.is_active(id) {
                    continue;
                }
                d.invoke(id).unwrap();
                assert!(d.state().is_bijection(), "after {}", id);
                if d.gating() == Gating::GyroPending {
                    d.invoke(MoveId::GyroSecondHalf).unwrap();
                    assert!(d.state().is_bijection());
                }
            }
        }
    }

    mod gating_tests {
        use super::*;

        #[test]
        fn test_second_half_starts_closed() {
            let mut d = dispatcher();
            assert!(!d.is_active(MoveId::GyroSecondHalf));
            assert_eq!(
                d.invoke(MoveId::GyroSecondHalf),
                Err(PuzzleError::MoveInactive(MoveId::GyroSecondHalf))
            );
            assert!(target_angles(&d).iter().all(|angle| *angle == 0.0));
            assert_eq!(d.active_moves().len(), MoveId::ALL.len() - 1);
        }

        #[test]
        fn test_first_half_leaves_only_second_half() {
            let mut d = dispatcher();
            d.invoke(MoveId::GyroFirstHalf).unwrap();
            assert_eq!(d.gating(), Gating::GyroPending);
            assert_eq!(d.active_moves(), vec![MoveId::GyroSecondHalf]);

            let before = slots(&d);
            assert_eq!(
                d.invoke(MoveId::R),
                Err(PuzzleError::MoveInactive(MoveId::R))
            );
            assert_eq!(slots(&d), before);

            d.invoke(MoveId::GyroSecondHalf).unwrap();
            assert_eq!(d.gating(), Gating::Open);
            assert!(d.is_active(MoveId::R));
            assert!(!d.is_active(MoveId::GyroSecondHalf));
        }

        #[test]
        fn test_reset_reopens_gating() {
            let mut d = dispatcher();
            d.invoke(MoveId::GyroFirstHalf).unwrap();
            d.reset();
            assert_eq!(d.gating(), Gating::Open);
            assert!(d.is_active(MoveId::F2));
            assert!(!d.is_active(MoveId::GyroSecondHalf));
        }
    }

    mod reset_tests {
        use super::*;

        #[test]
        fn test_reset_restores_identity() {
            let mut d = dispatcher();
            for id in [MoveId::R, MoveId::F2, MoveId::Y, MoveId::D2] {
                d.invoke(id).unwrap();
            }
            d.update(1.0 / 60.0, &MotionSettings::default());
            d.reset();

            assert_eq!(slots(&d), home_slots());
            assert!(d.stickers().is_solved());
            for tile in d.tiles() {
                assert_eq!(tile.target_angle, 0.0);
                assert!(tile.pivot.is_none());
                assert_eq!(tile.target_pos, d.layout().tile_origin(tile.home));
            }
        }

        #[test]
        fn test_reset_glides_tiles_home() {
            let mut d = dispatcher();
            d.invoke(MoveId::U2).unwrap();
            for _ in 0..5 {
                d.update(1.0 / 60.0, &MotionSettings::default());
            }
            d.reset();
            assert!(d.tiles().iter().any(|tile| tile.motion() == TileMotion::Linear));
            for _ in 0..600 {
                d.update(1.0 / 60.0, &MotionSettings::default());
            }
            assert!(d.state().is_settled());
        }
    }

    mod atomicity_tests {
        use super::*;

        #[test]
        fn test_failed_move_leaves_state_untouched() {
            let mut d = dispatcher();
            // break the bijection so (0,3) is empty
            d.state.tiles[3].grid_pos = GridPos::new(0, 2);
            let tiles_before: Vec<_> = d.tiles().iter().map(|t| (t.grid_pos, t.target_angle)).collect();

            let result = d.invoke(MoveId::R);
            assert_eq!(result, Err(PuzzleError::EmptyCell(GridPos::new(0, 3))));
            assert!(result.unwrap_err().is_internal_fault());

            let tiles_after: Vec<_> = d.tiles().iter().map(|t| (t.grid_pos, t.target_angle)).collect();
            assert_eq!(tiles_before, tiles_after);
            assert!(d.stickers().is_solved());
            assert!(d.tiles().iter().all(|tile| tile.pivot.is_none()));
        }
    }
}
