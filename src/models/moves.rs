// src/models/moves.rs
//
// The declarative move table. Each symbolic move carries both halves of
// what it does: the geometric steps for the tiles and the sticker
// permutations for the unfolded view, so the two can't drift apart.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::PuzzleError;
use crate::models::geometry::{GridPos, PivotPoint, COLS};
use crate::models::stickers::{validate_permutation, PermutationId};

/// Degrees each tile's facing is nudged by the second half of the gyro move.
pub const GYRO_TWIST_DEGREES: f32 = 30.0;

/************************** Move identifiers *******************************/

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveId {
    X,
    XPrime,
    L,
    LPrime,
    R,
    RPrime,
    U2,
    D2,
    F2,
    B2,
    GyroFirstHalf,
    GyroSecondHalf,
    Y,
    YPrime,
}

impl MoveId {
    pub const ALL: [MoveId; 14] = [
        MoveId::X,
        MoveId::XPrime,
        MoveId::L,
        MoveId::LPrime,
        MoveId::R,
        MoveId::RPrime,
        MoveId::U2,
        MoveId::D2,
        MoveId::F2,
        MoveId::B2,
        MoveId::GyroFirstHalf,
        MoveId::GyroSecondHalf,
        MoveId::Y,
        MoveId::YPrime,
    ];

    pub fn notation(self) -> &'static str {
        match self {
            MoveId::X => "x",
            MoveId::XPrime => "x'",
            MoveId::L => "L",
            MoveId::LPrime => "L'",
            MoveId::R => "R",
            MoveId::RPrime => "R'",
            MoveId::U2 => "U2",
            MoveId::D2 => "D2",
            MoveId::F2 => "F2",
            MoveId::B2 => "B2",
            MoveId::GyroFirstHalf => "ya",
            MoveId::GyroSecondHalf => "yb",
            MoveId::Y => "y",
            MoveId::YPrime => "y'",
        }
    }
}

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

impl FromStr for MoveId {
    type Err = PuzzleError;

    /// Accepts the notation (`R'`) and the ASCII-friendly `p` suffix (`Rp`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let normalized = match name.strip_suffix('p') {
            Some(base) if !base.is_empty() => format!("{}'", base),
            _ => name.to_string(),
        };
        MoveId::ALL
            .into_iter()
            .find(|id| id.notation() == normalized)
            .ok_or_else(|| PuzzleError::UnknownMove(name.to_string()))
    }
}

/*************************** Primitive turns *******************************/

/// How one primitive turn relabels tiles, and whether they swing around a
/// pivot on the way.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnConfig {
    /// Tiles jump to new slots and glide there in a straight line.
    CyclicRelabel {
        from: &'static [GridPos],
        to: &'static [GridPos],
    },
    /// Tiles swing rigidly around `pivot` by `sweep` degrees and end up
    /// facing `angle_diff` degrees further round.
    PivotTurn {
        from: &'static [GridPos],
        to: &'static [GridPos],
        pivot: PivotPoint,
        sweep: f32,
        angle_diff: f32,
    },
}

impl TurnConfig {
    pub fn from(&self) -> &'static [GridPos] {
        match self {
            TurnConfig::CyclicRelabel { from, .. } | TurnConfig::PivotTurn { from, .. } => from,
        }
    }

    pub fn to(&self) -> &'static [GridPos] {
        match self {
            TurnConfig::CyclicRelabel { to, .. } | TurnConfig::PivotTurn { to, .. } => to,
        }
    }

    /// `from` and `to` must be equal-length lists of distinct, valid cells
    /// covering the same set.
    pub fn validate(&self, name: &'static str) -> Result<(), PuzzleError> {
        let invalid = |reason: &str| PuzzleError::InvalidTurn {
            name,
            reason: reason.to_string(),
        };

        let (from, to) = (self.from(), self.to());
        if from.len() != to.len() {
            return Err(invalid("from and to differ in length"));
        }
        if from.iter().chain(to).any(|cell| !cell.is_valid()) {
            return Err(invalid("cell outside the 2x4 grid"));
        }

        let from_set: HashSet<_> = from.iter().collect();
        let to_set: HashSet<_> = to.iter().collect();
        if from_set.len() != from.len() || to_set.len() != to.len() {
            return Err(invalid("repeated cell"));
        }
        if from_set != to_set {
            return Err(invalid("from and to cover different cells"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    RightClockwise,
    RightCounterClockwise,
    LeftClockwise,
    LeftCounterClockwise,
    UpHalf,
    DownHalf,
    FrontHalf,
    BackHalf,
    GyroRelabel,
}

const fn cell(row: usize, col: usize) -> GridPos {
    GridPos::new(row, col)
}

const RIGHT_GROUP: [GridPos; 4] = [cell(0, 2), cell(0, 3), cell(1, 3), cell(1, 2)];
const RIGHT_CW: [GridPos; 4] = [cell(0, 3), cell(1, 3), cell(1, 2), cell(0, 2)];
const RIGHT_CCW: [GridPos; 4] = [cell(1, 2), cell(0, 2), cell(0, 3), cell(1, 3)];

const LEFT_GROUP: [GridPos; 4] = [cell(0, 0), cell(0, 1), cell(1, 1), cell(1, 0)];
const LEFT_CW: [GridPos; 4] = [cell(0, 1), cell(1, 1), cell(1, 0), cell(0, 0)];
const LEFT_CCW: [GridPos; 4] = [cell(1, 0), cell(0, 0), cell(0, 1), cell(1, 1)];

const TOP_ROW: [GridPos; 4] = [cell(0, 0), cell(0, 1), cell(0, 2), cell(0, 3)];
const TOP_ROW_HALF: [GridPos; 4] = [cell(0, 2), cell(0, 3), cell(0, 0), cell(0, 1)];
const BOTTOM_ROW: [GridPos; 4] = [cell(1, 0), cell(1, 1), cell(1, 2), cell(1, 3)];
const BOTTOM_ROW_HALF: [GridPos; 4] = [cell(1, 2), cell(1, 3), cell(1, 0), cell(1, 1)];

const FRONT_RING: [GridPos; 4] = [cell(0, 1), cell(0, 2), cell(1, 2), cell(1, 1)];
const FRONT_RING_HALF: [GridPos; 4] = [cell(1, 2), cell(1, 1), cell(0, 1), cell(0, 2)];
const BACK_RING: [GridPos; 4] = [cell(0, 0), cell(0, 3), cell(1, 3), cell(1, 0)];
const BACK_RING_HALF: [GridPos; 4] = [cell(1, 3), cell(1, 0), cell(0, 0), cell(0, 3)];

const ALL_CELLS: [GridPos; 8] = [
    cell(0, 0), cell(0, 1), cell(0, 2), cell(0, 3),
    cell(1, 0), cell(1, 1), cell(1, 2), cell(1, 3),
];
const ALL_CELLS_SHIFTED: [GridPos; 8] = [
    cell(0, COLS - 1), cell(0, 0), cell(0, 1), cell(0, 2),
    cell(1, COLS - 1), cell(1, 0), cell(1, 1), cell(1, 2),
];

impl Turn {
    pub const ALL: [Turn; 9] = [
        Turn::RightClockwise,
        Turn::RightCounterClockwise,
        Turn::LeftClockwise,
        Turn::LeftCounterClockwise,
        Turn::UpHalf,
        Turn::DownHalf,
        Turn::FrontHalf,
        Turn::BackHalf,
        Turn::GyroRelabel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Turn::RightClockwise => "R",
            Turn::RightCounterClockwise => "R'",
            Turn::LeftClockwise => "L",
            Turn::LeftCounterClockwise => "L'",
            Turn::UpHalf => "U2",
            Turn::DownHalf => "D2",
            Turn::FrontHalf => "F2",
            Turn::BackHalf => "B2",
            Turn::GyroRelabel => "ya",
        }
    }

    pub fn config(self) -> TurnConfig {
        match self {
            Turn::RightClockwise => TurnConfig::PivotTurn {
                from: &RIGHT_GROUP,
                to: &RIGHT_CW,
                pivot: PivotPoint::Right,
                sweep: 90.0,
                angle_diff: 90.0,
            },
            Turn::RightCounterClockwise => TurnConfig::PivotTurn {
                from: &RIGHT_GROUP,
                to: &RIGHT_CCW,
                pivot: PivotPoint::Right,
                sweep: -90.0,
                angle_diff: -90.0,
            },
            Turn::LeftClockwise => TurnConfig::PivotTurn {
                from: &LEFT_GROUP,
                to: &LEFT_CW,
                pivot: PivotPoint::Left,
                sweep: 90.0,
                angle_diff: 90.0,
            },
            Turn::LeftCounterClockwise => TurnConfig::PivotTurn {
                from: &LEFT_GROUP,
                to: &LEFT_CCW,
                pivot: PivotPoint::Left,
                sweep: -90.0,
                angle_diff: -90.0,
            },
            Turn::UpHalf => TurnConfig::CyclicRelabel {
                from: &TOP_ROW,
                to: &TOP_ROW_HALF,
            },
            Turn::DownHalf => TurnConfig::CyclicRelabel {
                from: &BOTTOM_ROW,
                to: &BOTTOM_ROW_HALF,
            },
            Turn::FrontHalf => TurnConfig::PivotTurn {
                from: &FRONT_RING,
                to: &FRONT_RING_HALF,
                pivot: PivotPoint::FrontBack,
                sweep: 180.0,
                angle_diff: 180.0,
            },
            Turn::BackHalf => TurnConfig::PivotTurn {
                from: &BACK_RING,
                to: &BACK_RING_HALF,
                pivot: PivotPoint::FrontBack,
                sweep: 180.0,
                angle_diff: 180.0,
            },
            // no single pivot fits all eight tiles, so this one is a plain swap
            Turn::GyroRelabel => TurnConfig::CyclicRelabel {
                from: &ALL_CELLS,
                to: &ALL_CELLS_SHIFTED,
            },
        }
    }
}

/***************************** Move table **********************************/

/// One geometric step of a move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Turn(Turn),
    /// Second half of the gyro: every tile turns in place by
    /// +/-GYRO_TWIST_DEGREES depending on its slot parity. The sticker view
    /// has no partial rotation, so this step has no permutation.
    GyroTwist,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickerTurn {
    pub permutation: PermutationId,
    pub repetition: u32,
}

const fn stickers(permutation: PermutationId, repetition: u32) -> StickerTurn {
    StickerTurn {
        permutation,
        repetition,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveEntry {
    pub id: MoveId,
    pub transforms: &'static [Transform],
    pub stickers: &'static [StickerTurn],
}

use PermutationId as P;
use Transform::{GyroTwist, Turn as T};

const GYRO_FULL: [Transform; 2] = [T(Turn::GyroRelabel), GyroTwist];
const GYRO_FULL_INVERSE: [Transform; 6] = [
    T(Turn::GyroRelabel),
    GyroTwist,
    T(Turn::GyroRelabel),
    GyroTwist,
    T(Turn::GyroRelabel),
    GyroTwist,
];

pub const STANDARD_MOVES: [MoveEntry; 14] = [
    MoveEntry {
        id: MoveId::X,
        transforms: &[T(Turn::RightClockwise), T(Turn::LeftCounterClockwise)],
        stickers: &[stickers(P::R, 1), stickers(P::L, 3)],
    },
    MoveEntry {
        id: MoveId::XPrime,
        transforms: &[T(Turn::RightCounterClockwise), T(Turn::LeftClockwise)],
        stickers: &[stickers(P::R, 3), stickers(P::L, 1)],
    },
    MoveEntry {
        id: MoveId::R,
        transforms: &[T(Turn::RightClockwise)],
        stickers: &[stickers(P::R, 1)],
    },
    MoveEntry {
        id: MoveId::RPrime,
        transforms: &[T(Turn::RightCounterClockwise)],
        stickers: &[stickers(P::R, 3)],
    },
    MoveEntry {
        id: MoveId::L,
        transforms: &[T(Turn::LeftClockwise)],
        stickers: &[stickers(P::L, 1)],
    },
    MoveEntry {
        id: MoveId::LPrime,
        transforms: &[T(Turn::LeftCounterClockwise)],
        stickers: &[stickers(P::L, 3)],
    },
    MoveEntry {
        id: MoveId::U2,
        transforms: &[T(Turn::UpHalf)],
        stickers: &[stickers(P::U2, 1)],
    },
    MoveEntry {
        id: MoveId::D2,
        transforms: &[T(Turn::DownHalf)],
        stickers: &[stickers(P::D2, 1)],
    },
    MoveEntry {
        id: MoveId::F2,
        transforms: &[T(Turn::FrontHalf)],
        stickers: &[stickers(P::F2, 1)],
    },
    MoveEntry {
        id: MoveId::B2,
        transforms: &[T(Turn::BackHalf)],
        stickers: &[stickers(P::B2, 1)],
    },
    MoveEntry {
        id: MoveId::GyroFirstHalf,
        transforms: &[T(Turn::GyroRelabel)],
        stickers: &[stickers(P::Y, 1)],
    },
    MoveEntry {
        id: MoveId::GyroSecondHalf,
        transforms: &[GyroTwist],
        stickers: &[],
    },
    MoveEntry {
        id: MoveId::Y,
        transforms: &GYRO_FULL,
        stickers: &[stickers(P::Y, 1)],
    },
    MoveEntry {
        id: MoveId::YPrime,
        transforms: &GYRO_FULL_INVERSE,
        stickers: &[stickers(P::Y, 3)],
    },
];

/// A validated move table: one entry per `MoveId`, every turn a bijection,
/// every permutation a permutation of 0..24.
#[derive(Debug, Clone)]
pub struct MoveTable {
    entries: Vec<MoveEntry>,
}

impl MoveTable {
    pub fn standard() -> Result<Self, PuzzleError> {
        Self::from_entries(STANDARD_MOVES.to_vec())
    }

    pub fn from_entries(entries: Vec<MoveEntry>) -> Result<Self, PuzzleError> {
        for id in MoveId::ALL {
            if entries.iter().filter(|entry| entry.id == id).count() != 1 {
                return Err(PuzzleError::MissingMove(id));
            }
        }

        for entry in &entries {
            for transform in entry.transforms {
                if let Transform::Turn(turn) = transform {
                    turn.config().validate(turn.name())?;
                }
            }
            for sticker_turn in entry.stickers {
                let id = sticker_turn.permutation;
                validate_permutation(id.name(), id.table())?;
            }
        }

        Ok(Self { entries })
    }

    pub fn entry(&self, id: MoveId) -> Result<&MoveEntry, PuzzleError> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .ok_or(PuzzleError::MissingMove(id))
    }
}
