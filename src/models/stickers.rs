// src/models/stickers.rs
//
// Static data for the unfolded cube view: sticker colours, the sticker
// permutation tables and the hand-measured sticker quads.
//
// Sticker indices, face letter first:
//   0 Ulb   1 Ubr   2 Urf   3 Ufl
//   4 Flu   5 Fur   6 Frd   7 Fdl
//   8 Rfu   9 Rub  10 Rbd  11 Rdf
//  12 Lbu  13 Luf  14 Lfd  15 Ldb
//  16 Bru  17 Bul  18 Bld  19 Bdr
//  20 Dlf  21 Dfr  22 Drb  23 Dbl

use std::fmt;

use crate::error::PuzzleError;

pub const STICKER_COUNT: usize = 24;
/// Only the U, F, R and L faces are drawn.
pub const VISIBLE_STICKER_COUNT: usize = 16;

pub type Permutation = [usize; STICKER_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StickerColor {
    White,
    Green,
    Red,
    Orange,
    Blue,
    Yellow,
}

impl StickerColor {
    pub fn rgb8(self) -> (u8, u8, u8) {
        match self {
            StickerColor::White => (255, 255, 255),
            StickerColor::Green => (0, 128, 0),
            StickerColor::Red => (255, 0, 0),
            StickerColor::Orange => (255, 165, 0),
            StickerColor::Blue => (0, 0, 255),
            StickerColor::Yellow => (255, 255, 0),
        }
    }
}

impl fmt::Display for StickerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StickerColor::White => "white",
            StickerColor::Green => "green",
            StickerColor::Red => "red",
            StickerColor::Orange => "orange",
            StickerColor::Blue => "blue",
            StickerColor::Yellow => "yellow",
        };
        f.write_str(name)
    }
}

use StickerColor::*;

/// Solved colouring: U white, F green, R red, L orange, B blue, D yellow.
pub const INITIAL_STICKERS: [StickerColor; STICKER_COUNT] = [
    White, White, White, White,
    Green, Green, Green, Green,
    Red, Red, Red, Red,
    Orange, Orange, Orange, Orange,
    Blue, Blue, Blue, Blue,
    Yellow, Yellow, Yellow, Yellow,
];

/*********************** Permutation tables *******************************/

/// The face turns the sticker view knows about. Counter-clockwise turns are
/// three applications of the clockwise table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermutationId {
    R,
    L,
    U2,
    D2,
    F2,
    B2,
    Y,
}

impl PermutationId {
    pub const ALL: [PermutationId; 7] = [
        PermutationId::R,
        PermutationId::L,
        PermutationId::U2,
        PermutationId::D2,
        PermutationId::F2,
        PermutationId::B2,
        PermutationId::Y,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PermutationId::R => "R",
            PermutationId::L => "L",
            PermutationId::U2 => "U2",
            PermutationId::D2 => "D2",
            PermutationId::F2 => "F2",
            PermutationId::B2 => "B2",
            PermutationId::Y => "Y",
        }
    }

    pub fn table(self) -> &'static Permutation {
        match self {
            PermutationId::R => &PERMUTATION_R,
            PermutationId::L => &PERMUTATION_L,
            PermutationId::U2 => &PERMUTATION_U2,
            PermutationId::D2 => &PERMUTATION_D2,
            PermutationId::F2 => &PERMUTATION_F2,
            PermutationId::B2 => &PERMUTATION_B2,
            PermutationId::Y => &PERMUTATION_Y,
        }
    }
}

#[rustfmt::skip]
const PERMUTATION_R: Permutation =  [ 0,  5,  6,  3,  4, 21, 22,  7, 11,  8,  9, 10, 12, 13, 14, 15,  2, 17, 18,  1, 20, 19, 16, 23];
#[rustfmt::skip]
const PERMUTATION_L: Permutation =  [18,  1,  2, 17,  0,  5,  6,  3,  8,  9, 10, 11, 15, 12, 13, 14, 16, 23, 20, 19,  4, 21, 22,  7];
#[rustfmt::skip]
const PERMUTATION_U2: Permutation = [ 2,  3,  0,  1, 16, 17,  6,  7, 12, 13, 10, 11,  8,  9, 14, 15,  4,  5, 18, 19, 20, 21, 22, 23];
#[rustfmt::skip]
const PERMUTATION_D2: Permutation = [ 0,  1,  2,  3,  4,  5, 18, 19,  8,  9, 14, 15, 12, 13, 10, 11, 16, 17,  6,  7, 22, 23, 20, 21];
#[rustfmt::skip]
const PERMUTATION_F2: Permutation = [ 0,  1, 20, 21,  6,  7,  4,  5, 14,  9, 10, 13, 12, 11,  8, 15, 16, 17, 18, 19,  2,  3, 22, 23];
#[rustfmt::skip]
const PERMUTATION_B2: Permutation = [22, 23,  2,  3,  4,  5,  6,  7,  8, 15, 12, 11, 10, 13, 14,  9, 18, 19, 16, 17, 20, 21,  0,  1];
#[rustfmt::skip]
const PERMUTATION_Y: Permutation =  [ 3,  0,  1,  2,  8,  9, 10, 11, 16, 17, 18, 19,  4,  5,  6,  7, 12, 13, 14, 15, 21, 22, 23, 20];

/// Checks that `table`, sorted, is exactly 0..24.
pub fn validate_permutation(name: &'static str, table: &[usize]) -> Result<(), PuzzleError> {
    let mut sorted = table.to_vec();
    sorted.sort_unstable();
    if sorted.len() == STICKER_COUNT && sorted.iter().enumerate().all(|(i, &v)| i == v) {
        Ok(())
    } else {
        Err(PuzzleError::InvalidPermutation { name })
    }
}

/************************* Sticker quads **********************************/

/// Corner points of the visible stickers, measured on the reference image.
#[rustfmt::skip]
pub const STICKER_QUADS: [[(f32, f32); 4]; VISIBLE_STICKER_COUNT] = [
    [(20.0, 39.0),   (218.0, 17.0),  (306.0, 55.0),  (90.0, 81.0)],   // Ulb
    [(567.0, 52.0),  (634.0, 14.0),  (839.0, 31.0),  (788.0, 73.0)],  // Ubr
    [(558.0, 57.0),  (782.0, 78.0),  (719.0, 131.0), (471.0, 105.0)], // Urf
    [(100.0, 86.0),  (316.0, 59.0),  (425.0, 106.0), (190.0, 139.0)], // Ufl
    [(195.0, 153.0), (434.0, 119.0), (434.0, 359.0), (205.0, 405.0)], // Flu
    [(464.0, 118.0), (714.0, 145.0), (704.0, 397.0), (464.0, 360.0)], // Fur
    [(464.0, 376.0), (703.0, 412.0), (693.0, 642.0), (464.0, 597.0)], // Frd
    [(206.0, 421.0), (434.0, 375.0), (434.0, 595.0), (215.0, 651.0)], // Fdl
    [(729.0, 143.0), (790.0, 90.0),  (779.0, 314.0), (717.0, 392.0)], // Rfu
    [(799.0, 83.0),  (847.0, 41.0),  (834.0, 244.0), (786.0, 306.0)], // Rub
    [(784.0, 323.0), (833.0, 260.0), (821.0, 448.0), (774.0, 525.0)], // Rbd
    [(716.0, 410.0), (776.0, 334.0), (767.0, 536.0), (706.0, 635.0)], // Rdf
    [(10.0, 50.0),   (82.0, 92.0),   (95.0, 317.0),  (25.0, 256.0)],  // Lbu
    [(90.0, 98.0),   (181.0, 152.0), (191.0, 402.0), (103.0, 325.0)], // Luf
    [(104.0, 341.0), (192.0, 419.0), (202.0, 646.0), (116.0, 549.0)], // Lfd
    [(26.0, 272.0),  (95.0, 334.0),  (108.0, 541.0), (40.0, 462.0)],  // Ldb
];
