// src/error.rs

use std::fmt;

use crate::models::{GridPos, MoveId};

/// Errors raised by the move tables and the move dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum PuzzleError {
    /// A sticker permutation table is not a permutation of 0..24
    InvalidPermutation { name: &'static str },
    /// A turn's from/to cell lists don't describe a bijection on grid slots
    InvalidTurn { name: &'static str, reason: String },
    /// The move table has no entry (or more than one) for a move
    MissingMove(MoveId),
    /// A symbolic move name that doesn't match any move
    UnknownMove(String),
    /// The move is currently gated off (see the gyro two-step rule)
    MoveInactive(MoveId),
    /// No tile occupies a cell a turn refers to
    EmptyCell(GridPos),
}

impl PuzzleError {
    /// Faults that mean the tile/slot bijection is already broken. Nothing
    /// sensible can follow one of these.
    pub fn is_internal_fault(&self) -> bool {
        matches!(self, PuzzleError::EmptyCell(_))
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::InvalidPermutation { name } => {
                write!(f, "Sticker permutation {} is not a permutation of 0..24", name)
            }
            PuzzleError::InvalidTurn { name, reason } => {
                write!(f, "Turn {} is invalid: {}", name, reason)
            }
            PuzzleError::MissingMove(id) => write!(f, "Move table has no unique entry for {}", id),
            PuzzleError::UnknownMove(name) => write!(f, "Unknown move '{}'", name),
            PuzzleError::MoveInactive(id) => write!(f, "Move {} is not available right now", id),
            PuzzleError::EmptyCell(pos) => write!(f, "No tile occupies cell {}", pos),
        }
    }
}

impl std::error::Error for PuzzleError {}
