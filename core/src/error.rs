use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have at least one row and one column")]
    InvalidSize,
    #[error("Too many mines: {mines} requested but the board has {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Invalid coordinates ({row}, {col})")]
    InvalidCoords { row: Coord, col: Coord },
    #[error("Mine layout of size {size:?} with {mines} mines does not fit the board")]
    LayoutMismatch { size: Coord2, mines: CellCount },
    #[error("Cell is marked, unmark it before revealing")]
    CellMarked,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("You stepped on a mine and failed!")]
    SteppedOnMine,
}

impl GameError {
    /// Whether this error is the player losing rather than a rejected action.
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::SteppedOnMine)
    }

    /// Whether the caller can keep playing after this error.
    pub const fn is_recoverable(self) -> bool {
        matches!(self, Self::InvalidCoords { .. } | Self::CellMarked)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
