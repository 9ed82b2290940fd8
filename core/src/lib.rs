//! Rules engine for single-player minesweeper.
//!
//! A [`Board`] owns the grid, places mines lazily on the first reveal so that
//! the first move is always safe, opens zero regions with a flood fill, and
//! reports when the game is won or lost. Rendering and input are left to the
//! caller, who can read the grid directly or through a [`BoardView`].
//!
//! ```
//! use minefield_core::{Board, GameError};
//!
//! let mut board = Board::with_seed(9, 9, 10, 42)?;
//! board.mark(0, 0)?;
//! board.free(4, 4)?;
//! assert!(!board.is_game_over());
//! # Ok::<(), GameError>(())
//! ```

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;
pub use view::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;
mod view;

/// Construction parameters of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const DEFAULT_ROWS: Coord = 9;
    pub const DEFAULT_COLS: Coord = 9;
    pub const DEFAULT_MINES: CellCount = 10;

    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Requires a non-empty board with at least one cell left free of mines.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked((rows, cols), mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let (rows, cols) = self.size;
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidSize);
        }

        let cells = self.total_cells();
        if self.mines >= cells {
            return Err(GameError::TooManyMines {
                mines: self.mines,
                cells,
            });
        }

        Ok(())
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        self.size.0 as CellCount * self.size.1 as CellCount
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    pub fn validate_coords(&self, (row, col): Coord2) -> Result<Coord2> {
        if row < self.size.0 && col < self.size.1 {
            Ok((row, col))
        } else {
            Err(GameError::InvalidCoords { row, col })
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            (Self::DEFAULT_ROWS, Self::DEFAULT_COLS),
            Self::DEFAULT_MINES,
        )
    }
}

/// Mine positions for one board, kept sorted in row-major order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineLayout {
    size: Coord2,
    mines: Vec<Coord2>,
}

impl MineLayout {
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if let Some(&(row, col)) = mine_coords
            .iter()
            .find(|&&(row, col)| row >= size.0 || col >= size.1)
        {
            return Err(GameError::InvalidCoords { row, col });
        }

        Ok(Self::new_unchecked(size, mine_coords.to_vec()))
    }

    /// Coordinates must be in bounds; duplicates collapse into one mine.
    pub(crate) fn new_unchecked(size: Coord2, mut mines: Vec<Coord2>) -> Self {
        mines.sort_unstable();
        mines.dedup();
        Self { size, mines }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size, self.mine_count())
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines.len() as CellCount
    }

    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mines.binary_search(&coords).is_ok()
    }

    /// A layout only fits a board of the same size and mine count.
    pub fn check_fits(&self, config: GameConfig) -> Result<()> {
        if self.size == config.size && self.mine_count() == config.mines {
            Ok(())
        } else {
            Err(GameError::LayoutMismatch {
                size: self.size,
                mines: self.mine_count(),
            })
        }
    }
}
