use serde::{Deserialize, Serialize};

/// What a cell hides.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellType {
    #[default]
    Empty,
    Mine,
}

/// What the player has done to a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Unmarked,
    Marked,
    /// Revealed. Terminal: a free cell never changes again.
    Free,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellType,
    pub state: CellState,
    /// Adjacent mine count, known once an empty cell is freed.
    pub adjacent: Option<u8>,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        matches!(self.kind, CellType::Mine)
    }

    pub const fn is_free(self) -> bool {
        matches!(self.state, CellState::Free)
    }

    pub const fn is_unmarked(self) -> bool {
        matches!(self.state, CellState::Unmarked)
    }
}
