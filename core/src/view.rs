use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the player is allowed to see of one cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewCell {
    #[default]
    Hidden,
    Marked,
    Open(u8),
    /// The mine that ended the game.
    Exploded,
}

/// Snapshot of a board for renderers. Hidden mines are not exposed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord2,
    pub mines: CellCount,
    pub mines_left: i64,
    pub state: GameState,
    pub cells: Array2<ViewCell>,
}

impl BoardView {
    pub fn from_board<G: MinefieldGenerator>(board: &Board<G>) -> Self {
        let cells = board.cells().map(|cell| match (cell.state, cell.kind) {
            (CellState::Unmarked, _) => ViewCell::Hidden,
            (CellState::Marked, _) => ViewCell::Marked,
            (CellState::Free, CellType::Mine) => ViewCell::Exploded,
            (CellState::Free, CellType::Empty) => ViewCell::Open(cell.adjacent.unwrap_or_default()),
        });

        Self {
            size: board.size(),
            mines: board.mine_count(),
            mines_left: board.mines_left(),
            state: board.state(),
            cells,
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<ViewCell> {
        self.cells.get(coords.to_nd_index()).copied()
    }
}
