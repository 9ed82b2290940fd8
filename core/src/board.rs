use alloc::collections::VecDeque;
use core::ops::Index;
use hashbrown::HashSet;
use ndarray::Array2;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Lifecycle of a game, derived from the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// No cell freed yet, mines not placed.
    #[default]
    Ready,
    Active,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    Won,
}

/// A single game: the grid, the pending mine generator and the counters
/// needed to decide when the game is over.
///
/// Mines are not placed until the first [`free`](Board::free). The generator
/// is asked once at that point, and a mine it puts on the start cell is moved
/// elsewhere, which is what makes the first move safe.
#[derive(Clone, Debug)]
pub struct Board<G = RandomMinefieldGenerator<SmallRng>> {
    config: GameConfig,
    cells: Array2<Cell>,
    generator: G,
    mines_placed: bool,
    free_count: CellCount,
    marked_count: CellCount,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Board whose mines are drawn from OS entropy.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        Self::with_generator(
            GameConfig::new(rows, cols, mines)?,
            RandomMinefieldGenerator::from_os_rng(),
        )
    }

    /// Board with a reproducible mine layout.
    pub fn with_seed(rows: Coord, cols: Coord, mines: CellCount, seed: u64) -> Result<Self> {
        Self::with_generator(
            GameConfig::new(rows, cols, mines)?,
            RandomMinefieldGenerator::from_seed(seed),
        )
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_parts(
            GameConfig::default(),
            RandomMinefieldGenerator::from_os_rng(),
        )
    }
}

impl Board<MineLayout> {
    /// Board that replays a known layout on the first reveal.
    pub fn from_layout(layout: MineLayout) -> Result<Self> {
        Self::with_generator(layout.game_config(), layout)
    }
}

impl<G: MinefieldGenerator> Board<G> {
    pub fn with_generator(config: GameConfig, generator: G) -> Result<Self> {
        config.validate()?;
        generator.check(config)?;
        Ok(Self::from_parts(config, generator))
    }

    fn from_parts(config: GameConfig, generator: G) -> Self {
        Self {
            config,
            cells: Array2::default(config.size.to_nd_index()),
            generator,
            mines_placed: false,
            free_count: 0,
            marked_count: 0,
            triggered_mine: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    /// Mines minus marks, negative when the player over-marks.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.config.mines) - i64::from(self.marked_count)
    }

    pub fn free_count(&self) -> CellCount {
        self.free_count
    }

    pub fn marked_count(&self) -> CellCount {
        self.marked_count
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub fn cell(&self, row: Coord, col: Coord) -> Result<Cell> {
        let coords = self.config.validate_coords((row, col))?;
        Ok(self.cells[coords.to_nd_index()])
    }

    pub fn view(&self) -> BoardView {
        BoardView::from_board(self)
    }

    pub fn state(&self) -> GameState {
        if !self.mines_placed {
            GameState::Ready
        } else if self.triggered_mine.is_some() {
            GameState::Lost
        } else if self.free_count == self.config.safe_cells() {
            GameState::Won
        } else {
            GameState::Active
        }
    }

    /// True once mines are placed and either a mine was freed or every safe
    /// cell is free.
    pub fn is_game_over(&self) -> bool {
        self.state().is_finished()
    }

    /// Number of mines around `(row, col)`, counted on demand.
    pub fn adjacent_mines(&self, row: Coord, col: Coord) -> Result<u8> {
        let coords = self.config.validate_coords((row, col))?;
        Ok(self.count_adjacent_mines(coords))
    }

    /// Toggles the mark on a cell. Marking a free cell changes nothing.
    pub fn mark(&mut self, row: Coord, col: Coord) -> Result<MarkOutcome> {
        use CellState::*;
        use MarkOutcome::*;

        let coords = self.config.validate_coords((row, col))?;
        self.check_not_finished()?;

        let cell = &mut self.cells[coords.to_nd_index()];
        Ok(match cell.state {
            Unmarked => {
                cell.state = Marked;
                self.marked_count += 1;
                Changed
            }
            Marked => {
                cell.state = Unmarked;
                self.marked_count -= 1;
                Changed
            }
            Free => NoChange,
        })
    }

    /// Reveals a cell, placing mines first if this is the opening move.
    ///
    /// Stepping on a mine frees it and returns [`GameError::SteppedOnMine`].
    /// If the generator hands back a layout that does not fit the board the
    /// move fails with [`GameError::LayoutMismatch`] and no mines are placed.
    /// A zero cell opens every connected zero cell and their borders; marked
    /// cells stop the cascade and stay marked.
    pub fn free(&mut self, row: Coord, col: Coord) -> Result<RevealOutcome> {
        let coords = self.config.validate_coords((row, col))?;
        self.check_not_finished()?;

        match self.cells[coords.to_nd_index()].state {
            CellState::Free => return Ok(RevealOutcome::NoChange),
            CellState::Marked => return Err(GameError::CellMarked),
            CellState::Unmarked => {}
        }

        if !self.mines_placed {
            self.place_mines(coords)?;
        }

        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_mine() {
            cell.state = CellState::Free;
            self.triggered_mine = Some(coords);
            log::debug!("Stepped on a mine at {:?}", coords);
            return Err(GameError::SteppedOnMine);
        }

        self.flood_fill(coords);

        if self.free_count == self.config.safe_cells() {
            log::debug!("All {} safe cells are free", self.free_count);
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    fn place_mines(&mut self, start: Coord2) -> Result<()> {
        let layout = self.generator.generate(self.config, start);
        if let Err(err) = layout.check_fits(self.config) {
            log::warn!("Rejected generated layout: {}", err);
            return Err(err);
        }

        for &coords in layout.mines() {
            self.cells[coords.to_nd_index()].kind = CellType::Mine;
        }
        if layout.contains_mine(start) {
            self.relocate_mine(start);
        }

        self.mines_placed = true;
        Ok(())
    }

    /// Moves the mine on `from` to the first mine-free cell in row-major order.
    fn relocate_mine(&mut self, from: Coord2) {
        let Some((to, _)) = self.cells.indexed_iter().find(|(_, cell)| !cell.is_mine()) else {
            return;
        };

        self.cells[to].kind = CellType::Mine;
        self.cells[from.to_nd_index()].kind = CellType::Empty;
        log::debug!("Moved the mine off the start cell {:?} to {:?}", from, to);
    }

    fn flood_fill(&mut self, start: Coord2) {
        let mut visited = HashSet::new();
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            if !visited.insert(coords) {
                continue;
            }

            if !self.cells[coords.to_nd_index()].is_unmarked() {
                continue;
            }

            let adjacent = self.count_adjacent_mines(coords);
            let cell = &mut self.cells[coords.to_nd_index()];
            cell.state = CellState::Free;
            cell.adjacent = Some(adjacent);
            self.free_count += 1;

            if adjacent == 0 {
                to_visit.extend(
                    neighbors(coords, self.config.size)
                        .filter(|pos| !visited.contains(pos))
                        .filter(|&pos| self.cells[pos.to_nd_index()].is_unmarked()),
                );
            }
        }
    }

    fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        neighbors(coords, self.config.size)
            .filter(|&pos| self.cells[pos.to_nd_index()].is_mine())
            .count() as u8
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.is_game_over() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

impl<G> Index<Coord2> for Board<G> {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
