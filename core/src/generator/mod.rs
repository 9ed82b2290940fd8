use crate::*;
pub use random::*;

mod random;

/// Source of the mine layout, asked once when the first cell is freed.
///
/// `start` is the cell the player is freeing. The board keeps it clear of
/// mines whatever the generator returns.
pub trait MinefieldGenerator {
    fn generate(&mut self, config: GameConfig, start: Coord2) -> MineLayout;

    /// Rejects a generator that can never produce a layout for `config`.
    fn check(&self, _config: GameConfig) -> Result<()> {
        Ok(())
    }
}

/// Replays a fixed layout.
impl MinefieldGenerator for MineLayout {
    fn generate(&mut self, _config: GameConfig, _start: Coord2) -> MineLayout {
        self.clone()
    }

    fn check(&self, config: GameConfig) -> Result<()> {
        self.check_fits(config)
    }
}

/// How much of the area around the first freed cell is kept clear of mines.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum StartTile {
    /// Only the start cell itself.
    #[default]
    SimpleSafe,
    /// The start cell and its neighbours, so the first reveal opens a region.
    AlwaysZero,
}
