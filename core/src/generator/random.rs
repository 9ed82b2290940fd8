use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

use super::*;

/// Cells kept free of mines around the start, the start cell included.
pub type Exclusion = SmallVec<[Coord2; 9]>;

/// Uniformly picks `config.mines` distinct cells outside `exclusion`.
///
/// When the exclusion leaves fewer candidates than requested every candidate
/// becomes a mine.
pub fn place_mines<R: Rng + ?Sized>(
    config: GameConfig,
    exclusion: &[Coord2],
    rng: &mut R,
) -> MineLayout {
    let cols = config.cols();
    let candidates: Vec<usize> = (0..config.total_cells() as usize)
        .filter(|&i| !exclusion.contains(&from_linear(i, cols)))
        .collect();

    let requested = config.mines as usize;
    let amount = requested.min(candidates.len());
    if amount < requested {
        log::warn!(
            "Minefield already full, requested {} mines but only {} cells are available",
            requested,
            candidates.len()
        );
    }

    let mines = index::sample(rng, candidates.len(), amount)
        .into_iter()
        .map(|pick| from_linear(candidates[pick], cols))
        .collect();

    MineLayout::new_unchecked(config.size, mines)
}

/// Builds the exclusion set for `start`, degrading `AlwaysZero` to
/// `SimpleSafe` when the board is too crowded to keep the whole
/// neighbourhood clear.
pub fn start_exclusion(config: GameConfig, start: Coord2, start_tile: StartTile) -> Exclusion {
    let mut exclusion = Exclusion::new();
    exclusion.push(start);

    if let StartTile::AlwaysZero = start_tile {
        let neighbors: Exclusion = neighbors(start, config.size).collect();
        if config.mines as usize + 1 + neighbors.len() > config.total_cells() as usize {
            log::warn!("Cannot make start tile zero, fallback to simple safe");
        } else {
            exclusion.extend(neighbors);
        }
    }

    exclusion
}

/// Purely random placement that never puts a mine on the start cell, and
/// optionally not around it either.
#[derive(Clone, Debug)]
pub struct RandomMinefieldGenerator<R = SmallRng> {
    rng: R,
    start_tile: StartTile,
}

impl<R: Rng> RandomMinefieldGenerator<R> {
    pub fn new(rng: R, start_tile: StartTile) -> Self {
        Self { rng, start_tile }
    }

    pub fn with_start_tile(self, start_tile: StartTile) -> Self {
        Self { start_tile, ..self }
    }
}

impl RandomMinefieldGenerator<SmallRng> {
    /// Deterministic generator, the same seed always gives the same layout.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed), StartTile::default())
    }

    pub fn from_os_rng() -> Self {
        Self::new(SmallRng::from_os_rng(), StartTile::default())
    }
}

impl<R: Rng> MinefieldGenerator for RandomMinefieldGenerator<R> {
    fn generate(&mut self, config: GameConfig, start: Coord2) -> MineLayout {
        let exclusion = start_exclusion(config, start, self.start_tile);
        let layout = place_mines(config, &exclusion, &mut self.rng);
        log::debug!(
            "Placed {} mines on a {}x{} board, start at {:?}",
            layout.mine_count(),
            config.rows(),
            config.cols(),
            start
        );
        layout
    }
}
