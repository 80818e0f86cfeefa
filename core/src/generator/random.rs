use ndarray::Array2;

use super::*;

/// Uniform mine placement: every set of `config.mines()` distinct cells is equally likely.
///
/// Placement is a pure function of the seed, so the same seed and config always yield the same
/// board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        use rand::prelude::*;

        let size = config.size();
        let total_cells = usize::from(config.total_cells());
        let mines = usize::from(config.mines());

        let mut mine_mask: Array2<bool> = Array2::default((size, size).to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        for index in rand::seq::index::sample(&mut rng, total_cells, mines) {
            mine_mask[crate::types::coords_from_index(index, size).to_nd_index()] = true;
        }

        let board = Board::from_mine_mask(mine_mask);

        debug_assert_eq!(usize::from(board.mine_count()), mines);
        log::trace!("generated {}x{} board from seed {}", size, size, self.seed);
        board
    }
}
