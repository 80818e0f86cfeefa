use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a rendering layer should draw for one cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    /// Revealed safe cell with its neighbor mine count, 0 renders blank.
    Revealed(u8),
    /// Mine shown after the game was lost.
    Mine,
    /// The mine that lost the game.
    Exploded,
}

/// Player-visible snapshot of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord,
    pub outcome: Outcome,
    pub cells: Array2<CellView>,
}

impl BoardView {
    pub fn from_engine<C: Clock>(engine: &GameEngine<C>) -> Self {
        let board = engine.board();
        let outcome = engine.outcome();
        let show_mines = outcome == Outcome::Lost;

        let size = board.size();
        let mut cells = Array2::from_elem((size, size).to_nd_index(), CellView::Hidden);
        for (coords, cell) in board.iter() {
            let revealed = engine.is_revealed(coords);
            cells[coords.to_nd_index()] = match cell {
                Cell::Mine if revealed => CellView::Exploded,
                Cell::Mine if show_mines => CellView::Mine,
                Cell::NeighborCount(count) if revealed => CellView::Revealed(count),
                _ => CellView::Hidden,
            };
        }

        Self {
            size,
            outcome,
            cells,
        }
    }

    pub fn cell(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_nd_index()]
    }
}

/// Numbers for the end-of-game panel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub outcome: Outcome,
    pub mines: CellCount,
    pub revealed: CellCount,
    pub duration_secs: u32,
}

impl Summary {
    pub fn from_engine<C: Clock>(engine: &GameEngine<C>) -> Self {
        Self {
            outcome: engine.outcome(),
            mines: engine.mine_count(),
            revealed: engine.revealed_count(),
            duration_secs: engine.duration(),
        }
    }
}
