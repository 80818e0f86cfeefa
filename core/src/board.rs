use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Generated square board: every cell's value plus the list of mine coordinates.
///
/// A board never changes after it is built. Per-game progress lives in [`GameEngine`].
///
/// Serialized as its size and mine list; deserializing rebuilds the cells through
/// [`Board::from_mine_coords`], so malformed layouts are rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardLayout", into = "BoardLayout")]
pub struct Board {
    cells: Array2<Cell>,
    mines: Vec<Coord2>,
}

impl Board {
    /// Builds a board from an explicit mine layout.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidDimension);
        }

        let mut mine_mask: Array2<bool> = Array2::default((size, size).to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::InvalidCoords);
            }
            let slot = &mut mine_mask[coords.to_nd_index()];
            if *slot {
                return Err(GameError::DuplicateMine);
            }
            *slot = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    /// Computes neighbor counts for a square mine mask.
    pub(crate) fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let dim = mine_mask.dim();
        debug_assert_eq!(dim.0, dim.1, "boards are square");
        // dimensions always come from a Coord
        let size = dim.0 as Coord;

        let mines: Vec<Coord2> = mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((x, y), _)| (x as Coord, y as Coord))
            .collect();

        let cells = Array2::from_shape_fn(dim, |(x, y)| {
            let coords = (x as Coord, y as Coord);
            if mine_mask[coords.to_nd_index()] {
                Cell::Mine
            } else {
                let count = Neighbors::new(coords, size)
                    .filter(|&pos| mine_mask[pos.to_nd_index()])
                    .count();
                Cell::NeighborCount(count as u8)
            }
        });

        Self { cells, mines }
    }

    pub fn size(&self) -> Coord {
        self.cells.dim().0 as Coord
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn total_cells(&self) -> CellCount {
        square(self.size())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    /// Mine coordinates, sorted by `x` then `y`.
    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.cell_at(coords).is_mine()
    }

    /// All cells with their coordinates, `x` major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((x, y), &cell)| ((x as Coord, y as Coord), cell))
    }
}

#[derive(Serialize, Deserialize)]
struct BoardLayout {
    size: Coord,
    mines: Vec<Coord2>,
}

impl From<Board> for BoardLayout {
    fn from(board: Board) -> Self {
        Self {
            size: board.size(),
            mines: board.mines,
        }
    }
}

impl TryFrom<BoardLayout> for Board {
    type Error = GameError;

    fn try_from(layout: BoardLayout) -> Result<Self> {
        Board::from_mine_coords(layout.size, &layout.mines)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
