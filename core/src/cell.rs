use serde::{Deserialize, Serialize};

/// Value of a generated cell, fixed for the lifetime of a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Mine,
    NeighborCount(u8),
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Adjacent mine count, `None` for mines.
    pub const fn neighbor_count(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::NeighborCount(count) => Some(count),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::NeighborCount(0)
    }
}
