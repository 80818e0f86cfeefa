use serde::{Deserialize, Serialize};

use crate::*;

/// Share of the board covered by mines, in percent.
pub const MINE_RATIO_PERCENT: CellCount = 15;

/// `floor(size² × 0.15)`, computed without floating point.
pub const fn mine_count_for(size: Coord) -> CellCount {
    // widen so 255² × 15 does not overflow
    let cells = square(size) as u32;
    (cells * MINE_RATIO_PERCENT as u32 / 100) as CellCount
}

/// Validated board size together with its mine count.
///
/// Only [`GameConfig::new`] and [`Preset::config`] build one, so the mine count always follows
/// the fixed ratio.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    size: Coord,
    mines: CellCount,
}

impl GameConfig {
    pub fn new(size: Coord) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidDimension);
        }
        Ok(Self::for_size(size))
    }

    const fn for_size(size: Coord) -> Self {
        Self {
            size,
            mines: mine_count_for(size),
        }
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl From<Preset> for GameConfig {
    fn from(preset: Preset) -> Self {
        preset.config()
    }
}

/// Board sizes offered to players.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    #[default]
    Small,
    Medium,
    Large,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Small, Preset::Medium, Preset::Large];

    pub const fn size(self) -> Coord {
        match self {
            Self::Small => 8,
            Self::Medium => 9,
            Self::Large => 16,
        }
    }

    pub const fn config(self) -> GameConfig {
        GameConfig::for_size(self.size())
    }

    pub fn from_size(size: Coord) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.size() == size)
    }
}
