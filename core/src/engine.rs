use chrono::{DateTime, Utc};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// Indicates the game has ended and no reveals are accepted anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Reveal state of one game on one board.
///
/// The engine owns the board it plays on, the set of revealed cells and the start and end
/// timestamps. Every game starts through [`GameEngine::new`] or [`GameEngine::reset`], so there is
/// no way to reveal a cell before a board exists.
#[derive(Clone, Debug)]
pub struct GameEngine<C: Clock = SystemClock> {
    board: Board,
    revealed: Array2<bool>,
    revealed_count: CellCount,
    outcome: Outcome,
    triggered_mine: Option<Coord2>,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    clock: C,
}

impl GameEngine {
    pub fn new(board: Board) -> Self {
        Self::with_clock(board, SystemClock)
    }
}

impl<C: Clock> GameEngine<C> {
    pub fn with_clock(board: Board, clock: C) -> Self {
        let size = board.size();
        let started_at = clock.now();
        let engine = Self {
            board,
            revealed: Array2::default((size, size).to_nd_index()),
            revealed_count: 0,
            outcome: Outcome::InProgress,
            triggered_mine: None,
            started_at,
            ended_at: None,
            clock,
        };
        engine.log_started();
        engine
    }

    /// Starts a new game on `board`, which may have a different size than the previous one.
    pub fn reset(&mut self, board: Board) {
        let size = board.size();
        self.board = board;
        self.revealed = Array2::default((size, size).to_nd_index());
        self.revealed_count = 0;
        self.outcome = Outcome::InProgress;
        self.triggered_mine = None;
        self.started_at = self.clock.now();
        self.ended_at = None;
        self.log_started();
    }

    /// Reveals a single cell and returns the resulting outcome.
    ///
    /// Revealing an already revealed cell, or any cell after the game ended, changes nothing and
    /// returns the current outcome. Neighbors of a zero cell are not opened.
    pub fn reveal(&mut self, coords: Coord2) -> Result<Outcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.outcome.is_finished() || self.revealed[coords.to_nd_index()] {
            log::trace!("ignored reveal at {:?}, outcome: {:?}", coords, self.outcome);
            return Ok(self.outcome);
        }

        self.revealed[coords.to_nd_index()] = true;
        self.revealed_count += 1;

        match self.board.cell_at(coords) {
            Cell::Mine => {
                log::trace!("revealed mine at {:?}", coords);
                self.triggered_mine = Some(coords);
                self.end_game(Outcome::Lost);
            }
            Cell::NeighborCount(count) => {
                log::trace!("revealed cell at {:?}, mine count: {}", coords, count);
                if self.revealed_count == self.board.safe_cell_count() {
                    self.end_game(Outcome::Won);
                }
            }
        }

        Ok(self.outcome)
    }

    /// Whole seconds between start and end of the game, 0 while it is still in progress.
    pub fn duration(&self) -> u32 {
        self.ended_at.map_or(0, |ended_at| {
            (ended_at - self.started_at)
                .num_seconds()
                .clamp(0, u32::MAX.into()) as u32
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord {
        self.board.size()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn mine_count(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// Out-of-bounds coordinates are never revealed.
    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.board
            .validate_coords(coords)
            .is_ok_and(|coords| self.revealed[coords.to_nd_index()])
    }

    pub fn revealed_cells(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.revealed
            .indexed_iter()
            .filter(|&(_, &revealed)| revealed)
            .map(|((x, y), _)| (x as Coord, y as Coord))
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    fn end_game(&mut self, outcome: Outcome) {
        if self.outcome.is_finished() {
            return;
        }

        self.outcome = outcome;
        let now = self.clock.now();
        self.ended_at.replace(now);
        log::debug!(
            "game ended at {}, outcome: {:?}, duration: {}s",
            now,
            outcome,
            self.duration()
        );
    }

    fn log_started(&self) {
        log::debug!(
            "started {}x{} game with {} mines at {}",
            self.board.size(),
            self.board.size(),
            self.board.mine_count(),
            self.started_at
        );
    }
}
