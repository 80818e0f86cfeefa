use rand::prelude::*;

use crate::*;

/// Current board size plus the game being played on it.
///
/// Changing the size or asking for a new game always generates a fresh board and resets the
/// engine. Board seeds are drawn from a session-owned RNG, so a session built with
/// [`Session::with_seed`] replays the same sequence of boards.
#[derive(Clone, Debug)]
pub struct Session<C: Clock = SystemClock> {
    config: GameConfig,
    rng: SmallRng,
    engine: GameEngine<C>,
}

impl Session {
    pub fn new(size: Coord) -> Result<Self> {
        Self::with_seed(size, rand::rng().random(), SystemClock)
    }

    pub fn with_preset(preset: Preset) -> Self {
        Self::from_config(preset.config(), rand::rng().random(), SystemClock)
    }
}

impl<C: Clock> Session<C> {
    pub fn with_seed(size: Coord, seed: u64, clock: C) -> Result<Self> {
        Ok(Self::from_config(GameConfig::new(size)?, seed, clock))
    }

    fn from_config(config: GameConfig, seed: u64, clock: C) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = RandomBoardGenerator::new(rng.random()).generate(config);
        Self {
            config,
            rng,
            engine: GameEngine::with_clock(board, clock),
        }
    }

    /// Throws away the current game and starts another one at the same size.
    pub fn new_game(&mut self) {
        let seed = self.rng.random();
        let size = self.config.size();
        log::debug!("new {}x{} game, board seed: {}", size, size, seed);
        let board = RandomBoardGenerator::new(seed).generate(self.config);
        self.engine.reset(board);
    }

    pub fn set_size(&mut self, size: Coord) -> Result<()> {
        self.config = GameConfig::new(size)?;
        self.new_game();
        Ok(())
    }

    pub fn set_preset(&mut self, preset: Preset) {
        self.config = preset.config();
        self.new_game();
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<Outcome> {
        self.engine.reveal(coords)
    }

    pub fn size(&self) -> Coord {
        self.config.size()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Preset matching the current size, if any.
    pub fn preset(&self) -> Option<Preset> {
        Preset::from_size(self.config.size())
    }

    pub fn engine(&self) -> &GameEngine<C> {
        &self.engine
    }

    pub fn view(&self) -> BoardView {
        BoardView::from_engine(&self.engine)
    }

    pub fn summary(&self) -> Summary {
        Summary::from_engine(&self.engine)
    }
}
