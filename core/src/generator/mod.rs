use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Board;
}

/// Generates a fresh board of side `size` seeded from the thread-local RNG.
///
/// `size` ranges over `1..=255`, the span of [`Coord`]; 0 is rejected with
/// [`GameError::InvalidDimension`].
pub fn generate(size: Coord) -> Result<Board> {
    use rand::Rng;

    let config = GameConfig::new(size)?;
    let seed = rand::rng().random();
    Ok(RandomBoardGenerator::new(seed).generate(config))
}
