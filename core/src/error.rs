use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimension must be at least 1")]
    InvalidDimension,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Mine placed twice on the same cell")]
    DuplicateMine,
}

pub type Result<T> = core::result::Result<T, GameError>;
