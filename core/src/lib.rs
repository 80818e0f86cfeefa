//! Rules engine for a single-player mine-finding puzzle on a square grid.
//!
//! A [`Board`] is generated once per game (see [`generate`] and [`RandomBoardGenerator`]) and
//! handed to a [`GameEngine`], which tracks revealed cells, the [`Outcome`] and the game timing.
//! [`Session`] ties both together for a front end that offers size presets and a "new game"
//! button, and [`BoardView`]/[`Summary`] are the snapshots such a front end renders.

pub use board::*;
pub use cell::*;
pub use clock::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;
pub use view::*;

mod board;
mod cell;
mod clock;
mod config;
mod engine;
mod error;
mod generator;
mod session;
mod types;
mod view;
