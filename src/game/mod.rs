//! Core game logic: board representation, player tokens, and the turn-taking
//! state machine with win and draw detection.

mod board;
mod player;
mod state;

pub use board::{Board, Cell};
pub use player::Player;
pub use state::{GameState, MoveError, MoveOutcome, Phase};
