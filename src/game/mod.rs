//! Core game logic: the 7x7 board, players, chain scoring and the game
//! session that alternates turns until the board is full.

mod board;
mod player;
pub mod scoring;
mod state;

pub use board::{Board, Cell, SIZE};
pub use player::Player;
pub use scoring::{calculate_score, chain_score, position_score, potential_win};
pub use state::{GameOutcome, GameState, Scores};
