//! Move selection: the greedy opponent heuristic and a random baseline,
//! both behind the [`Agent`] trait.

mod agent;
mod heuristic;
mod random;

pub use agent::Agent;
pub use heuristic::{select_move_for, select_opponent_move, HeuristicAgent};
pub use random::RandomAgent;
