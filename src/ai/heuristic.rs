use tracing::debug;

use crate::game::{position_score, potential_win, Board, GameState, Player};

use super::agent::Agent;

/// Opening cell, and the fallback when it is already taken.
const CENTER: (usize, usize) = (3, 3);
const ABOVE_CENTER: (usize, usize) = (2, 3);

/// Bonus for cells where the rival would complete a run of four.
const BLOCK_BONUS: i32 = 100;

/// Pick the built-in opponent's next cell. `move_count` is how many moves
/// the opponent has already made. Returns `None` only on a full board.
pub fn select_opponent_move(board: &Board, move_count: usize) -> Option<(usize, usize)> {
    select_move_for(board, move_count, Player::Opponent)
}

/// Greedy single-ply move choice for `me`.
///
/// The first move takes the center, or the cell above it. After that, any
/// cell where the rival would reach four in a row is blocked at once
/// (row-major, first found). Otherwise every empty cell is scored by
/// [`position_score`] plus [`BLOCK_BONUS`] when it also stops a rival four,
/// and the first strictly best cell wins.
pub fn select_move_for(board: &Board, move_count: usize, me: Player) -> Option<(usize, usize)> {
    let rival = me.other();

    if move_count == 0 {
        for (row, col) in [CENTER, ABOVE_CENTER] {
            if board.is_empty(row, col) {
                debug!(player = me.name(), row, col, "opening move");
                return Some((row, col));
            }
        }
    }

    if let Some((row, col)) = board
        .empty_cells()
        .find(|&(row, col)| potential_win(board, row, col, rival))
    {
        debug!(player = me.name(), row, col, "blocking rival four");
        return Some((row, col));
    }

    let mut best_score = -1;
    let mut best = None;
    for (row, col) in board.empty_cells() {
        let mut score = position_score(board, row, col, me) as i32;
        if potential_win(board, row, col, rival) {
            score += BLOCK_BONUS;
        }
        if score > best_score {
            best_score = score;
            best = Some((row, col));
        }
    }

    if best.is_some() {
        debug!(player = me.name(), ?best, best_score, "greedy move");
        return best;
    }

    board.empty_cells().next()
}

/// Agent wrapper around [`select_move_for`], playing whichever side is to move.
pub struct HeuristicAgent;

impl HeuristicAgent {
    pub fn new() -> Self {
        HeuristicAgent
    }
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for HeuristicAgent {
    fn select_move(&mut self, state: &GameState) -> Option<(usize, usize)> {
        let me = state.current_player();
        select_move_for(state.board(), state.moves_made(me), me)
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}
