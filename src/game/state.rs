use tracing::debug;

use super::scoring::calculate_score;
use super::{Board, Player};
use crate::ai::select_opponent_move;
use crate::error::TurnError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Both players' scores, recomputed from the board after every move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    pub human: u32,
    pub opponent: u32,
}

impl Scores {
    pub fn of(board: &Board) -> Self {
        Scores {
            human: calculate_score(board, Player::Human),
            opponent: calculate_score(board, Player::Opponent),
        }
    }

    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::Human => self.human,
            Player::Opponent => self.opponent,
        }
    }

    /// Higher score wins once the board is full.
    pub fn outcome(&self) -> GameOutcome {
        match self.human.cmp(&self.opponent) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(Player::Human),
            std::cmp::Ordering::Less => GameOutcome::Winner(Player::Opponent),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        }
    }
}

/// One game session. The game only ends when the board is full.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    human_moves: usize,
    opponent_moves: usize,
    scores: Scores,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create a game where `first` moves first
    pub fn new(first: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: first,
            human_moves: 0,
            opponent_moves: 0,
            scores: Scores::default(),
            outcome: None,
        }
    }

    /// Create initial game state with the human to move
    pub fn initial() -> Self {
        Self::new(Player::Human)
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves `player` has made so far
    pub fn moves_made(&self, player: Player) -> usize {
        match player {
            Player::Human => self.human_moves,
            Player::Opponent => self.opponent_moves,
        }
    }

    /// Scores as of the last move
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Place the current player's mark at `(row, col)` and pass the turn.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<(), TurnError> {
        if self.is_terminal() {
            return Err(TurnError::GameOver);
        }

        let player = self.current_player;
        self.board.place(row, col, player)?;
        match player {
            Player::Human => self.human_moves += 1,
            Player::Opponent => self.opponent_moves += 1,
        }

        self.scores = Scores::of(&self.board);
        debug!(
            player = player.name(),
            row,
            col,
            human = self.scores.human,
            opponent = self.scores.opponent,
            "move applied"
        );

        if self.board.is_full() {
            self.outcome = Some(self.scores.outcome());
        }
        self.current_player = player.other();

        Ok(())
    }

    /// Let the built-in opponent pick and play its move. Returns the cell it took.
    pub fn opponent_turn(&mut self) -> Result<(usize, usize), TurnError> {
        if self.is_terminal() {
            return Err(TurnError::GameOver);
        }
        if self.current_player != Player::Opponent {
            return Err(TurnError::NotOpponentsTurn);
        }

        // A non-terminal board always has an empty cell.
        let (row, col) =
            select_opponent_move(&self.board, self.opponent_moves).ok_or(TurnError::GameOver)?;
        self.apply_move(row, col)?;
        Ok((row, col))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
