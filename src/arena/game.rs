use crate::ai::Agent;
use crate::game::{GameOutcome, GameState, Player, Scores};

/// Result of one finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub scores: Scores,
    pub first: Player,
    pub game_length: usize,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            GameOutcome::Winner(p) => Some(p),
            GameOutcome::Draw => None,
        }
    }
}

/// Play one full game. `human_side` moves for [`Player::Human`],
/// `opponent_side` for [`Player::Opponent`].
pub fn play_game(
    human_side: &mut dyn Agent,
    opponent_side: &mut dyn Agent,
    first: Player,
) -> GameRecord {
    let mut state = GameState::new(first);
    let mut game_length = 0;

    while !state.is_terminal() {
        let player = state.current_player();
        let agent: &mut dyn Agent = match player {
            Player::Human => &mut *human_side,
            Player::Opponent => &mut *opponent_side,
        };
        let Some((row, col)) = agent.select_move(&state) else {
            break;
        };
        state.apply_move(row, col).unwrap_or_else(|e| {
            panic!("{} agent chose an illegal cell ({row}, {col}): {e}", agent.name())
        });
        game_length += 1;
    }

    let scores = state.scores();
    GameRecord {
        outcome: state.outcome().unwrap_or_else(|| scores.outcome()),
        scores,
        first,
        game_length,
    }
}
