use crate::ai::Agent;
use crate::error::TurnError;
use crate::game::{GameOutcome, GameState, Player, SIZE};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::{info, warn};

pub struct App {
    game_state: GameState,
    /// `None` plays the engine's own opponent through [`GameState::opponent_turn`].
    opponent: Option<Box<dyn Agent>>,
    first_player: Player,
    cursor: (usize, usize),
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(opponent: Option<Box<dyn Agent>>, first_player: Player) -> Self {
        let mut app = App {
            game_state: GameState::new(first_player),
            opponent,
            first_player,
            cursor: (3, 3), // Start in middle
            should_quit: false,
            message: None,
        };
        app.play_opponent();
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;
        let (row, col) = self.cursor;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor.0 = row.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor.0 = (row + 1).min(SIZE - 1);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor.1 = col.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cursor.1 = (col + 1).min(SIZE - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_mark();
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        self.game_state = GameState::new(self.first_player);
        self.cursor = (3, 3);
        self.message = Some("New game started!".to_string());
        info!("game restarted");
        self.play_opponent();
    }

    /// Place the human's mark under the cursor, then let the computer answer
    fn place_mark(&mut self) {
        if !self.game_state.is_terminal() && self.game_state.current_player() != Player::Human {
            self.message = Some("Waiting for the computer to move.".to_string());
            self.play_opponent();
            return;
        }

        let (row, col) = self.cursor;
        match self.game_state.apply_move(row, col) {
            Ok(()) => self.play_opponent(),
            Err(TurnError::Move(err)) => {
                self.message = Some(format!("Invalid move: {err}"));
            }
            Err(TurnError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(TurnError::NotOpponentsTurn) => {}
        }
    }

    /// Play the computer's move if it is its turn, and report the result when the board fills up
    fn play_opponent(&mut self) {
        if !self.game_state.is_terminal() && self.game_state.current_player() == Player::Opponent {
            let result = match self.opponent.as_mut() {
                None => self.game_state.opponent_turn().map(|_| ()),
                Some(agent) => match agent.select_move(&self.game_state) {
                    Some((row, col)) => self.game_state.apply_move(row, col),
                    None => Err(TurnError::GameOver),
                },
            };
            if let Err(err) = result {
                warn!(%err, "opponent move rejected");
                self.message = Some(format!("Computer move failed: {err}"));
            }
        }

        if let Some(outcome) = self.game_state.outcome() {
            let scores = self.game_state.scores();
            info!(human = scores.human, opponent = scores.opponent, ?outcome, "game over");
            self.message = Some(match outcome {
                GameOutcome::Winner(Player::Human) => "You win!".to_string(),
                GameOutcome::Winner(Player::Opponent) => "Computer wins!".to_string(),
                GameOutcome::Draw => "It's a draw!".to_string(),
            });
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.cursor,
            &self.message,
            self.opponent_name(),
        );
    }

    fn opponent_name(&self) -> &str {
        self.opponent.as_ref().map_or("Heuristic", |agent| agent.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomAgent;
    use crate::game::Cell;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_opponent_opens_when_first() {
        let app = App::new(None, Player::Opponent);
        assert_eq!(app.game_state.board().get(3, 3), Cell::Opponent);
        assert_eq!(app.game_state.current_player(), Player::Human);
    }

    #[test]
    fn test_place_then_opponent_answers() {
        let mut app = App::new(None, Player::Human);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game_state.board().get(2, 2), Cell::Human);
        assert_eq!(app.game_state.board().get(3, 3), Cell::Opponent);
        assert_eq!(app.game_state.current_player(), Player::Human);
    }

    #[test]
    fn test_occupied_cell_reports_message() {
        let mut app = App::new(None, Player::Opponent);
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.message.as_deref(),
            Some("Invalid move: cell (3, 3) is already occupied")
        );
        assert_eq!(app.game_state.current_player(), Player::Human);
    }

    /// Always asks for the centre, so every later move is rejected.
    struct CenterOnlyAgent;

    impl Agent for CenterOnlyAgent {
        fn select_move(&mut self, _state: &GameState) -> Option<(usize, usize)> {
            Some((3, 3))
        }

        fn name(&self) -> &str {
            "CenterOnly"
        }
    }

    #[test]
    fn test_rejected_computer_move_blocks_human_input() {
        let mut app = App::new(Some(Box::new(CenterOnlyAgent)), Player::Opponent);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        // Human took (2, 3); the agent's (3, 3) is refused and it keeps the turn.
        assert_eq!(app.game_state.current_player(), Player::Opponent);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state.board().get(1, 3), Cell::Empty);
        assert_eq!(app.game_state.moves_made(Player::Human), 1);
        assert_eq!(app.game_state.moves_made(Player::Opponent), 1);
        assert_eq!(
            app.message.as_deref(),
            Some("Computer move failed: cell (3, 3) is already occupied")
        );
    }

    #[test]
    fn test_agent_opponent_answers() {
        let mut app = App::new(Some(Box::new(RandomAgent::with_seed(4))), Player::Human);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state.current_player(), Player::Human);
        assert_eq!(app.game_state.moves_made(Player::Opponent), 1);
        assert_eq!(app.opponent_name(), "Random");
    }

    #[test]
    fn test_cursor_stays_on_board() {
        let mut app = App::new(None, Player::Human);
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.cursor, (6, 6));
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('k'));
            press(&mut app, KeyCode::Char('h'));
        }
        assert_eq!(app.cursor, (0, 0));
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new(None, Player::Human);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game_state, GameState::new(Player::Human));

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_full_game_reports_result() {
        let mut app = App::new(None, Player::Human);
        while !app.game_state.is_terminal() {
            let cell = app.game_state.board().empty_cells().next().unwrap();
            app.cursor = cell;
            press(&mut app, KeyCode::Enter);
        }

        let expected = match app.game_state.outcome().unwrap() {
            GameOutcome::Winner(Player::Human) => "You win!",
            GameOutcome::Winner(Player::Opponent) => "Computer wins!",
            GameOutcome::Draw => "It's a draw!",
        };
        assert_eq!(app.message.as_deref(), Some(expected));
    }
}
