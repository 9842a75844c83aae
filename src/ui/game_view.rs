use crate::game::{Board, Cell, GameState, Player, SIZE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    cursor: (usize, usize),
    message: &Option<String>,
    opponent_name: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, opponent_name, chunks[0]);
    render_board(frame, game_state.board(), cursor, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Human => Color::Cyan,
        Player::Opponent => Color::Magenta,
    }
}

fn render_header(
    frame: &mut Frame,
    game_state: &GameState,
    opponent_name: &str,
    area: ratatui::layout::Rect,
) {
    let scores = game_state.scores();
    let current_player = game_state.current_player();

    let turn = if game_state.is_terminal() {
        "Game Over".to_string()
    } else {
        format!("To move: {}", current_player.name())
    };
    let status = format!(
        "Player (X): {}  |  Computer (O, {}): {}  |  {}",
        scores.human, opponent_name, scores.opponent, turn
    );

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(player_color(current_player))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Pahtum"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    cursor: (usize, usize),
    area: ratatui::layout::Rect,
) {
    let mut lines = Vec::new();

    // Column numbers
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..SIZE {
        let style = if col == cursor.1 {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        col_line.push(Span::styled(format!(" {col} "), style));
    }
    lines.push(Line::from(col_line));

    for row in 0..SIZE {
        let row_style = if row == cursor.0 {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let mut row_spans = vec![Span::styled(format!(" {row} "), row_style)];

        for col in 0..SIZE {
            let cell = board.get(row, col);
            let color = match cell {
                Cell::Empty => Color::DarkGray,
                Cell::Human => player_color(Player::Human),
                Cell::Opponent => player_color(Player::Opponent),
            };
            let mut style = Style::default().fg(color);
            if (row, col) == cursor {
                style = style.bg(Color::White).add_modifier(Modifier::BOLD);
            }
            row_spans.push(Span::styled(format!(" {} ", cell.symbol()), style));
        }

        lines.push(Line::from(row_spans));
    }

    let board_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from("Arrows/hjkl: Move  |  Enter: Place  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_shows_scores_and_marks() {
        let mut state = GameState::initial();
        for col in 0..3 {
            state.apply_move(0, col).unwrap();
            state.apply_move(6, col).unwrap();
        }

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| render(f, &state, (3, 3), &Some("hello".to_string()), "Heuristic"))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Player (X): 3"));
        assert!(text.contains("Computer (O, Heuristic): 3"));
        assert!(text.contains(" X  X  X "));
        assert!(text.contains(" O  O  O "));
        assert!(text.contains("hello"));
    }
}
