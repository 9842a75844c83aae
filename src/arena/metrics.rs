use std::collections::VecDeque;

use crate::game::Player;

use super::game::GameRecord;

/// Arena results with rolling window computations.
pub struct ArenaMetrics {
    records: VecDeque<GameRecord>,
    capacity: usize,
    total_games: usize, // lifetime count, never capped
}

impl ArenaMetrics {
    pub fn with_capacity(capacity: usize) -> Self {
        ArenaMetrics {
            records: VecDeque::with_capacity(capacity),
            capacity,
            total_games: 0,
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(1000)
    }

    pub fn record_game(&mut self, record: GameRecord) {
        self.total_games += 1;
        self.records.push_back(record);
        if self.records.len() > self.capacity {
            self.records.pop_front();
        }
    }

    fn recent(&self, last_n: usize) -> impl Iterator<Item = &GameRecord> + '_ {
        self.records.iter().rev().take(last_n)
    }

    fn window(&self, last_n: usize) -> usize {
        self.records.len().min(last_n)
    }

    /// Fraction of the last N games won by `player`.
    pub fn win_rate(&self, player: Player, last_n: usize) -> f32 {
        let n = self.window(last_n);
        if n == 0 {
            return 0.0;
        }
        let wins = self
            .recent(n)
            .filter(|r| r.winner() == Some(player))
            .count();
        wins as f32 / n as f32
    }

    /// Draw rate in the last N games.
    pub fn draw_rate(&self, last_n: usize) -> f32 {
        let n = self.window(last_n);
        if n == 0 {
            return 0.0;
        }
        let draws = self.recent(n).filter(|r| r.winner().is_none()).count();
        draws as f32 / n as f32
    }

    /// Average final score of `player` over the last N games.
    pub fn average_score(&self, player: Player, last_n: usize) -> f32 {
        let n = self.window(last_n);
        if n == 0 {
            return 0.0;
        }
        let total: u32 = self.recent(n).map(|r| r.scores.get(player)).sum();
        total as f32 / n as f32
    }

    pub fn total_games(&self) -> usize {
        self.total_games
    }
}

impl Default for ArenaMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameOutcome, Scores};

    fn record(human: u32, opponent: u32) -> GameRecord {
        let scores = Scores { human, opponent };
        GameRecord {
            outcome: scores.outcome(),
            scores,
            first: Player::Human,
            game_length: 49,
        }
    }

    #[test]
    fn test_empty_metrics() {
        let metrics = ArenaMetrics::new();
        assert_eq!(metrics.win_rate(Player::Opponent, 10), 0.0);
        assert_eq!(metrics.draw_rate(10), 0.0);
        assert_eq!(metrics.average_score(Player::Human, 10), 0.0);
        assert_eq!(metrics.total_games(), 0);
    }

    #[test]
    fn test_rates() {
        let mut metrics = ArenaMetrics::new();
        metrics.record_game(record(10, 3));
        metrics.record_game(record(3, 13));
        metrics.record_game(record(6, 6));
        metrics.record_game(record(0, 25));

        assert!((metrics.win_rate(Player::Opponent, 4) - 0.5).abs() < 1e-6);
        assert!((metrics.win_rate(Player::Human, 4) - 0.25).abs() < 1e-6);
        assert!((metrics.draw_rate(4) - 0.25).abs() < 1e-6);
        assert!((metrics.average_score(Player::Opponent, 4) - 11.75).abs() < 1e-6);
        // Window of the last two games only.
        assert!((metrics.win_rate(Player::Opponent, 2) - 0.5).abs() < 1e-6);
        assert!((metrics.draw_rate(2) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_capacity_caps_window_not_total() {
        let mut metrics = ArenaMetrics::with_capacity(2);
        metrics.record_game(record(10, 0));
        metrics.record_game(record(0, 10));
        metrics.record_game(record(0, 10));

        assert_eq!(metrics.total_games(), 3);
        assert_eq!(metrics.win_rate(Player::Human, 10), 0.0);
        assert_eq!(metrics.win_rate(Player::Opponent, 10), 1.0);
    }

    #[test]
    fn test_record_outcome_matches_scores() {
        assert_eq!(record(1, 0).outcome, GameOutcome::Winner(Player::Human));
        assert_eq!(record(0, 0).outcome, GameOutcome::Draw);
    }
}
