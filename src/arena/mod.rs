//! Headless series of games between two agents, used to measure the
//! greedy opponent against a random baseline.

mod game;
mod metrics;

pub use game::{play_game, GameRecord};
pub use metrics::ArenaMetrics;

use tracing::info;

use crate::ai::Agent;
use crate::config::ArenaConfig;
use crate::game::Player;

/// Runs `num_games` games and keeps score.
pub struct Arena {
    config: ArenaConfig,
}

impl Arena {
    pub fn new(config: ArenaConfig) -> Self {
        Arena { config }
    }

    /// Which side opens game `index` (0-based).
    fn first_player(&self, index: usize, first: Player) -> Player {
        if self.config.alternate_first && index % 2 == 1 {
            first.other()
        } else {
            first
        }
    }

    /// Play the full series. `human_side` always moves as [`Player::Human`].
    pub fn run(
        &self,
        human_side: &mut dyn Agent,
        opponent_side: &mut dyn Agent,
        first: Player,
    ) -> ArenaMetrics {
        let mut metrics = ArenaMetrics::with_capacity(self.config.num_games);
        let total = self.config.num_games;

        info!(
            games = total,
            human_side = human_side.name(),
            opponent_side = opponent_side.name(),
            "starting arena"
        );

        for index in 0..total {
            let record = play_game(human_side, opponent_side, self.first_player(index, first));
            metrics.record_game(record);

            let played = index + 1;
            if played % self.config.log_interval == 0 || played == total {
                let window = self.config.log_interval;
                info!(
                    "Game {}/{} | {} win({}): {:.1}% | {} win: {:.1}% | draw: {:.1}% | avg score {:.1} vs {:.1}",
                    played,
                    total,
                    opponent_side.name(),
                    window,
                    metrics.win_rate(Player::Opponent, window) * 100.0,
                    human_side.name(),
                    metrics.win_rate(Player::Human, window) * 100.0,
                    metrics.draw_rate(window) * 100.0,
                    metrics.average_score(Player::Opponent, window),
                    metrics.average_score(Player::Human, window),
                );
            }
        }

        metrics
    }
}
