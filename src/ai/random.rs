use crate::game::GameState;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that picks uniformly among the empty cells.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for tests and seeded arena runs.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, state: &GameState) -> Option<(usize, usize)> {
        state.board().empty_cells().choose(&mut self.rng)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
