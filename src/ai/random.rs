use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::error::EngineError;
use crate::game::GameState;

use super::agent::Agent;

/// Baseline opponent: drops into any open column with equal probability.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move sequence for tests and seeded matches.
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
    fn select_action(&mut self, state: &GameState) -> Result<usize, EngineError> {
        state
            .legal_actions()
            .choose(&mut self.rng)
            .copied()
            .ok_or(EngineError::NoLegalMove)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
