//! Uniform-random baseline

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Error, Result,
    ports::{Agent, Game},
};

/// Random policy agent (baseline)
///
/// Samples uniformly from the legal actions each turn and keeps no memory
/// between calls.
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<G: Game> Agent<G> for RandomAgent {
    fn make_action(&mut self, state: &G::State, game: &G) -> Result<G::Action> {
        game.valid_actions(state)
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
