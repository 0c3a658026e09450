use crate::Agent;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use skak_core::{GameState, Move};

/// Plays a uniformly random move.
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// An agent seeded from the operating system.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy(), "Random".to_string())
    }

    /// An agent whose choices are reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed), format!("Random(seed={})", seed))
    }

    fn from_rng(rng: StdRng, name: String) -> Self {
        RandomAgent { name, rng }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, state: &GameState) -> Option<Move> {
        // The whole candidate list is built before choosing, so every move is equally likely.
        let moves = state.candidate_moves();
        moves.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
