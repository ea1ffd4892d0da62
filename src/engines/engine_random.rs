//! Tier 0: uniform choice among legal moves.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::{ChessMove, GameState};

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Option<ChessMove> {
        if game_state.is_game_over() {
            return None;
        }

        let legal_moves = game_state.legal_moves();
        debug!(legal_moves = legal_moves.len(), "random engine choosing");
        legal_moves.as_slice().choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_engines_repeat_their_choices() {
        let state = GameState::new_game();
        let mut a = RandomEngine::with_rng(StdRng::seed_from_u64(99));
        let mut b = RandomEngine::with_rng(StdRng::seed_from_u64(99));
        for _ in 0..5 {
            assert_eq!(a.choose_move(&state), b.choose_move(&state));
        }
    }

    #[test]
    fn random_choices_cover_more_than_one_move() {
        let state = GameState::new_game();
        let mut engine = RandomEngine::with_rng(StdRng::seed_from_u64(1));
        let mut seen = std::collections::HashSet::new();
        for _ in 0..50 {
            seen.insert(engine.choose_move(&state).expect("start position has moves"));
        }
        assert!(seen.len() > 1);
    }
}
