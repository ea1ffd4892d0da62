//! Engine abstraction shared by the three strength tiers.
//!
//! Engines read a `GameState` and propose a move; they never modify it.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessError;
use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::game_state::chess_types::{ChessMove, GameState};

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Move for the side to move, or `None` if the game is over.
    fn choose_move(&mut self, game_state: &GameState) -> Option<ChessMove>;
}

/// Strength tier, numbered 0..=2 at the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Random,
    Greedy,
    Minimax,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Random, Difficulty::Greedy, Difficulty::Minimax];

    #[inline]
    pub const fn tier(self) -> u8 {
        match self {
            Difficulty::Random => 0,
            Difficulty::Greedy => 1,
            Difficulty::Minimax => 2,
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = ChessError;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        match tier {
            0 => Ok(Difficulty::Random),
            1 => Ok(Difficulty::Greedy),
            2 => Ok(Difficulty::Minimax),
            other => Err(ChessError::InvalidDifficulty(other)),
        }
    }
}

/// Build the engine for `difficulty`. A seed makes its choices reproducible.
pub fn create_engine(difficulty: Difficulty, seed: Option<u64>) -> Box<dyn Engine> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    match difficulty {
        Difficulty::Random => Box::new(RandomEngine::with_rng(rng)),
        Difficulty::Greedy => Box::new(GreedyEngine::with_rng(rng)),
        Difficulty::Minimax => Box::new(MinimaxEngine::with_rng(rng)),
    }
}
