//! Tier 2: fixed-depth material minimax.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::{ChessMove, GameState};
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::minimax::{search_best_move, SearchConfig};

pub struct MinimaxEngine<S: BoardScorer = MaterialScorer> {
    scorer: S,
    config: SearchConfig,
    rng: StdRng,
}

impl MinimaxEngine<MaterialScorer> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            scorer: MaterialScorer,
            config: SearchConfig::default(),
            rng,
        }
    }
}

impl Default for MinimaxEngine<MaterialScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(scorer: S, config: SearchConfig, rng: StdRng) -> Self {
        Self { scorer, config, rng }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Option<ChessMove> {
        search_best_move(game_state, &self.scorer, self.config, &mut self.rng)
            .map(|result| result.best_move)
    }
}
