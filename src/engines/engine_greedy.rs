//! Tier 1: take the most valuable capture on offer.
//!
//! Moves are scored by the value of the piece they capture (0 for quiet
//! moves) and one of the top-scoring moves is drawn at random. With no
//! capture available every move ties at 0.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::{ChessMove, GameState};

pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self { rng }
    }

    #[inline]
    fn capture_value(game_state: &GameState, mv: ChessMove) -> i32 {
        game_state
            .board()
            .piece_at(mv.to)
            .map_or(0, |captured| captured.value())
    }

    /// Legal moves sharing the highest capture value, with that value.
    pub fn best_captures(game_state: &GameState) -> (i32, Vec<ChessMove>) {
        let mut best_value = i32::MIN;
        let mut best_moves = Vec::new();

        for mv in game_state.legal_moves() {
            let value = Self::capture_value(game_state, mv);
            if value > best_value {
                best_value = value;
                best_moves.clear();
                best_moves.push(mv);
            } else if value == best_value {
                best_moves.push(mv);
            }
        }

        (best_value, best_moves)
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Option<ChessMove> {
        if game_state.is_game_over() {
            return None;
        }

        let (capture_value, candidates) = Self::best_captures(game_state);
        debug!(capture_value, candidates = candidates.len(), "greedy engine choosing");
        candidates.as_slice().choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Piece, PieceKind, Side, Square};
    use crate::utils::coordinates::parse_coordinate_move;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn prefers_the_queen_over_a_pawn() {
        // White rook e4 can take a pawn on e7 or a queen on b4.
        let mut board = Board::empty();
        board.set(sq(7, 7), Some(Piece::new(Side::White, PieceKind::King)));
        board.set(sq(4, 4), Some(Piece::new(Side::White, PieceKind::Rook)));
        board.set(sq(1, 4), Some(Piece::new(Side::Black, PieceKind::Pawn)));
        board.set(sq(4, 1), Some(Piece::new(Side::Black, PieceKind::Queen)));
        board.set(sq(0, 0), Some(Piece::new(Side::Black, PieceKind::King)));
        let state = GameState::from_board(board, Side::White);

        let (value, candidates) = GreedyEngine::best_captures(&state);
        assert_eq!(value, 9);
        assert_eq!(
            candidates,
            vec![parse_coordinate_move("e4b4").expect("move should parse")]
        );

        for seed in 0..10 {
            let mut engine = GreedyEngine::with_rng(StdRng::seed_from_u64(seed));
            assert_eq!(engine.choose_move(&state), Some(candidates[0]));
        }
    }

    #[test]
    fn without_captures_every_move_is_a_candidate() {
        let state = GameState::new_game();
        let (value, candidates) = GreedyEngine::best_captures(&state);
        assert_eq!(value, 0);
        assert_eq!(candidates.len(), 20);
    }
}
