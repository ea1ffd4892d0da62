//! Static evaluation.
//!
//! Scores are always from White's point of view: positive favours White.
//! Search stays independent of the heuristic by going through `BoardScorer`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{GameStatus, Side};

/// Score of a position White has won. Stands in for +infinity.
pub const WHITE_WINS_SCORE: i32 = i32::MAX;
/// Score of a position Black has won. Stands in for -infinity.
pub const BLACK_WINS_SCORE: i32 = -i32::MAX;

pub trait BoardScorer: Send + Sync {
    fn score(&self, board: &Board) -> i32;
}

/// Sum of White's piece values minus the sum of Black's.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        board
            .pieces()
            .map(|(_, piece)| match piece.side {
                Side::White => piece.value(),
                Side::Black => -piece.value(),
            })
            .sum()
    }
}

/// Fixed score of a finished game, `None` while play continues.
#[inline]
pub fn terminal_score(status: GameStatus) -> Option<i32> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Checkmate(Side::White) => Some(WHITE_WINS_SCORE),
        GameStatus::Checkmate(Side::Black) => Some(BLACK_WINS_SCORE),
        GameStatus::Stalemate => Some(0),
    }
}
