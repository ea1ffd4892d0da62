//! Errors used throughout the engine.
//!
//! Input-shaped variants (`InvalidCoordinate`, `MalformedMoveText`,
//! `InvalidDifficulty`) are meant for display to a user. Rule variants
//! (`IllegalMove`, `NotSideToMove`, `GameOver`, ...) reject a request without
//! touching the game. Broken internal invariants are not represented here;
//! they panic.

use thiserror::Error;

use crate::game_state::chess_types::{ChessMove, Side, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A square outside the board or a malformed two-character coordinate.
    #[error("invalid coordinate: {0:?}")]
    InvalidCoordinate(String),

    /// Move text that is not exactly `<file><rank><file><rank>`.
    #[error("malformed move text: {0:?}")]
    MalformedMoveText(String),

    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("piece on {square} does not belong to {side}")]
    NotSideToMove { square: Square, side: Side },

    #[error("illegal move {0}")]
    IllegalMove(ChessMove),

    #[error("game is already over")]
    GameOver,

    #[error("no moves to undo")]
    EmptyMoveLog,

    #[error("invalid difficulty {0}, expected 0, 1 or 2")]
    InvalidDifficulty(u8),

    #[error("engine failure: {0}")]
    EngineFailure(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
