//! Game state machine.
//!
//! `GameState` owns the board, the side to move, the move log used for undo,
//! and the terminal status. The status is recomputed after every move and
//! cleared by every undo.

use tracing::{debug, info, trace};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{
    generate_legal_moves, is_strictly_legal, legal_destinations,
};
use crate::move_generation::legal_move_rules::validate_raw_move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Side,
    move_log: Vec<MoveRecord>,
    status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            side_to_move: Side::White,
            move_log: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Start from an arbitrary position. The status is computed immediately,
    /// so a constructed mate or stalemate is reported as such.
    ///
    /// # Panics
    /// If either king is missing from `board`.
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        let mut state = Self {
            board,
            side_to_move,
            move_log: Vec::new(),
            status: GameStatus::InProgress,
        };
        state.status = state.compute_status();
        state
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn winner(&self) -> Option<Winner> {
        self.status.winner()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[inline]
    pub fn move_log(&self) -> &[MoveRecord] {
        &self.move_log
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.move_log.last()
    }

    pub fn legal_moves(&self) -> Vec<ChessMove> {
        generate_legal_moves(&self.board, self.side_to_move)
    }

    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        legal_destinations(&self.board, from, self.side_to_move)
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        is_in_check(&self.board, self.side_to_move)
    }

    /// Play `mv` for the side to move.
    ///
    /// Rejected moves leave the state untouched. Terminal positions accept no
    /// further moves; only `undo_move` leaves them.
    pub fn make_move(&mut self, mv: ChessMove) -> ChessResult<MoveRecord> {
        if self.status.is_terminal() {
            return Err(ChessError::GameOver);
        }
        validate_raw_move(&self.board, mv, self.side_to_move)?;
        if !is_strictly_legal(&self.board, mv, self.side_to_move) {
            return Err(ChessError::IllegalMove(mv));
        }
        Ok(self.apply_legal_move(mv))
    }

    /// Apply a move already known to be legal. Used by search, which only
    /// plays moves taken from `legal_moves`.
    pub(crate) fn apply_legal_move(&mut self, mv: ChessMove) -> MoveRecord {
        let record = match self.board.apply(mv) {
            Some(record) => record,
            None => panic!("legal move {mv} has no piece on its origin"),
        };
        self.move_log.push(record);
        self.side_to_move = self.side_to_move.opposite();
        self.status = self.compute_status();

        trace!(%mv, captured = ?record.captured, promoted = record.promoted_to.is_some(), "move applied");
        if self.status.is_terminal() {
            info!(status = ?self.status, plies = self.move_log.len(), "game reached a terminal position");
        }
        record
    }

    /// Take back the last move and resume play.
    ///
    /// The status is forced back to `InProgress` rather than recomputed.
    pub fn undo_move(&mut self) -> ChessResult<MoveRecord> {
        let record = self.move_log.pop().ok_or(ChessError::EmptyMoveLog)?;
        self.board.revert(&record);
        self.side_to_move = self.side_to_move.opposite();
        self.status = GameStatus::InProgress;
        debug!(from = %record.from, to = %record.to, "move undone");
        Ok(record)
    }

    fn compute_status(&self) -> GameStatus {
        if !generate_legal_moves(&self.board, self.side_to_move).is_empty() {
            GameStatus::InProgress
        } else if is_in_check(&self.board, self.side_to_move) {
            GameStatus::Checkmate(self.side_to_move.opposite())
        } else {
            GameStatus::Stalemate
        }
    }
}
