//! Raw per-move legality: ownership, capture rules, piece geometry and path
//! blocking. King safety is deliberately not checked here so attack
//! detection can reuse these rules without recursing.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{ChessMove, Side};
use crate::moves::piece_geometry::geometry_permits;
use crate::moves::ray_moves::path_is_clear;

/// Check `mv` for `side` and report the first rule it breaks.
pub fn validate_raw_move(board: &Board, mv: ChessMove, side: Side) -> ChessResult<()> {
    if mv.from == mv.to {
        return Err(ChessError::IllegalMove(mv));
    }

    let piece = board
        .piece_at(mv.from)
        .ok_or(ChessError::EmptySquare(mv.from))?;
    if piece.side != side {
        return Err(ChessError::NotSideToMove {
            square: mv.from,
            side,
        });
    }

    if board.piece_at(mv.to).is_some_and(|target| target.side == side) {
        return Err(ChessError::IllegalMove(mv));
    }

    if !geometry_permits(board, piece, mv.from, mv.to) {
        return Err(ChessError::IllegalMove(mv));
    }

    if piece.kind.is_ray_piece() && !path_is_clear(board, mv.from, mv.to) {
        return Err(ChessError::IllegalMove(mv));
    }

    Ok(())
}

/// Raw legality of `from -> to` for `side`, ignoring king safety.
#[inline]
pub fn is_legal(board: &Board, mv: ChessMove, side: Side) -> bool {
    validate_raw_move(board, mv, side).is_ok()
}
