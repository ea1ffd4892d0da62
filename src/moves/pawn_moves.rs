//! Pawn movement: pushes, the double step from the starting row, and
//! diagonal captures. Direction depends on the pawn's side.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{pawn_direction, pawn_start_row};
use crate::game_state::chess_types::{Side, Square};

/// Squares a pawn of `side` on `from` threatens, occupied or not.
pub fn pawn_attacks(side: Side, from: Square) -> impl Iterator<Item = Square> {
    let dir = pawn_direction(side);
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| from.offset(dir, d_col))
}

/// Whether pawn geometry allows `from -> to` on the current board.
pub fn pawn_move_permitted(board: &Board, side: Side, from: Square, to: Square) -> bool {
    let dir = pawn_direction(side);
    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;
    let target = board.piece_at(to);

    if d_col == 0 {
        if target.is_some() {
            return false;
        }
        if d_row == dir {
            return true;
        }
        if d_row == 2 * dir && from.row() == pawn_start_row(side) {
            return from
                .offset(dir, 0)
                .is_some_and(|mid| board.piece_at(mid).is_none());
        }
        return false;
    }

    d_row == dir && d_col.abs() == 1 && target.is_some_and(|piece| piece.side != side)
}

/// Destinations reachable by a pawn of `side` on `from`: pushes onto empty
/// squares and captures onto opposing pieces.
pub fn pawn_destinations(board: &Board, side: Side, from: Square) -> Vec<Square> {
    let dir = pawn_direction(side);
    let mut out = Vec::with_capacity(4);

    if let Some(one) = from.offset(dir, 0) {
        if board.piece_at(one).is_none() {
            out.push(one);
            if from.row() == pawn_start_row(side) {
                if let Some(two) = one.offset(dir, 0) {
                    if board.piece_at(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }

    for to in pawn_attacks(side, from) {
        if board.piece_at(to).is_some_and(|piece| piece.side != side) {
            out.push(to);
        }
    }

    out
}
