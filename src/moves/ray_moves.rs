//! Ray tracing for bishops, rooks and queens.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Side, Square};

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Walk from `from` along `(d_row, d_col)` until the edge or the first
/// occupied square. An occupied square is included only if it holds a piece
/// not owned by `side`.
pub fn trace_ray(board: &Board, side: Side, from: Square, d_row: i8, d_col: i8, out: &mut Vec<Square>) {
    let mut current = from.offset(d_row, d_col);
    while let Some(sq) = current {
        match board.piece_at(sq) {
            None => out.push(sq),
            Some(piece) => {
                if piece.side != side {
                    out.push(sq);
                }
                break;
            }
        }
        current = sq.offset(d_row, d_col);
    }
}

/// True if every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must share a row, column or diagonal.
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let step_row = (to.row() as i8 - from.row() as i8).signum();
    let step_col = (to.col() as i8 - from.col() as i8).signum();

    let mut current = from.offset(step_row, step_col);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if board.piece_at(sq).is_some() {
            return false;
        }
        current = sq.offset(step_row, step_col);
    }
    // Walked off the board without meeting `to`: not aligned.
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn ray_stops_at_blocker_and_includes_enemy() {
        let mut board = Board::empty();
        board.set(sq(4, 4), Some(Piece::new(Side::White, PieceKind::Rook)));
        board.set(sq(4, 6), Some(Piece::new(Side::Black, PieceKind::Pawn)));
        board.set(sq(2, 4), Some(Piece::new(Side::White, PieceKind::Pawn)));

        let mut east = Vec::new();
        trace_ray(&board, Side::White, sq(4, 4), 0, 1, &mut east);
        assert_eq!(east, vec![sq(4, 5), sq(4, 6)]);

        let mut north = Vec::new();
        trace_ray(&board, Side::White, sq(4, 4), -1, 0, &mut north);
        assert_eq!(north, vec![sq(3, 4)]);
    }

    #[test]
    fn path_clear_ignores_endpoints() {
        let mut board = Board::empty();
        board.set(sq(7, 2), Some(Piece::new(Side::White, PieceKind::Bishop)));
        board.set(sq(4, 5), Some(Piece::new(Side::Black, PieceKind::Knight)));
        assert!(path_is_clear(&board, sq(7, 2), sq(4, 5)));
        assert!(!path_is_clear(&board, sq(7, 2), sq(3, 6)));
    }
}
