//! Per-kind movement geometry.
//!
//! Every piece kind maps to one `MovePattern` through a single `match`; the
//! board context (occupancy, captures, blocking) is applied on top of it by
//! `legal_geometry` and `geometry_permits`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::moves::pawn_moves::{pawn_destinations, pawn_move_permitted};
use crate::moves::ray_moves::{trace_ray, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePattern {
    /// Side-dependent pushes and diagonal captures.
    Pawn,
    /// Single jumps; nothing in between can block.
    Steps(&'static [(i8, i8)]),
    /// Unbounded slides along each direction until blocked.
    Rays(&'static [(i8, i8)]),
}

#[inline]
pub const fn movement_pattern(kind: PieceKind) -> MovePattern {
    match kind {
        PieceKind::Pawn => MovePattern::Pawn,
        PieceKind::Knight => MovePattern::Steps(&KNIGHT_OFFSETS),
        PieceKind::Bishop => MovePattern::Rays(&BISHOP_DIRECTIONS),
        PieceKind::Rook => MovePattern::Rays(&ROOK_DIRECTIONS),
        PieceKind::Queen => MovePattern::Rays(&QUEEN_DIRECTIONS),
        PieceKind::King => MovePattern::Steps(&KING_OFFSETS),
    }
}

/// Candidate destinations for `piece` on `from`, filtered against the
/// board's occupancy but not against king safety.
pub fn legal_geometry(board: &Board, piece: Piece, from: Square) -> Vec<Square> {
    match movement_pattern(piece.kind) {
        MovePattern::Pawn => pawn_destinations(board, piece.side, from),
        MovePattern::Steps(offsets) => offsets
            .iter()
            .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
            .filter(|&to| !matches!(board.piece_at(to), Some(other) if other.side == piece.side))
            .collect(),
        MovePattern::Rays(directions) => {
            let mut out = Vec::with_capacity(27);
            for &(d_row, d_col) in directions {
                trace_ray(board, piece.side, from, d_row, d_col, &mut out);
            }
            out
        }
    }
}

/// Whether the shape of `from -> to` fits the piece's geometry.
///
/// Pawns consult the board (pushes need empty squares, captures need an
/// opposing piece). Sliders are only checked for alignment here; the caller
/// checks the path.
pub fn geometry_permits(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    let d_row = (to.row() as i8 - from.row() as i8).abs();
    let d_col = (to.col() as i8 - from.col() as i8).abs();

    match piece.kind {
        PieceKind::Pawn => pawn_move_permitted(board, piece.side, from, to),
        PieceKind::Knight => (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2),
        PieceKind::Bishop => d_row == d_col && d_row != 0,
        PieceKind::Rook => (d_row == 0) != (d_col == 0),
        PieceKind::Queen => (d_row == d_col && d_row != 0) || ((d_row == 0) != (d_col == 0)),
        PieceKind::King => d_row.max(d_col) == 1,
    }
}
