use crate::game_state::board::Board;
use crate::game_state::chess_types::{ChessMove, Piece, PieceKind, Side, Square};
use crate::move_generation::legal_move_rules::is_legal;
use crate::moves::pawn_moves::pawn_attacks;

/// Location of `side`'s king.
///
/// # Panics
/// If the king is missing. Check detection is meaningless without it, so a
/// missing king is a move-application bug rather than a game condition.
#[inline]
pub fn king_square(board: &Board, side: Side) -> Square {
    match board.find_king(side) {
        Some(sq) => sq,
        None => panic!("{side} king missing from board"),
    }
}

#[inline]
pub fn is_in_check(board: &Board, side: Side) -> bool {
    is_square_attacked(board, king_square(board, side), side.opposite())
}

/// True if any `attacker` piece could move onto `square` under raw geometry
/// and blocking rules. Pawns attack their diagonals whether or not the
/// target is occupied.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Side) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.side == attacker)
        .any(|(from, piece)| attacks(board, from, piece, square))
}

#[inline]
fn attacks(board: &Board, from: Square, piece: Piece, square: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.side, from).any(|target| target == square),
        _ => is_legal(board, ChessMove::new(from, square), piece.side),
    }
}
