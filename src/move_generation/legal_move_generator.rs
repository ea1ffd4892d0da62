//! Full legal move generation.
//!
//! Every origin holding a piece of the mover is paired with every square on
//! the board; a pair is kept when it passes the raw rules and, once simulated
//! on a scratch board, does not leave the mover's king attacked.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{ChessMove, Side, Square};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_rules::is_legal;

/// Strictly legal moves for `side`, origin-major then destination-major in
/// row-major square order. Empty means checkmate or stalemate.
pub fn generate_legal_moves(board: &Board, side: Side) -> Vec<ChessMove> {
    let mut scratch = *board;
    let origins: Vec<Square> = board
        .pieces()
        .filter(|(_, piece)| piece.side == side)
        .map(|(sq, _)| sq)
        .collect();

    let mut legal = Vec::with_capacity(64);
    for from in origins {
        for to in Square::all() {
            let mv = ChessMove::new(from, to);
            if is_legal(&scratch, mv, side) && leaves_king_safe(&mut scratch, mv, side) {
                legal.push(mv);
            }
        }
    }
    legal
}

/// Raw legality plus king safety for a single move.
pub fn is_strictly_legal(board: &Board, mv: ChessMove, side: Side) -> bool {
    let mut scratch = *board;
    is_legal(&scratch, mv, side) && leaves_king_safe(&mut scratch, mv, side)
}

/// Legal destinations for the piece on `from`; empty unless it belongs to `side`.
pub fn legal_destinations(board: &Board, from: Square, side: Side) -> Vec<Square> {
    if !board.piece_at(from).is_some_and(|piece| piece.side == side) {
        return Vec::new();
    }

    let mut scratch = *board;
    Square::all()
        .filter(|&to| {
            let mv = ChessMove::new(from, to);
            is_legal(&scratch, mv, side) && leaves_king_safe(&mut scratch, mv, side)
        })
        .collect()
}

#[inline]
fn leaves_king_safe(board: &mut Board, mv: ChessMove, side: Side) -> bool {
    board
        .with_simulated_move(mv, |after| !is_in_check(after, side))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};
    use crate::moves::piece_geometry::legal_geometry;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn starting_position_has_twenty_moves_for_each_side() {
        let board = Board::starting_position();
        assert_eq!(generate_legal_moves(&board, Side::White).len(), 20);
        assert_eq!(generate_legal_moves(&board, Side::Black).len(), 20);
    }

    #[test]
    fn pinned_piece_may_only_move_along_the_pin() {
        let mut board = Board::empty();
        board.set(sq(7, 4), Some(Piece::new(Side::White, PieceKind::King)));
        board.set(sq(5, 4), Some(Piece::new(Side::White, PieceKind::Rook)));
        board.set(sq(0, 4), Some(Piece::new(Side::Black, PieceKind::Rook)));
        board.set(sq(0, 0), Some(Piece::new(Side::Black, PieceKind::King)));

        let rook_moves = legal_destinations(&board, sq(5, 4), Side::White);
        assert!(rook_moves.iter().all(|to| to.col() == 4));
        assert!(rook_moves.contains(&sq(0, 4)));
        assert!(!rook_moves.contains(&sq(5, 0)));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut board = Board::empty();
        board.set(sq(7, 4), Some(Piece::new(Side::White, PieceKind::King)));
        board.set(sq(0, 3), Some(Piece::new(Side::Black, PieceKind::Rook)));
        board.set(sq(0, 7), Some(Piece::new(Side::Black, PieceKind::King)));

        let dests = legal_destinations(&board, sq(7, 4), Side::White);
        assert!(!dests.contains(&sq(7, 3)));
        assert!(!dests.contains(&sq(6, 3)));
        assert!(dests.contains(&sq(6, 4)));
    }

    #[test]
    fn destinations_are_empty_for_opponent_or_empty_square() {
        let board = Board::starting_position();
        assert!(legal_destinations(&board, sq(1, 4), Side::White).is_empty());
        assert!(legal_destinations(&board, sq(4, 4), Side::White).is_empty());
        assert_eq!(legal_destinations(&board, sq(6, 4), Side::White).len(), 2);
    }

    #[test]
    fn raw_rules_agree_with_enumerated_geometry() {
        let mut board = Board::starting_position();
        board.move_piece(sq(6, 4), sq(4, 4));
        board.move_piece(sq(1, 3), sq(3, 3));
        board.move_piece(sq(7, 5), sq(4, 1));

        for side in [Side::White, Side::Black] {
            for (from, piece) in board.pieces().filter(|(_, p)| p.side == side) {
                let mut enumerated = legal_geometry(&board, piece, from);
                enumerated.sort();
                let checked: Vec<Square> = Square::all()
                    .filter(|&to| is_legal(&board, ChessMove::new(from, to), side))
                    .collect();
                assert_eq!(enumerated, checked, "mismatch for {piece:?} on {from}");
            }
        }
    }

    #[test]
    fn generated_moves_match_strict_legality() {
        let mut board = Board::starting_position();
        board.move_piece(sq(6, 5), sq(5, 5));
        board.move_piece(sq(1, 4), sq(3, 4));
        board.move_piece(sq(0, 3), sq(4, 7));

        let generated = generate_legal_moves(&board, Side::White);
        for from in Square::all() {
            for to in Square::all() {
                let mv = ChessMove::new(from, to);
                assert_eq!(
                    generated.contains(&mv),
                    is_strictly_legal(&board, mv, Side::White),
                    "disagreement on {mv}"
                );
            }
        }
        // Black queen on h4 checks along the e1-h4 diagonal; only g2-g3 blocks.
        assert_eq!(generated.len(), 1);
    }
}
