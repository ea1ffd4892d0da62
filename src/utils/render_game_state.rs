//! Terminal-oriented Unicode board renderer.
//!
//! Row 0 (rank 8) is printed first, so White sits at the bottom.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Side, Square};

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for (row, squares) in board_rows(board).enumerate() {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for (col, piece) in squares.iter().enumerate() {
            match piece {
                Some(piece) => out.push(piece_to_unicode(*piece)),
                None => out.push('·'),
            }
            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn board_rows(board: &Board) -> impl Iterator<Item = [Option<Piece>; 8]> + '_ {
    (0..8u8).map(move |row| {
        let mut squares = [None; 8];
        for (col, slot) in squares.iter_mut().enumerate() {
            *slot = Square::new(row, col as u8).and_then(|sq| board.piece_at(sq));
        }
        squares
    })
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.side, piece.kind) {
        (Side::White, PieceKind::Pawn) => '♙',
        (Side::White, PieceKind::Knight) => '♘',
        (Side::White, PieceKind::Bishop) => '♗',
        (Side::White, PieceKind::Rook) => '♖',
        (Side::White, PieceKind::Queen) => '♕',
        (Side::White, PieceKind::King) => '♔',
        (Side::Black, PieceKind::Pawn) => '♟',
        (Side::Black, PieceKind::Knight) => '♞',
        (Side::Black, PieceKind::Bishop) => '♝',
        (Side::Black, PieceKind::Rook) => '♜',
        (Side::Black, PieceKind::Queen) => '♛',
        (Side::Black, PieceKind::King) => '♚',
    }
}
