//! Mailbox board: an 8x8 grid of optional pieces.
//!
//! The board does not validate legality. Its only mutation primitives are
//! `move_piece` / `apply` and their exact inverse `revert`, so every change
//! made during search or king-safety filtering can be undone.

use crate::game_state::chess_rules::{back_rank_row, pawn_start_row, promotion_row, BACK_RANK};
use crate::game_state::chess_types::{ChessMove, Piece, PieceKind, Side, Square};
use crate::game_state::move_record::MoveRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for side in [Side::White, Side::Black] {
            let back = back_rank_row(side);
            let pawns = pawn_start_row(side);
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.squares[back as usize][col] = Some(Piece::new(side, *kind));
                board.squares[pawns as usize][col] = Some(Piece::new(side, PieceKind::Pawn));
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn find_king(&self, side: Side) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| *piece == Piece::new(side, PieceKind::King))
            .map(|(sq, _)| sq)
    }

    /// Relocate whatever stands on `from` to `to`, overwriting `to`.
    ///
    /// Returns `(moved, captured)`: the former occupants of `from` and `to`.
    pub fn move_piece(&mut self, from: Square, to: Square) -> (Option<Piece>, Option<Piece>) {
        let moved = self.piece_at(from);
        let captured = self.piece_at(to);
        self.set(from, None);
        self.set(to, moved);
        (moved, captured)
    }

    /// Move a piece and auto-queen a pawn that reaches its promotion row.
    ///
    /// Returns `None` (and leaves the board untouched) if `from` is empty.
    pub fn apply(&mut self, mv: ChessMove) -> Option<MoveRecord> {
        let moved = self.piece_at(mv.from)?;
        let (_, captured) = self.move_piece(mv.from, mv.to);

        let promoted_to = if moved.kind == PieceKind::Pawn && mv.to.row() == promotion_row(moved.side)
        {
            let queen = Piece::new(moved.side, PieceKind::Queen);
            self.set(mv.to, Some(queen));
            Some(queen)
        } else {
            None
        };

        Some(MoveRecord {
            from: mv.from,
            to: mv.to,
            moved,
            captured,
            promoted_to,
        })
    }

    /// Exact inverse of `apply`: restores the pre-promotion piece on `from`
    /// and the captured piece (or emptiness) on `to`.
    pub fn revert(&mut self, record: &MoveRecord) {
        self.set(record.from, Some(record.moved));
        self.set(record.to, record.captured);
    }

    /// Apply `mv`, run `inspect` on the resulting position, then revert.
    ///
    /// The board is restored before this returns on every path. `None` if
    /// `from` is empty.
    pub fn with_simulated_move<R>(
        &mut self,
        mv: ChessMove,
        inspect: impl FnOnce(&Board) -> R,
    ) -> Option<R> {
        let record = self.apply(mv)?;
        let result = inspect(self);
        self.revert(&record);
        Some(result)
    }
}
