//! Canonical chess-rule constants.
//!
//! Starting layout and the side-dependent pawn geometry (direction, starting
//! row, promotion row) used by setup, move generation and promotion.

use crate::game_state::chess_types::{PieceKind, Side};

/// Back-rank order from column 0 to column 7, identical for both sides.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[inline]
pub const fn back_rank_row(side: Side) -> u8 {
    match side {
        Side::White => 7,
        Side::Black => 0,
    }
}

#[inline]
pub const fn pawn_start_row(side: Side) -> u8 {
    match side {
        Side::White => 6,
        Side::Black => 1,
    }
}

/// Row delta of a single pawn push.
#[inline]
pub const fn pawn_direction(side: Side) -> i8 {
    match side {
        Side::White => -1,
        Side::Black => 1,
    }
}

/// Farthest row from the pawn's start; reaching it promotes to a queen.
#[inline]
pub const fn promotion_row(side: Side) -> u8 {
    back_rank_row(side.opposite())
}
