//! Coordinate text conversions.
//!
//! Squares are written `<file><rank>` (`a`..`h`, `1`..`8`, rank 8 = row 0)
//! and moves as the two squares back to back, e.g. `e2e4`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{ChessMove, Square};

/// Parse a two-character square such as `e4`.
pub fn parse_square(text: &str) -> ChessResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidCoordinate(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidCoordinate(text.to_owned()));
    }

    Square::new(b'8' - rank, file - b'a').ok_or_else(|| ChessError::InvalidCoordinate(text.to_owned()))
}

#[inline]
pub fn square_to_coordinate(square: Square) -> String {
    square.to_string()
}

/// Parse exactly four characters `<file><rank><file><rank>`.
pub fn parse_move_text(text: &str) -> ChessResult<ChessMove> {
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessError::MalformedMoveText(text.to_owned()));
    }
    let from = parse_square(&text[0..2]).map_err(|_| ChessError::MalformedMoveText(text.to_owned()))?;
    let to = parse_square(&text[2..4]).map_err(|_| ChessError::MalformedMoveText(text.to_owned()))?;
    Ok(ChessMove::new(from, to))
}

/// Lenient form of `parse_move_text` for presentation code: malformed text
/// simply yields no move.
#[inline]
pub fn parse_coordinate_move(text: &str) -> Option<ChessMove> {
    parse_move_text(text).ok()
}
