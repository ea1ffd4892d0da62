use crate::game_state::chess_types::{Piece, Square};

/// Everything needed to exactly reverse one board mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// Piece that stood on `from` before the move (pre-promotion identity).
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub promoted_to: Option<Piece>,
}

impl MoveRecord {
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}
