//! Boundary used by presentation code (console, GUI, ...).
//!
//! Every call runs to completion on the caller's thread. Failures come back
//! as plain values (`Rejected`, `false`, `None`), never as panics.

use tracing::debug;

use crate::engines::engine_trait::{create_engine, Difficulty};
use crate::game_state::chess_types::{ChessMove, GameState, GameStatus, Piece, Square};
use crate::utils::coordinates::parse_move_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    Applied {
        captured: Option<Piece>,
        promoted: bool,
    },
    Rejected,
}

impl AttemptOutcome {
    #[inline]
    pub const fn is_applied(self) -> bool {
        matches!(self, AttemptOutcome::Applied { .. })
    }
}

#[inline]
pub fn new_game() -> GameState {
    GameState::new_game()
}

/// Destinations for highlighting; empty unless `from` holds a piece of the
/// side to move.
#[inline]
pub fn legal_destinations(state: &GameState, from: Square) -> Vec<Square> {
    state.legal_destinations(from)
}

pub fn attempt_move(state: &mut GameState, from: Square, to: Square) -> AttemptOutcome {
    match state.make_move(ChessMove::new(from, to)) {
        Ok(record) => AttemptOutcome::Applied {
            captured: record.captured,
            promoted: record.promoted_to.is_some(),
        },
        Err(err) => {
            debug!(%from, %to, %err, "move rejected");
            AttemptOutcome::Rejected
        }
    }
}

/// Textual entry in coordinate form (`e2e4`). Anything other than exactly
/// four coordinate characters, surrounding whitespace included, is rejected
/// like an illegal move.
pub fn attempt_move_text(state: &mut GameState, text: &str) -> AttemptOutcome {
    match parse_move_text(text) {
        Ok(mv) => attempt_move(state, mv.from, mv.to),
        Err(err) => {
            debug!(%err, "move text rejected");
            AttemptOutcome::Rejected
        }
    }
}

/// Take back one move; `false` when there is nothing to undo.
#[inline]
pub fn undo(state: &mut GameState) -> bool {
    state.undo_move().is_ok()
}

#[inline]
pub fn status(state: &GameState) -> GameStatus {
    state.status()
}

/// Ask tier `tier` (0, 1 or 2) for a move. `None` for an unknown tier or a
/// finished game. The move is not applied.
pub fn request_ai_move(state: &GameState, tier: u8) -> Option<(Square, Square)> {
    let difficulty = match Difficulty::try_from(tier) {
        Ok(difficulty) => difficulty,
        Err(err) => {
            debug!(%err, "ai move request rejected");
            return None;
        }
    };
    let mut engine = create_engine(difficulty, None);
    engine.choose_move(state).map(|mv| (mv.from, mv.to))
}
