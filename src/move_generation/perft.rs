use std::thread;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{GameState, Side};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count move paths of length `depth` from `game_state`, with statistics for
/// the final move of each path.
pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut board = *game_state.board();
    let mut total = PerftCounts::default();
    perft_recurse(&mut board, game_state.side_to_move(), depth, &mut total);
    total
}

/// `perft` with one worker per root move, each on its own board copy.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth <= 1 {
        return perft(game_state, depth);
    }

    let side = game_state.side_to_move();
    let root = *game_state.board();
    let root_moves = generate_legal_moves(&root, side);

    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .into_iter()
            .map(|mv| {
                scope.spawn(move || {
                    let mut board = root;
                    let mut local = PerftCounts::default();
                    if board.apply(mv).is_some() {
                        perft_recurse(&mut board, side.opposite(), depth - 1, &mut local);
                    }
                    local
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        total
    })
}

fn perft_recurse(board: &mut Board, side: Side, depth: u8, counts: &mut PerftCounts) {
    for mv in generate_legal_moves(board, side) {
        let Some(record) = board.apply(mv) else {
            continue;
        };

        if depth == 1 {
            counts.nodes += 1;
            if record.is_capture() {
                counts.captures += 1;
            }
            if record.promoted_to.is_some() {
                counts.promotions += 1;
            }
            if is_in_check(board, side.opposite()) {
                counts.checks += 1;
                if generate_legal_moves(board, side.opposite()).is_empty() {
                    counts.checkmates += 1;
                }
            }
        } else {
            perft_recurse(board, side.opposite(), depth - 1, counts);
        }

        board.revert(&record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind, Square};

    #[test]
    fn perft_depth_zero_counts_single_node() {
        assert_eq!(
            perft(&GameState::new_game(), 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_matches_reference_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).nodes, 20);
        assert_eq!(perft(&game, 2).nodes, 400);

        let depth_three = perft(&game, 3);
        assert_eq!(
            depth_three,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn threaded_perft_agrees_with_single_threaded() {
        let game = GameState::new_game();
        assert_eq!(perft_multi_threaded(&game, 3), perft(&game, 3));
    }

    #[test]
    fn promotions_are_counted() {
        let sq = |row, col| Square::new(row, col).expect("test square should be on the board");
        let mut board = Board::empty();
        board.set(sq(1, 0), Some(Piece::new(Side::White, PieceKind::Pawn)));
        board.set(sq(7, 4), Some(Piece::new(Side::White, PieceKind::King)));
        board.set(sq(2, 7), Some(Piece::new(Side::Black, PieceKind::King)));
        let game = GameState::from_board(board, Side::White);

        let counts = perft(&game, 1);
        // a7-a8=Q plus five king moves.
        assert_eq!(counts.nodes, 6);
        assert_eq!(counts.promotions, 1);
    }
}
