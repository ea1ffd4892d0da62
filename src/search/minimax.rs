//! Fixed-depth minimax without pruning.
//!
//! White maximises, Black minimises. Each candidate is played on a private
//! copy of the game with make/undo, so the caller's state is never touched.
//! Root moves are shuffled first and the first move reaching the best score
//! wins, which breaks ties randomly; inner nodes only need the extremal
//! value and keep generation order.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::game_state::chess_types::{ChessMove, GameState, Side};
use crate::search::board_scoring::{terminal_score, BoardScorer};

pub const DEFAULT_SEARCH_DEPTH: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched from the root; values below 1 are treated as 1.
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: ChessMove,
    /// White-relative score of `best_move`.
    pub score: i32,
    pub nodes: u64,
}

/// Pick the best move for the side to move, or `None` when the game is over.
pub fn search_best_move<S: BoardScorer, R: Rng + ?Sized>(
    game_state: &GameState,
    scorer: &S,
    config: SearchConfig,
    rng: &mut R,
) -> Option<SearchResult> {
    if game_state.is_game_over() {
        return None;
    }

    let mut root_moves = game_state.legal_moves();
    if root_moves.is_empty() {
        return None;
    }
    root_moves.shuffle(rng);

    let depth = config.depth.max(1);
    let maximizing = game_state.side_to_move() == Side::White;
    let mut working = game_state.clone();
    let mut nodes = 0u64;
    let mut best: Option<(ChessMove, i32)> = None;

    for mv in root_moves {
        working.apply_legal_move(mv);
        let score = minimax(&mut working, scorer, depth - 1, &mut nodes);
        undo_search_move(&mut working);

        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((mv, score));
        }
    }

    let (best_move, score) = best?;
    debug!(%best_move, score, nodes, depth, "minimax search finished");
    Some(SearchResult {
        best_move,
        score,
        nodes,
    })
}

/// White-relative value of `game_state` searched `depth` plies deep.
pub fn minimax<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    depth: u8,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if let Some(score) = terminal_score(game_state.status()) {
        return score;
    }
    if depth == 0 {
        return scorer.score(game_state.board());
    }

    let maximizing = game_state.side_to_move() == Side::White;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in game_state.legal_moves() {
        game_state.apply_legal_move(mv);
        let score = minimax(game_state, scorer, depth - 1, nodes);
        undo_search_move(game_state);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

#[inline]
fn undo_search_move(game_state: &mut GameState) {
    if game_state.undo_move().is_err() {
        panic!("search undo found an empty move log");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Piece, PieceKind, Square};
    use crate::search::board_scoring::{MaterialScorer, BLACK_WINS_SCORE, WHITE_WINS_SCORE};
    use crate::utils::coordinates::parse_coordinate_move;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    /// White: Kg1-ish back-rank mate setup. Rook a1 to a8 mates the black
    /// king on h8 boxed in by its own pawns.
    fn back_rank_mate_position() -> GameState {
        let mut board = Board::empty();
        board.set(sq(0, 7), Some(Piece::new(Side::Black, PieceKind::King)));
        board.set(sq(1, 6), Some(Piece::new(Side::Black, PieceKind::Pawn)));
        board.set(sq(1, 7), Some(Piece::new(Side::Black, PieceKind::Pawn)));
        board.set(sq(7, 0), Some(Piece::new(Side::White, PieceKind::Rook)));
        board.set(sq(7, 6), Some(Piece::new(Side::White, PieceKind::King)));
        GameState::from_board(board, Side::White)
    }

    #[test]
    fn finds_mate_in_one_at_depth_one_and_two() {
        let state = back_rank_mate_position();
        let mate = parse_coordinate_move("a1a8").expect("move should parse");

        for depth in [1, 2] {
            let mut rng = StdRng::seed_from_u64(u64::from(depth));
            let result = search_best_move(&state, &MaterialScorer, SearchConfig { depth }, &mut rng)
                .expect("a move should be found");
            assert_eq!(result.best_move, mate, "depth {depth}");
            assert_eq!(result.score, WHITE_WINS_SCORE);
        }
    }

    #[test]
    fn black_finds_fools_mate() {
        let mut state = GameState::new_game();
        for text in ["f2f3", "e7e5", "g2g4"] {
            let mv = parse_coordinate_move(text).expect("move should parse");
            state.make_move(mv).expect("move should be legal");
        }

        let mut rng = StdRng::seed_from_u64(7);
        let result = search_best_move(&state, &MaterialScorer, SearchConfig::default(), &mut rng)
            .expect("a move should be found");
        assert_eq!(result.best_move, parse_coordinate_move("d8h4").expect("move should parse"));
        assert_eq!(result.score, BLACK_WINS_SCORE);
    }

    #[test]
    fn search_does_not_mutate_caller_state() {
        let state = GameState::new_game();
        let before = state.clone();
        let mut rng = StdRng::seed_from_u64(3);
        let result = search_best_move(&state, &MaterialScorer, SearchConfig::default(), &mut rng)
            .expect("a move should be found");
        assert_eq!(state, before);
        assert!(state.legal_moves().contains(&result.best_move));
        assert_eq!(result.score, 0);
        assert!(result.nodes > 400);
    }

    #[test]
    fn takes_the_free_queen() {
        let mut board = Board::empty();
        board.set(sq(0, 0), Some(Piece::new(Side::Black, PieceKind::King)));
        board.set(sq(3, 3), Some(Piece::new(Side::Black, PieceKind::Queen)));
        board.set(sq(7, 3), Some(Piece::new(Side::White, PieceKind::Rook)));
        board.set(sq(7, 7), Some(Piece::new(Side::White, PieceKind::King)));
        let state = GameState::from_board(board, Side::White);

        let mut rng = StdRng::seed_from_u64(11);
        let result = search_best_move(&state, &MaterialScorer, SearchConfig::default(), &mut rng)
            .expect("a move should be found");
        assert_eq!(result.best_move, parse_coordinate_move("d1d5").expect("move should parse"));
    }

    #[test]
    fn no_move_once_the_game_is_over() {
        let mut board = Board::empty();
        board.set(sq(0, 0), Some(Piece::new(Side::Black, PieceKind::King)));
        board.set(sq(1, 2), Some(Piece::new(Side::White, PieceKind::Queen)));
        board.set(sq(2, 2), Some(Piece::new(Side::White, PieceKind::King)));
        let state = GameState::from_board(board, Side::Black);

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            search_best_move(&state, &MaterialScorer, SearchConfig::default(), &mut rng),
            None
        );
    }

    #[test]
    fn root_ties_are_broken_differently_across_seeds() {
        let state = GameState::new_game();
        let chosen: std::collections::HashSet<ChessMove> = (0..8)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                search_best_move(&state, &MaterialScorer, SearchConfig::default(), &mut rng)
                    .expect("a move should be found")
                    .best_move
            })
            .collect();
        assert!(chosen.len() > 1);
    }
}
