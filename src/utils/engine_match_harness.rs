//! Head-to-head engine matches for local testing.
//!
//! Two `Engine` implementations play from the start position until the game
//! ends or the ply cap is reached. Every proposed move is checked against the
//! legal move list before it is applied.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{create_engine, Difficulty, Engine};
use crate::game_state::chess_types::{ChessMove, GameState, GameStatus, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWinCheckmate { player: PlayerId, side: Side },
    DrawStalemate,
    DrawMaxPlies,
}

/// One game between two tiers. In a series `white` is player 1 and `black`
/// is player 2 before colours are drawn.
#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub white: Difficulty,
    pub black: Difficulty,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            white: Difficulty::Minimax,
            black: Difficulty::Greedy,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves: Vec<ChessMove>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play one game between the tiers named in `config`, seeding both engines
/// from `seed`.
pub fn play_tier_match(config: MatchConfig, seed: u64) -> ChessResult<MatchResult> {
    let mut white = create_engine(config.white, Some(seed));
    let mut black = create_engine(config.black, Some(seed.rotate_left(32) ^ 0x9E37_79B9));
    play_engine_match(white.as_mut(), black.as_mut(), config.max_plies)
}

/// Play a single engine-vs-engine game from the start position.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    max_plies: u16,
) -> ChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let mut state = GameState::new_game();
    let mut played_moves = Vec::<ChessMove>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    let outcome = loop {
        match state.status() {
            GameStatus::Checkmate(Side::White) => break MatchOutcome::WhiteWinCheckmate,
            GameStatus::Checkmate(Side::Black) => break MatchOutcome::BlackWinCheckmate,
            GameStatus::Stalemate => break MatchOutcome::DrawStalemate,
            GameStatus::InProgress => {}
        }
        if played_moves.len() >= usize::from(max_plies) {
            break MatchOutcome::DrawMaxPlies;
        }

        let mover = state.side_to_move();
        let started = Instant::now();
        let chosen = match mover {
            Side::White => engine_white.choose_move(&state),
            Side::Black => engine_black.choose_move(&state),
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Side::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Side::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let engine_name = match mover {
            Side::White => engine_white.name(),
            Side::Black => engine_black.name(),
        };
        let Some(chosen) = chosen else {
            return Err(ChessError::EngineFailure(format!(
                "{engine_name} returned no move in a live position"
            )));
        };
        if state.make_move(chosen).is_err() {
            return Err(ChessError::EngineFailure(format!(
                "{engine_name} returned illegal move {chosen}"
            )));
        }
        debug!(%mover, mv = %chosen, "match move");
        played_moves.push(chosen);
    };

    info!(?outcome, plies = played_moves.len(), "match finished");
    Ok(MatchResult {
        outcome,
        final_state: state,
        played_moves,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Play a series of tier matches and aggregate win/loss/draw statistics.
///
/// Player colours are randomized each game (deterministic from `base_seed`).
pub fn play_match_series(config: MatchSeriesConfig) -> ChessResult<MatchSeriesStats> {
    let player1 = config.per_game.white;
    let player2 = config.per_game.black;
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let (white, black) = if player1_is_white {
            (player1, player2)
        } else {
            (player2, player1)
        };
        if config.verbose {
            println!(
                "[series] game {}/{} seed={} white={:?} black={:?}",
                i + 1,
                config.games,
                seed,
                white,
                black
            );
        }

        let result = play_tier_match(
            MatchConfig {
                white,
                black,
                ..config.per_game
            },
            seed,
        )?;

        let (p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.black_move_count,
                result.white_total_time_ns,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.white_move_count,
                result.black_total_time_ns,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let mapped = match result.outcome {
            MatchOutcome::WhiteWinCheckmate | MatchOutcome::BlackWinCheckmate => {
                let side = if result.outcome == MatchOutcome::WhiteWinCheckmate {
                    Side::White
                } else {
                    Side::Black
                };
                let player = if player1_is_white == (side == Side::White) {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWinCheckmate { player, side }
            }
            MatchOutcome::DrawStalemate => {
                stats.draws += 1;
                SeriesOutcome::DrawStalemate
            }
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            println!(
                "[series] game {}/{} result={:?} p1_wins={} p2_wins={} draws={}\n",
                i + 1,
                config.games,
                mapped,
                stats.player1_wins,
                stats.player2_wins,
                stats.draws
            );
        }
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    info!(report = %stats.report(), "series finished");
    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}
