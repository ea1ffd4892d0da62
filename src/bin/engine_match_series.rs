//! Standalone tier-vs-tier series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`
//! `cargo run --release --bin engine_match_series -- 2 0` (player tiers)

use damson_chess::chess_errors::ChessResult;
use damson_chess::engines::engine_trait::Difficulty;
use damson_chess::utils::engine_match_harness::{
    play_match_series, MatchConfig, MatchSeriesConfig,
};
use tracing_subscriber::EnvFilter;

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");

    let mut tiers = args.iter().filter_map(|a| a.parse::<u8>().ok());
    let player1 = Difficulty::try_from(tiers.next().unwrap_or(2))?;
    let player2 = Difficulty::try_from(tiers.next().unwrap_or(1))?;

    let stats = play_match_series(MatchSeriesConfig {
        games: 10,
        base_seed: 1234,
        per_game: MatchConfig {
            max_plies: 200,
            white: player1,
            black: player2,
        },
        verbose,
    })?;

    println!("player1={player1:?} player2={player2:?}");
    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
