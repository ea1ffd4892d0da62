use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use damson_chess::game_state::chess_types::GameState;
use damson_chess::search::board_scoring::MaterialScorer;
use damson_chess::search::minimax::{search_best_move, SearchConfig};
use damson_chess::utils::coordinates::parse_coordinate_move;

struct SearchCase {
    name: &'static str,
    moves: &'static [&'static str],
}

const CASES: &[SearchCase] = &[
    SearchCase {
        name: "startpos",
        moves: &[],
    },
    SearchCase {
        name: "open_center",
        moves: &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "d2d4", "e5d4"],
    },
];

fn build_position(moves: &[&str]) -> GameState {
    let mut state = GameState::new_game();
    for text in moves {
        let mv = parse_coordinate_move(text).expect("benchmark move should parse");
        state.make_move(mv).expect("benchmark move should be legal");
    }
    state
}

fn bench_minimax(c: &mut Criterion) {
    let depth = std::env::var("DAMSON_SEARCH_DEPTH")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(2)
        .max(1);

    let mut group = c.benchmark_group("minimax_search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    let scorer = MaterialScorer;

    for case in CASES {
        let game = build_position(case.moves);
        group.bench_with_input(
            BenchmarkId::new(case.name, format!("d{depth}")),
            &game,
            |b, game| {
                let mut rng = StdRng::seed_from_u64(7);
                b.iter(|| {
                    let result = search_best_move(
                        black_box(game),
                        &scorer,
                        SearchConfig { depth },
                        &mut rng,
                    )
                    .expect("position should have legal moves");
                    black_box(result.nodes)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(search_benches, bench_minimax);
criterion_main!(search_benches);
