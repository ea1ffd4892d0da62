//! Crate root module declarations for the Damson Chess rules engine.
//!
//! This file exposes the subsystems (game state, move legality, search,
//! engines, the presentation boundary, and utility helpers) so binaries,
//! benches, and external front ends can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod move_record;
}

pub mod moves {
    pub mod pawn_moves;
    pub mod piece_geometry;
    pub mod ray_moves;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_rules;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod interface {
    pub mod game_interface;
}

pub mod utils {
    pub mod coordinates;
    pub mod engine_match_harness;
    pub mod game_record;
    pub mod render_game_state;
}
