//! PGN-style game transcripts.
//!
//! Moves are written in the same 4-character coordinate form the console
//! accepts (`e2e4`), so a transcript can be replayed move by move.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::game_state::chess_types::{GameState, GameStatus, Side};

pub const DEFAULT_EVENT: &str = "Casual Game";

/// Result token for the `Result` header and the end of the movetext.
pub const fn result_token(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Checkmate(Side::White) => "1-0",
        GameStatus::Checkmate(Side::Black) => "0-1",
        GameStatus::Stalemate => "1/2-1/2",
        GameStatus::InProgress => "*",
    }
}

/// Transcript of `state` dated today.
pub fn write_game_record(state: &GameState, white: &str, black: &str) -> String {
    write_game_record_on(state, white, black, Local::now().date_naive())
}

pub fn write_game_record_on(state: &GameState, white: &str, black: &str, date: NaiveDate) -> String {
    let mut headers = BTreeMap::<&str, String>::new();
    headers.insert("Event", DEFAULT_EVENT.to_owned());
    headers.insert("Date", date.format("%Y.%m.%d").to_string());
    headers.insert("White", white.to_owned());
    headers.insert("Black", black.to_owned());
    headers.insert("Result", result_token(state.status()).to_owned());

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_value(value)));
    }
    out.push('\n');
    out.push_str(&movetext(state));
    out.push('\n');
    out
}

fn movetext(state: &GameState) -> String {
    let log = state.move_log();
    // Side that made the first logged move.
    let first_mover = if log.len() % 2 == 0 {
        state.side_to_move()
    } else {
        state.side_to_move().opposite()
    };
    let offset = usize::from(first_mover == Side::Black);

    let mut parts = Vec::<String>::with_capacity(log.len() + 1);
    for (index, record) in log.iter().enumerate() {
        let ply = index + offset;
        let text = format!("{}{}", record.from, record.to);
        if ply % 2 == 0 {
            parts.push(format!("{}. {}", ply / 2 + 1, text));
        } else if index == 0 {
            parts.push(format!("{}... {}", ply / 2 + 1, text));
        } else {
            parts.push(text);
        }
    }
    parts.push(result_token(state.status()).to_owned());
    parts.join(" ")
}

fn escape_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Piece, PieceKind, Square};
    use crate::utils::coordinates::parse_coordinate_move;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date")
    }

    fn play(state: &mut GameState, moves: &[&str]) {
        for text in moves {
            let mv = parse_coordinate_move(text).expect("move should parse");
            state.make_move(mv).expect("move should be legal");
        }
    }

    #[test]
    fn fools_mate_transcript() {
        let mut state = GameState::new_game();
        play(&mut state, &["f2f3", "e7e5", "g2g4", "d8h4"]);

        let record = write_game_record_on(&state, "Alice", "Bob", date());
        assert_eq!(
            record,
            "[Black \"Bob\"]\n\
             [Date \"2024.03.09\"]\n\
             [Event \"Casual Game\"]\n\
             [Result \"0-1\"]\n\
             [White \"Alice\"]\n\
             \n\
             1. f2f3 e7e5 2. g2g4 d8h4 0-1\n"
        );
    }

    #[test]
    fn unfinished_game_ends_with_asterisk() {
        let mut state = GameState::new_game();
        play(&mut state, &["e2e4"]);
        let record = write_game_record_on(&state, "W", "B", date());
        assert!(record.ends_with("1. e2e4 *\n"));
        assert!(record.contains("[Result \"*\"]"));
    }

    #[test]
    fn black_first_move_uses_ellipsis_numbering() {
        let sq = |row, col| Square::new(row, col).expect("test square should be on the board");
        let mut board = Board::empty();
        board.set(sq(7, 4), Some(Piece::new(Side::White, PieceKind::King)));
        board.set(sq(0, 4), Some(Piece::new(Side::Black, PieceKind::King)));
        board.set(sq(1, 0), Some(Piece::new(Side::Black, PieceKind::Pawn)));
        let mut state = GameState::from_board(board, Side::Black);
        play(&mut state, &["a7a6", "e1d1"]);

        assert_eq!(movetext(&state), "1... a7a6 2. e1d1 *");
    }

    #[test]
    fn result_tokens_cover_every_status() {
        assert_eq!(result_token(GameStatus::Checkmate(Side::White)), "1-0");
        assert_eq!(result_token(GameStatus::Stalemate), "1/2-1/2");
        assert_eq!(escape_value("a \"b\""), "a \\\"b\\\"");
    }
}
