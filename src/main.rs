//! Console front end: a human plays White against another human or one of
//! the three engine tiers.

use std::io::{self, BufRead, Write};

use damson_chess::engines::engine_trait::Difficulty;
use damson_chess::game_state::chess_types::{GameState, GameStatus, Side, Winner};
use damson_chess::interface::game_interface::{
    attempt_move, attempt_move_text, legal_destinations, new_game, request_ai_move, status, undo,
    AttemptOutcome,
};
use damson_chess::utils::coordinates::parse_square;
use damson_chess::utils::game_record::write_game_record;
use damson_chess::utils::render_game_state::render_board;
use tracing::info;
use tracing_subscriber::EnvFilter;

const HELP: &str = "commands: <move> (e.g. e2e4), undo, moves <square>, board, pgn, help, quit";

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let opponent = match prompt(&mut lines, "Play against AI? (y/n) ")? {
        Some(answer) if answer.eq_ignore_ascii_case("y") => match choose_difficulty(&mut lines)? {
            Some(difficulty) => Some(difficulty),
            None => return Ok(()),
        },
        Some(_) => None,
        None => return Ok(()),
    };
    info!(?opponent, "starting console game");

    let mut state = new_game();
    println!("{HELP}");
    print_position(&state);

    loop {
        if let Some(difficulty) = opponent {
            if state.side_to_move() == Side::Black && !state.is_game_over() {
                match request_ai_move(&state, difficulty.tier()) {
                    Some((from, to)) if attempt_move(&mut state, from, to).is_applied() => {
                        println!("AI plays {from}{to}");
                        print_position(&state);
                    }
                    _ => println!("AI could not find a move"),
                }
                continue;
            }
        }

        let label = format!("{} to move> ", state.side_to_move());
        let Some(line) = prompt(&mut lines, &label)? else {
            break;
        };
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };

        match command {
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "board" => print_position(&state),
            "pgn" => {
                let black = opponent.map_or_else(|| "Human".to_owned(), |d| format!("Computer ({d:?})"));
                print!("{}", write_game_record(&state, "Human", &black));
            }
            "undo" => {
                if !undo(&mut state) {
                    println!("Nothing to undo");
                    continue;
                }
                // Against the AI, keep undoing until the human is to move.
                while opponent.is_some() && state.side_to_move() != Side::White && undo(&mut state) {}
                print_position(&state);
            }
            "moves" => match words.next().map(parse_square) {
                Some(Ok(square)) => {
                    let destinations: Vec<String> = legal_destinations(&state, square)
                        .into_iter()
                        .map(|sq| sq.to_string())
                        .collect();
                    if destinations.is_empty() {
                        println!("No legal moves from {square}");
                    } else {
                        println!("{square}: {}", destinations.join(" "));
                    }
                }
                Some(Err(err)) => println!("{err}"),
                None => println!("usage: moves <square>"),
            },
            text => {
                if state.is_game_over() {
                    println!("The game is over; undo or quit");
                    continue;
                }
                match attempt_move_text(&mut state, text) {
                    AttemptOutcome::Applied { captured, promoted } => {
                        if let Some(piece) = captured {
                            println!("Captured {:?} {:?}", piece.side, piece.kind);
                        }
                        if promoted {
                            println!("Pawn promoted to a queen");
                        }
                        print_position(&state);
                    }
                    AttemptOutcome::Rejected => println!("Illegal move: {text}"),
                }
            }
        }
    }

    Ok(())
}

fn prompt<B: BufRead>(lines: &mut io::Lines<B>, text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_owned())),
        None => Ok(None),
    }
}

fn choose_difficulty<B: BufRead>(lines: &mut io::Lines<B>) -> io::Result<Option<Difficulty>> {
    loop {
        let Some(answer) = prompt(lines, "Choose difficulty (0 = random, 1 = greedy, 2 = minimax): ")?
        else {
            return Ok(None);
        };
        match answer.parse::<u8>().map(Difficulty::try_from) {
            Ok(Ok(difficulty)) => return Ok(Some(difficulty)),
            Ok(Err(err)) => println!("{err}"),
            Err(_) => println!("Enter 0, 1 or 2"),
        }
    }
}

fn print_position(state: &GameState) {
    println!("{}", render_board(state.board()));
    match status(state) {
        GameStatus::InProgress if state.is_in_check() => println!("{} is in check", state.side_to_move()),
        GameStatus::InProgress => {}
        terminal => match terminal.winner() {
            Some(Winner::Side(side)) => println!("Checkmate! {side} wins"),
            Some(Winner::Draw) => println!("Stalemate. The game is a draw"),
            None => {}
        },
    }
}
