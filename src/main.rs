use reversi_core::engine::config::EngineConfig;
use reversi_core::logic::board::BoardCoordinate;
use reversi_core::logic::game::{GameSession, Turn};
use reversi_core::logic::rules::{has_any_legal_move, MoveError};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

struct CliOptions {
    depth: Option<u8>,
    config_path: Option<String>,
}

fn parse_args() -> CliOptions {
    let mut options = CliOptions {
        depth: None,
        config_path: None,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--depth" => options.depth = args.next().and_then(|v| v.parse().ok()),
            "--config" => options.config_path = args.next(),
            other => tracing::warn!("ignoring unknown argument {other:?}"),
        }
    }
    options
}

fn load_config(options: &CliOptions) -> EngineConfig {
    let mut config = match &options.config_path {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(json) => EngineConfig::load_from_json(&json).unwrap_or_else(|err| {
                tracing::warn!("bad config file {path}: {err}, using defaults");
                EngineConfig::default()
            }),
            Err(err) => {
                tracing::warn!("cannot read config file {path}: {err}, using defaults");
                EngineConfig::default()
            }
        },
        None => EngineConfig::default(),
    };
    if let Some(depth) = options.depth {
        config.lookahead_depth = depth;
    }
    config
}

/// Accepts "row col", both in [0,7].
fn parse_move(input: &str) -> Option<BoardCoordinate> {
    let mut parts = input.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    BoardCoordinate::new(row, col)
}

fn render(game: &GameSession) {
    let score = game.score();
    println!();
    print!("{}", game.board);
    println!("score  you (X): {}  computer (O): {}", score.black, score.white);
}

fn announce_result(game: &GameSession) {
    let score = game.score();
    println!("game over");
    if score.black > score.white {
        println!("you win, {} to {}", score.black, score.white);
    } else if score.white > score.black {
        println!("the computer wins, {} to {}", score.white, score.black);
    } else {
        println!("a draw, {} discs each", score.black);
    }
}

fn prompt() -> Option<String> {
    print!("move (row col), 'restart' or 'quit' > ");
    io::stdout().flush().ok();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let options = parse_args();
    let config = load_config(&options);
    let delay = Duration::from_millis(config.move_delay_ms);
    tracing::debug!(
        "starting game, lookahead depth {}",
        config.lookahead_depth
    );

    let mut game = GameSession::new(Arc::new(config));
    println!("Reversi -- you play X, the computer plays O.");
    render(&game);

    loop {
        if game.is_over() {
            announce_result(&game);
            break;
        }
        match game.turn {
            Turn::Human => {
                if !has_any_legal_move(&game.board, game.human) {
                    println!("no legal move for you, passing");
                    game.skip_turn();
                    continue;
                }
                let Some(line) = prompt() else {
                    break;
                };
                match line.as_str() {
                    "" => {}
                    "quit" | "q" => break,
                    "restart" => {
                        game.restart();
                        render(&game);
                    }
                    input => match parse_move(input) {
                        Some(pos) => match game.play_human(pos) {
                            Ok(()) => render(&game),
                            Err(MoveError::Occupied) => {
                                println!("that cell is already taken");
                            }
                            Err(MoveError::NoCapture) => {
                                println!("that move would not flip anything");
                            }
                            Err(MoveError::NotYourTurn) => {
                                println!("it is not your turn");
                            }
                        },
                        None => println!("enter a move as two numbers 0-7, e.g. '2 3'"),
                    },
                }
            }
            Turn::Computer => {
                thread::sleep(delay);
                match game.play_computer() {
                    Some(pos) => println!("computer plays {pos}"),
                    None => println!("computer has no legal move, passing"),
                }
                render(&game);
            }
        }
    }
}
