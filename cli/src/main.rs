// SPDX-License-Identifier: MIT OR Apache-2.0

//! Weiqi CLI - play against the tiered AI from a terminal
//!
//! Headless front end for the engine: renders the board as ASCII,
//! reads human moves from stdin ("D4", "pass", "quit") and drives the
//! AI through the cancelable async driver. `--auto` runs an AI-vs-AI
//! game for demos and smoke testing.

mod render;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use weiqi_ai::{AiDriver, AiRegistry, Difficulty};
use weiqi_core::{Color, GameError, GameSession};

use render::{format_coord, parse_coord, render_board};

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(name = "weiqi", about = "Go engine with tiered AI opponents", version)]
struct Args {
    /// Board size (9, 13 or 19)
    #[clap(short, long, default_value = "9")]
    size: u8,

    /// AI difficulty
    #[clap(short, long, value_enum, default_value_t = DifficultyArg::Medium)]
    difficulty: DifficultyArg,

    /// Color played by the human
    #[clap(short, long, value_enum, default_value_t = ColorArg::Black)]
    color: ColorArg,

    /// Seed for the AI's randomness (reproducible games)
    #[clap(long)]
    seed: Option<u64>,

    /// Dump the game state as JSON after every move
    #[clap(long)]
    json: bool,

    /// AI vs AI: both sides are played by the engine
    #[clap(long)]
    auto: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorArg {
    Black,
    White,
}

impl From<ColorArg> for Color {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Black => Color::Black,
            ColorArg::White => Color::White,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let difficulty: Difficulty = args.difficulty.into();
    let human: Color = args.color.into();

    let mut session = GameSession::new(args.size)
        .with_context(|| format!("cannot start a game on a {}x{} board", args.size, args.size))?;

    let registry = match args.seed {
        Some(seed) => AiRegistry::seeded(seed),
        None => AiRegistry::new(),
    };
    let driver = AiDriver::new(registry);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let state = session.state();
        println!("{}", render_board(&state.board));
        println!(
            "score: black {} / white {}   captures: black {} / white {}",
            state.score.black, state.score.white, state.captures.0, state.captures.1
        );

        if state.game_over {
            match state.score.winner() {
                Some(Color::Black) => println!("game over: black wins"),
                Some(Color::White) => println!("game over: white wins"),
                None => println!("game over: draw"),
            }
            break;
        }

        let to_move = state.current_player;
        let human_turn = !args.auto && to_move == human;

        if human_turn {
            println!(
                "{:?} to move. Enter a coordinate (e.g. D4), 'pass' or 'quit':",
                to_move
            );
            let line = match lines.next_line().await? {
                Some(line) => line,
                None => break, // stdin closed
            };

            match line.trim().to_ascii_lowercase().as_str() {
                "quit" | "q" => break,
                "pass" | "p" => {
                    session.pass()?;
                }
                input => match parse_coord(input, args.size) {
                    Some(coord) => {
                        if let Err(err) = session.apply_move(coord) {
                            println!("illegal move: {err}");
                            continue;
                        }
                    }
                    None => {
                        println!("could not read '{input}' as a coordinate");
                        continue;
                    }
                },
            }
        } else {
            let state = session.state();
            let choice = driver
                .request_move(
                    difficulty,
                    state.board.clone(),
                    to_move,
                    state.last_captured,
                )
                .await?;

            match choice {
                Some(coord) => {
                    println!("{:?} plays {}", to_move, format_coord(coord));
                    // The random tier ignores the ko point; re-validation
                    // happens here and a rejected choice becomes a pass.
                    match session.apply_move(coord) {
                        Ok(_) => {}
                        Err(GameError::KoViolation) => {
                            tracing::debug!(?coord, "ai move rejected by ko, passing instead");
                            session.pass()?;
                        }
                        Err(err) => return Err(err.into()),
                    }
                }
                None => {
                    println!("{:?} passes", to_move);
                    session.pass()?;
                }
            }
        }

        if args.json {
            println!("{}", serde_json::to_string(session.state())?);
        }
    }

    Ok(())
}
