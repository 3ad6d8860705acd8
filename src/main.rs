//! Terminal Qwirkle runner (default binary).
//!
//! A line-oriented game: the board and the current player's hand are drawn
//! with a framebuffer-based renderer, then the player types a command at the
//! prompt. Type `h` for the command list.
//!
//! Environment:
//! - `QWIRKLE_PLAYERS`, `QWIRKLE_SEED`, `QWIRKLE_LOAD` (see `GameConfig::from_env`)
//! - `RUST_LOG` for diagnostics on stderr

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use crossterm::tty::IsTty;
use log::warn;

use qwirkle::core::{GameConfig, GameState, TurnOutcome};
use qwirkle::input::{parse_command, Command, HELP};
use qwirkle::term::{GameView, TerminalRenderer};

fn main() -> Result<()> {
    env_logger::init();

    let config = GameConfig::from_env();
    let mut game = match &config.load_path {
        Some(path) => GameState::load_from_path(path)
            .with_context(|| format!("failed to load saved game from {}", path))?,
        None => GameState::new(&config)?,
    };

    run(&mut game)
}

fn run(game: &mut GameState) -> Result<()> {
    let mut term = TerminalRenderer::new();
    let interactive = io::stdout().is_tty();
    let stdin = io::stdin();
    let mut message: Option<String> = None;

    loop {
        // Render.
        let fb = GameView::new(game).render();
        if interactive {
            term.draw(&fb)?;
        } else {
            for y in 0..fb.height() {
                println!("{}", fb.row_text(y));
            }
        }
        if let Some(msg) = message.take() {
            println!("{}", msg);
        }

        if game.is_over() {
            print_standings(game);
            return Ok(());
        }

        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input
            return Ok(());
        }

        message = match parse_command(&line) {
            Err(err) => Some(err.to_string()),
            Ok(Command::Help) => Some(HELP.to_string()),
            Ok(Command::Quit) => {
                print_standings(game);
                return Ok(());
            }
            Ok(Command::Save(path)) => match game.save_to_path(&path) {
                Ok(()) => Some(format!("Game saved to {}", path)),
                Err(err) => {
                    warn!("save to {} failed: {}", path, err);
                    Some(err.to_string())
                }
            },
            Ok(Command::Play(mv)) => Some(match game.play(mv) {
                Ok(outcome) => describe(game, outcome),
                Err(err) => err.to_string(),
            }),
        };
    }
}

fn describe(game: &GameState, outcome: TurnOutcome) -> String {
    let name = game.players()[outcome.player].name();
    if outcome.passed {
        return format!("{} passed", name);
    }
    let mut text = format!("{} scored {}", name, outcome.points);
    if outcome.end_bonus > 0 {
        text.push_str(&format!(" and {} for finishing", outcome.end_bonus));
    }
    text
}

fn print_standings(game: &GameState) {
    println!("Final scores:");
    for (rank, player) in game.standings().iter().enumerate() {
        println!("{:>2}. {} {}", rank + 1, player.name(), player.score());
    }
}
