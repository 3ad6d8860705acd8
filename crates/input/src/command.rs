//! Line commands typed by the current player.
//!
//! Every command is one line of whitespace-separated words; the first word
//! picks the command. Hand indices are 0-based.

use thiserror::Error;

use crate::types::{Direction, Move};

pub const HELP: &str = "\
Commands:
  h                                   show this help
  f [<dir>] <i>...                    first move from the center (default direction: r)
  o <row> <col> <i>                   place one tile
  l <row> <col> <dir> <i>...          place tiles in a line from (row, col)
  m <row> <col> <i> [<row> <col> <i>]...  place tiles at free positions on one line
  p                                   pass
  s <path>                            save the game
  q                                   quit
<i>: index of a tile in your hand, starting at 0
<dir>: u (up), d (down), l (left), r (right)";

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Play(Move),
    Save(String),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`; type h for help")]
    UnknownCommand(String),

    #[error("wrong number of arguments; usage: {0}")]
    Arity(&'static str),

    #[error("`{0}` is not a valid number")]
    Integer(String),

    #[error("`{0}` is not a direction; use u, d, l or r")]
    Direction(String),
}

const USAGE_FIRST: &str = "f [<dir>] <i>...";
const USAGE_ONE: &str = "o <row> <col> <i>";
const USAGE_LINE: &str = "l <row> <col> <dir> <i>...";
const USAGE_SET: &str = "m <row> <col> <i> [<row> <col> <i>]...";
const USAGE_SAVE: &str = "s <path>";

/// Parse one input line.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = words.split_first() else {
        return Err(ParseError::Empty);
    };

    match name.to_lowercase().as_str() {
        "h" => no_args(args, "h").map(|_| Command::Help),
        "p" => no_args(args, "p").map(|_| Command::Play(Move::Pass)),
        "q" => no_args(args, "q").map(|_| Command::Quit),
        "s" => {
            if args.is_empty() {
                return Err(ParseError::Arity(USAGE_SAVE));
            }
            Ok(Command::Save(args.join(" ")))
        }
        "f" => parse_first(args).map(Command::Play),
        "o" => {
            let [row, col, index] = args else {
                return Err(ParseError::Arity(USAGE_ONE));
            };
            Ok(Command::Play(Move::Single {
                row: int(row)?,
                col: int(col)?,
                index: int(index)?,
            }))
        }
        "l" => {
            let [row, col, dir, indices @ ..] = args else {
                return Err(ParseError::Arity(USAGE_LINE));
            };
            if indices.is_empty() {
                return Err(ParseError::Arity(USAGE_LINE));
            }
            Ok(Command::Play(Move::Run {
                row: int(row)?,
                col: int(col)?,
                direction: direction(dir)?,
                indices: ints(indices)?,
            }))
        }
        "m" => {
            if args.is_empty() || args.len() % 3 != 0 {
                return Err(ParseError::Arity(USAGE_SET));
            }
            let triples = args
                .chunks(3)
                .map(|chunk| Ok((int(chunk[0])?, int(chunk[1])?, int(chunk[2])?)))
                .collect::<Result<Vec<_>, ParseError>>()?;
            Ok(Command::Play(Move::Set(triples)))
        }
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_first(args: &[&str]) -> Result<Move, ParseError> {
    let Some((&head, rest)) = args.split_first() else {
        return Err(ParseError::Arity(USAGE_FIRST));
    };

    // A leading word that is not a number names the direction
    if head.parse::<usize>().is_ok() {
        return Ok(Move::First {
            direction: Direction::Right,
            indices: ints(args)?,
        });
    }
    let direction = direction(head)?;
    if rest.is_empty() {
        return Err(ParseError::Arity(USAGE_FIRST));
    }
    Ok(Move::First {
        direction,
        indices: ints(rest)?,
    })
}

fn no_args(args: &[&str], usage: &'static str) -> Result<(), ParseError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(ParseError::Arity(usage))
    }
}

fn int<T: std::str::FromStr>(word: &str) -> Result<T, ParseError> {
    word.parse().map_err(|_| ParseError::Integer(word.to_string()))
}

fn ints(words: &[&str]) -> Result<Vec<usize>, ParseError> {
    words.iter().map(|w| int(w)).collect()
}

fn direction(word: &str) -> Result<Direction, ParseError> {
    Direction::from_str(word).ok_or_else(|| ParseError::Direction(word.to_string()))
}
