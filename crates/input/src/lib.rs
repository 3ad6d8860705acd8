//! Command input module.
//!
//! This crate is independent of any terminal library. It turns the lines a
//! player types into [`Command`]s carrying a [`crate::types::Move`], and
//! leaves hand and board validation to the game session.

pub mod command;

pub use qwirkle_types as types;

pub use command::{parse_command, Command, ParseError, HELP};
