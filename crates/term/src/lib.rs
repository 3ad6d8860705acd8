//! Terminal rendering module.
//!
//! A small rendering layer for the line-oriented game. It avoids widget
//! toolkits and instead renders into a framebuffer of styled cells, which
//! the renderer then encodes to ANSI with crossterm.
//!
//! Goals:
//! - Keep `core` free of terminal I/O
//! - Keep the view pure so it can be tested without a terminal

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use qwirkle_core as core;
pub use qwirkle_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_rgb, tile_style, BoardView, GameView};
pub use renderer::{encode_frame_into, TerminalRenderer};
