//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the board rules, scoring and the game session. It has
//! no dependencies on terminal I/O, which keeps it:
//!
//! - **Deterministic**: the same seed deals the same game
//! - **Testable**: every rule is reachable from plain function calls
//! - **Recoverable**: a rejected placement is a `Result`, never a panic, and
//!   leaves the board exactly as it was
//!
//! # Module Structure
//!
//! - [`board`]: the 91x91 grid, the line rules and the placement operations
//! - [`scoring`]: points for a committed placement
//! - [`rng`]: deterministic shuffling and the tile bag
//! - [`player`]: names, scores and hands
//! - [`game_state`]: turn order, refills and game-over detection
//! - [`snapshot`]: saving and resuming a game as JSON
//! - [`config`]: rule numbers and session settings
//! - [`error`]: typed errors for all of the above
//!
//! # Game Rules
//!
//! - Every maximal horizontal or vertical run of tiles is a **line**. A line
//!   never repeats a tile, and a line of two or more tiles shares exactly one
//!   attribute: all one color, or all one shape.
//! - The **first move** goes through the center cell, in one direction, with
//!   tiles of one color and distinct shapes.
//! - Every later placement must touch a tile that was already on the board.
//! - A placement scores one point per distinct cell on the lines it touches,
//!   +6 for each line completed to six tiles, and +1 for each placed tile
//!   that joins a vertical and a horizontal neighbor.
//!
//! # Example
//!
//! ```
//! use qwirkle_core::Board;
//! use qwirkle_core::types::{Color, Direction, Shape, Tile};
//!
//! let mut board = Board::new();
//! let tiles = [
//!     Tile::new(Color::Blue, Shape::Plus),
//!     Tile::new(Color::Blue, Shape::Cross),
//!     Tile::new(Color::Blue, Shape::Diamond),
//! ];
//! assert_eq!(board.first_move(Direction::Right, &tiles), Ok(3));
//!
//! // Below the plus: a column line of two
//! let round = Tile::new(Color::Blue, Shape::Round);
//! assert_eq!(board.place_run(46, 45, Direction::Down, &[round]), Ok(2));
//! assert!(board.place_one(45, 48, Tile::new(Color::Red, Shape::Plus)).is_err());
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod player;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use qwirkle_types as types;

// Re-export commonly used types for convenience
pub use board::{check_cell, line_through, Axis, Board, Bounds, CellView, Line, Overlay};
pub use config::{GameConfig, RuleSet, MAX_SIDE};
pub use error::{GameError, LineRule, PlacementError, SnapshotError};
pub use game_state::{GameState, TurnOutcome};
pub use player::{Hand, Player};
pub use rng::{SimpleRng, TileBag};
pub use scoring::{bridge_points, score_placement, ScoreBreakdown};
pub use snapshot::{GameSnapshot, PlayerSnapshot};
