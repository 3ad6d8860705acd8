//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain values with no behavior beyond identity, display names
//! and small geometric helpers, making them usable in any context (board
//! validation, game session, command parsing, rendering).
//!
//! # Board Dimensions
//!
//! The board is a square grid large enough to grow in every direction from
//! its center cell:
//!
//! - **Side**: 91 cells (indexed 0-90)
//! - **Center**: (45, 45), where the first move is anchored
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ATTRIBUTE_CARDINALITY` | 6 | Number of colors, and of shapes |
//! | `QWIRKLE_BONUS` | 6 | Bonus for completing a line of every value |
//! | `HAND_SIZE` | 6 | Tiles held by each player |
//! | `COPIES_PER_TILE` | 3 | Copies of each (color, shape) in the bag |
//! | `END_GAME_BONUS` | 6 | Awarded to the player who ends the game by emptying their hand |
//! | `VIEWPORT_MARGIN` | 2 | Padding kept around occupied cells when rendering |
//!
//! # Examples
//!
//! ```
//! use qwirkle_types::{Color, Direction, Shape, Tile};
//!
//! let tile = Tile::new(Color::Blue, Shape::Plus);
//! assert_eq!(tile.color, Color::Blue);
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(Color::from_str("RED"), Some(Color::Red));
//! assert_eq!(Shape::from_str("diamond"), Some(Shape::Diamond));
//!
//! // Directions know their unit vector and their opposite
//! assert_eq!(Direction::Up.delta(), (-1, 0));
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! ```

use serde::{Deserialize, Serialize};

/// Board side in cells (91 x 91)
pub const BOARD_SIDE: usize = 91;

/// Number of distinct values of each tile attribute (6 colors, 6 shapes)
pub const ATTRIBUTE_CARDINALITY: usize = 6;

/// Points awarded for a completed line ("Qwirkle")
pub const QWIRKLE_BONUS: u32 = 6;

/// Maximum number of tiles in a player's hand
pub const HAND_SIZE: usize = 6;

/// Copies of every distinct tile in a fresh bag
pub const COPIES_PER_TILE: usize = 3;

/// Total number of tiles in a fresh bag (6 colors x 6 shapes x 3 copies = 108)
pub const BAG_SIZE: usize = ATTRIBUTE_CARDINALITY * ATTRIBUTE_CARDINALITY * COPIES_PER_TILE;

/// Points awarded to the player who ends the game by emptying their hand
pub const END_GAME_BONUS: u32 = 6;

/// Cells of padding kept between occupied cells and the rendered viewport
pub const VIEWPORT_MARGIN: i32 = 2;

/// Maximum number of players at one table
pub const MAX_PLAYERS: usize = 4;

/// Tile color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Blue,
    Red,
    Green,
    Orange,
    Yellow,
    Purple,
}

impl Color {
    /// Every color, in declaration order
    pub const ALL: [Color; ATTRIBUTE_CARDINALITY] = [
        Color::Blue,
        Color::Red,
        Color::Green,
        Color::Orange,
        Color::Yellow,
        Color::Purple,
    ];

    /// Parse color from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use qwirkle_types::Color;
    ///
    /// assert_eq!(Color::from_str("blue"), Some(Color::Blue));
    /// assert_eq!(Color::from_str("Purple"), Some(Color::Purple));
    /// assert_eq!(Color::from_str("white"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "blue" => Some(Color::Blue),
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "orange" => Some(Color::Orange),
            "yellow" => Some(Color::Yellow),
            "purple" => Some(Color::Purple),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
        }
    }
}

/// Tile shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shape {
    Cross,
    Square,
    Round,
    Star,
    Plus,
    Diamond,
}

impl Shape {
    /// Every shape, in declaration order
    pub const ALL: [Shape; ATTRIBUTE_CARDINALITY] = [
        Shape::Cross,
        Shape::Square,
        Shape::Round,
        Shape::Star,
        Shape::Plus,
        Shape::Diamond,
    ];

    /// Parse shape from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use qwirkle_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("cross"), Some(Shape::Cross));
    /// assert_eq!(Shape::from_str("ROUND"), Some(Shape::Round));
    /// assert_eq!(Shape::from_str("triangle"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cross" => Some(Shape::Cross),
            "square" => Some(Shape::Square),
            "round" => Some(Shape::Round),
            "star" => Some(Shape::Star),
            "plus" => Some(Shape::Plus),
            "diamond" => Some(Shape::Diamond),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Cross => "cross",
            Shape::Square => "square",
            Shape::Round => "round",
            Shape::Star => "star",
            Shape::Plus => "plus",
            Shape::Diamond => "diamond",
        }
    }

    /// Single-character glyph used by the terminal view
    pub fn glyph(&self) -> char {
        match self {
            Shape::Cross => 'X',
            Shape::Square => '■',
            Shape::Round => '●',
            Shape::Star => '*',
            Shape::Plus => '+',
            Shape::Diamond => '♦',
        }
    }
}

/// A tile: one color and one shape
///
/// Tiles have no identity beyond their two fields; two tiles with the same
/// color and shape are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tile {
    pub color: Color,
    pub shape: Shape,
}

impl Tile {
    pub const fn new(color: Color, shape: Shape) -> Self {
        Self { color, shape }
    }

    /// Iterate over the 36 distinct tiles, color-major
    pub fn all() -> impl Iterator<Item = Tile> {
        Color::ALL
            .into_iter()
            .flat_map(|color| Shape::ALL.into_iter().map(move |shape| Tile::new(color, shape)))
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.color.as_str(), self.shape.as_str())
    }
}

/// One of the four board directions
///
/// Rows grow downwards and columns grow to the right, so `Up` is `(-1, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit displacement as `(delta_row, delta_col)`
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction pointing the other way
    ///
    /// # Examples
    ///
    /// ```
    /// use qwirkle_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Down.opposite(), Direction::Up);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A cell address on the board
///
/// Coordinates are signed so that probes past the grid edge stay
/// representable; the board answers them as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move `n` cells along `direction`
    pub fn step(self, direction: Direction, n: i32) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row + dr * n,
            col: self.col + dc * n,
        }
    }

    /// The adjacent cell in `direction`
    pub fn neighbor(self, direction: Direction) -> Self {
        self.step(direction, 1)
    }
}

/// A tile addressed to a cell, as used by free placement sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePlacement {
    pub row: i32,
    pub col: i32,
    pub tile: Tile,
}

impl TilePlacement {
    pub const fn new(row: i32, col: i32, tile: Tile) -> Self {
        Self { row, col, tile }
    }

    pub fn pos(&self) -> Pos {
        Pos::new(self.row, self.col)
    }
}

/// A placement handed to the board in one call
///
/// Built by the caller from hand contents, consumed by a single
/// `Board::apply`, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementRequest {
    /// Opening move, anchored at the board center
    First { direction: Direction, tiles: Vec<Tile> },
    /// One tile at one cell
    Single { row: i32, col: i32, tile: Tile },
    /// Consecutive cells from an anchor along a direction
    Run {
        row: i32,
        col: i32,
        direction: Direction,
        tiles: Vec<Tile>,
    },
    /// Free set of tiles, which must end up on one line
    Set(Vec<TilePlacement>),
}

/// A player's move, expressed with indices into their hand
///
/// This is what the command layer produces; the game session resolves the
/// indices into tiles and builds a [`PlacementRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    First {
        direction: Direction,
        indices: Vec<usize>,
    },
    Single {
        row: i32,
        col: i32,
        index: usize,
    },
    Run {
        row: i32,
        col: i32,
        direction: Direction,
        indices: Vec<usize>,
    },
    Set(Vec<(i32, i32, usize)>),
    Pass,
}

impl Move {
    /// Hand indices consumed by this move, in submission order
    pub fn indices(&self) -> Vec<usize> {
        match self {
            Move::First { indices, .. } | Move::Run { indices, .. } => indices.clone(),
            Move::Single { index, .. } => vec![*index],
            Move::Set(triples) => triples.iter().map(|&(_, _, index)| index).collect(),
            Move::Pass => Vec::new(),
        }
    }
}

/// A cell on the board
///
/// - `None`: Empty cell
/// - `Some(Tile)`: Cell holding the tile
pub type Cell = Option<Tile>;
