//! Error types for board placements and game sessions.
//!
//! Every placement rejection is a value, never a panic: the board is left
//! untouched and the caller decides whether to re-prompt.

use thiserror::Error;

/// Which line rule a placed tile broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRule {
    /// The same (color, shape) appears twice in one line.
    DuplicateTile,
    /// A line longer than one tile shares neither color nor shape.
    NoSharedAttribute,
    /// The tile touches no other tile.
    Isolated,
}

impl LineRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineRule::DuplicateTile => "a line would contain the same tile twice",
            LineRule::NoSharedAttribute => "a line would share neither color nor shape",
            LineRule::Isolated => "the tile would not touch any other tile",
        }
    }
}

/// Rejection of an attempted placement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("illegal state: {0}")]
    IllegalState(&'static str),

    #[error("cell ({row}, {col}) already holds a tile")]
    CellOccupied { row: i32, col: i32 },

    #[error("tile at ({row}, {col}) breaks the line rules: {}", .reason.as_str())]
    RuleViolation { row: i32, col: i32, reason: LineRule },

    #[error("the tiles do not touch any tile already on the board")]
    NotAttached,

    #[error("the tiles are not on one straight line")]
    NotColinear,

    #[error("first move tiles must share one color and have distinct shapes")]
    InvalidFirstMove,

    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("no tiles were given")]
    EmptyPlacement,
}

/// Errors raised by the game session on top of placement errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error("hand index {index} is out of range (hand holds {hand_len} tiles)")]
    HandIndex { index: usize, hand_len: usize },

    #[error("hand index {0} is used more than once")]
    RepeatedHandIndex(usize),

    #[error("a game needs between 1 and {max} players, got {got}")]
    PlayerCount { got: usize, max: usize },

    #[error("invalid rule set: {0}")]
    InvalidRules(String),

    #[error("the game is over")]
    GameOver,
}

/// Errors raised while saving or restoring a game.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot is inconsistent: {0}")]
    Corrupt(String),
}
