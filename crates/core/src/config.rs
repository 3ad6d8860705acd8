//! Rule and session configuration.
//!
//! `RuleSet` carries the numbers the board validates and scores with; its
//! defaults come from the constants in `qwirkle-types`. `GameConfig` adds the
//! session-level knobs and can be read from the environment:
//!
//! - `QWIRKLE_PLAYERS`: comma-separated player names (default: two players)
//! - `QWIRKLE_SEED`: bag shuffle seed (default: derived from the clock)
//! - `QWIRKLE_LOAD`: path of a saved game to resume instead of starting fresh

use serde::{Deserialize, Serialize};

use crate::types::{
    ATTRIBUTE_CARDINALITY, BOARD_SIDE, END_GAME_BONUS, QWIRKLE_BONUS, VIEWPORT_MARGIN,
};

/// Largest grid side a rule set may ask for.
pub const MAX_SIDE: usize = 4096;

/// Numbers the board plays by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Side of the square grid.
    pub side: usize,
    /// Length at which a line counts as completed.
    pub completion_length: usize,
    /// Points for each completed line.
    pub qwirkle_bonus: u32,
    /// Padding kept around occupied cells in the viewport bounds.
    pub viewport_margin: i32,
    /// Points for the player who empties their hand once the bag is empty.
    pub end_game_bonus: u32,
}

impl RuleSet {
    /// Smallest side that still fits the initial viewport around the center.
    ///
    /// `None` when the margin is too large for any grid.
    pub fn min_side(&self) -> Option<usize> {
        let margin = usize::try_from(self.viewport_margin.max(0)).ok()?;
        margin.checked_mul(2)?.checked_add(1)
    }

    /// Center cell coordinate (same for row and column).
    pub fn center(&self) -> i32 {
        (self.side / 2) as i32
    }

    pub fn is_valid(&self) -> bool {
        let fits = self
            .min_side()
            .is_some_and(|min| (min..=MAX_SIDE).contains(&self.side));
        fits && self.completion_length > 1 && self.viewport_margin >= 1
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            side: BOARD_SIDE,
            completion_length: ATTRIBUTE_CARDINALITY,
            qwirkle_bonus: QWIRKLE_BONUS,
            viewport_margin: VIEWPORT_MARGIN,
            end_game_bonus: END_GAME_BONUS,
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub players: Vec<String>,
    pub seed: u32,
    pub rules: RuleSet,
    /// Snapshot to resume from, if any.
    pub load_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: vec!["Player 1".to_string(), "Player 2".to_string()],
            seed: 1,
            rules: RuleSet::default(),
            load_path: None,
        }
    }
}

impl GameConfig {
    pub fn new(players: Vec<String>, seed: u32) -> Self {
        Self {
            players,
            seed,
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        use std::env;

        let players = env::var("QWIRKLE_PLAYERS")
            .ok()
            .map(|s| parse_player_names(&s))
            .filter(|names| !names.is_empty())
            .unwrap_or_else(|| Self::default().players);

        let seed = env::var("QWIRKLE_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let load_path = env::var("QWIRKLE_LOAD")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            players,
            seed,
            rules: RuleSet::default(),
            load_path,
        }
    }
}

/// Split a comma-separated list of names, dropping blanks.
pub fn parse_player_names(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn clock_seed() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
