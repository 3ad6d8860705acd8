//! Snapshot module - saving and resuming a game
//!
//! A snapshot is a plain serde value holding everything needed to resume:
//! the placed tiles (not the full grid), the viewport bounds, the players
//! with their hands, the bag in draw order and the turn bookkeeping. Restoring
//! validates the snapshot instead of trusting it.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Bounds};
use crate::config::RuleSet;
use crate::error::SnapshotError;
use crate::game_state::GameState;
use crate::player::Player;
use crate::rng::TileBag;
use crate::types::{Tile, TilePlacement, MAX_PLAYERS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub score: u32,
    pub hand: Vec<Tile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub rules: RuleSet,
    pub bounds: Bounds,
    pub tiles: Vec<TilePlacement>,
    pub players: Vec<PlayerSnapshot>,
    pub current: usize,
    pub passes_in_row: usize,
    /// Bag contents; the next draw comes from the end
    pub bag: Vec<Tile>,
    pub game_over: bool,
}

impl GameState {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            rules: *self.board.rules(),
            bounds: self.board.bounds(),
            tiles: self.board.occupied().collect(),
            players: self
                .players
                .iter()
                .map(|p| PlayerSnapshot {
                    name: p.name().to_string(),
                    score: p.score(),
                    hand: p.hand().to_vec(),
                })
                .collect(),
            current: self.current,
            passes_in_row: self.passes_in_row,
            bag: self.bag.remaining().to_vec(),
            game_over: self.over,
        }
    }

    /// Rebuild a game from a snapshot, rejecting inconsistent ones
    pub fn restore(snapshot: GameSnapshot) -> Result<Self, SnapshotError> {
        let count = snapshot.players.len();
        if !(1..=MAX_PLAYERS).contains(&count) {
            return Err(SnapshotError::Corrupt(format!("{} players", count)));
        }
        if snapshot.current >= count {
            return Err(SnapshotError::Corrupt(format!(
                "current player {} of {}",
                snapshot.current, count
            )));
        }

        let board = Board::restore(snapshot.rules, &snapshot.tiles, snapshot.bounds)
            .map_err(SnapshotError::Corrupt)?;

        let players = snapshot
            .players
            .into_iter()
            .map(|p| {
                let hand_len = p.hand.len();
                Player::restore(p.name, p.score, &p.hand).ok_or_else(|| {
                    SnapshotError::Corrupt(format!("a hand of {} tiles", hand_len))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            board,
            players,
            current: snapshot.current,
            bag: TileBag::from_tiles(snapshot.bag),
            passes_in_row: snapshot.passes_in_row,
            over: snapshot.game_over,
        })
    }

    /// Write the game as pretty-printed JSON
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&self.snapshot())?;
        fs::write(path, json)?;
        info!("saved game to {}", path.display());
        Ok(())
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let game = Self::restore(serde_json::from_str(&json)?)?;
        info!(
            "loaded game from {} ({} tiles on the board)",
            path.display(),
            game.board.tile_count()
        );
        Ok(game)
    }
}
