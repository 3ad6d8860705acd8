//! Player module - name, score and hand
//!
//! A hand holds at most [`HAND_SIZE`] tiles. Moves refer to hand tiles by
//! 0-based index; the indices are validated here before any tile leaves the
//! hand.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::rng::TileBag;
use crate::types::{Tile, HAND_SIZE};

pub type Hand = ArrayVec<Tile, HAND_SIZE>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    score: u32,
    hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            hand: Hand::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hand(&self) -> &[Tile] {
        &self.hand
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Top the hand up from the bag; stops early when the bag runs dry
    pub fn refill(&mut self, bag: &mut TileBag) {
        for tile in bag.draw(self.hand.remaining_capacity()) {
            self.hand.push(tile);
        }
    }

    pub fn tile(&self, index: usize) -> Result<Tile, GameError> {
        self.hand.get(index).copied().ok_or(GameError::HandIndex {
            index,
            hand_len: self.hand.len(),
        })
    }

    /// Resolve hand indices into tiles, in the order given
    pub fn tiles_at(&self, indices: &[usize]) -> Result<Vec<Tile>, GameError> {
        let mut seen = [false; HAND_SIZE];
        indices
            .iter()
            .map(|&index| {
                let tile = self.tile(index)?;
                if std::mem::replace(&mut seen[index], true) {
                    return Err(GameError::RepeatedHandIndex(index));
                }
                Ok(tile)
            })
            .collect()
    }

    /// Drop the tiles at `indices`; the rest keep their order
    ///
    /// Indices must have been checked with [`Player::tiles_at`].
    pub fn remove_indices(&mut self, indices: &[usize]) {
        self.hand = self
            .hand
            .iter()
            .enumerate()
            .filter(|(i, _)| !indices.contains(i))
            .map(|(_, &tile)| tile)
            .collect();
    }

    /// Rebuild a player from persisted parts
    pub(crate) fn restore(name: String, score: u32, tiles: &[Tile]) -> Option<Self> {
        let hand = Hand::try_from(tiles).ok()?;
        Some(Self { name, score, hand })
    }
}
