//! RNG module - deterministic shuffling and the tile bag
//!
//! The bag holds three copies of each of the 36 distinct tiles (108 tiles),
//! shuffled once when created. Players draw from the end of the bag until it
//! is empty; it is never refilled.
//!
//! Shuffling uses a simple LCG so that a seed fully determines the game,
//! which keeps replays and tests reproducible.

use serde::{Deserialize, Serialize};

use crate::types::{Tile, BAG_SIZE, COPIES_PER_TILE};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// The draw pile, owned by one game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileBag {
    tiles: Vec<Tile>,
}

impl TileBag {
    /// Create a full bag shuffled with the given seed
    pub fn new(seed: u32) -> Self {
        let mut tiles = Vec::with_capacity(BAG_SIZE);
        for tile in Tile::all() {
            tiles.extend(std::iter::repeat(tile).take(COPIES_PER_TILE));
        }
        SimpleRng::new(seed).shuffle(&mut tiles);
        Self { tiles }
    }

    /// Rebuild a bag from persisted contents, in draw order
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Draw up to `n` tiles; fewer when the bag runs out
    pub fn draw(&mut self, n: usize) -> Vec<Tile> {
        let keep = self.tiles.len().saturating_sub(n);
        let mut drawn = self.tiles.split_off(keep);
        drawn.reverse();
        drawn
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Remaining tiles; the next draw comes from the end
    pub fn remaining(&self) -> &[Tile] {
        &self.tiles
    }
}

impl Default for TileBag {
    fn default() -> Self {
        Self::new(1)
    }
}
