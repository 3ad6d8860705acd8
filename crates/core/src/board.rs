//! Board module - the shared grid, placement validation and commit
//!
//! The board is a square grid (91x91 by default) where each cell is empty or
//! holds one tile. Cells live in a flat row-major vector.
//! Coordinates: (row, col), rows grow downwards, columns grow to the right.
//! The first move is anchored at the center cell (45, 45).
//!
//! Placements are validated on an [`Overlay`]: tentative writes are layered
//! over the grid, every rule is checked through the overlay, and only a fully
//! validated overlay is merged into the grid. A rejected placement never
//! touches the grid, the empty flag or the bounds.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::RuleSet;
use crate::error::{LineRule, PlacementError};
use crate::scoring::score_placement;
use crate::types::{Cell, Direction, PlacementRequest, Pos, Tile, TilePlacement};

/// Read access to cell contents, shared by the board and its overlays
pub trait CellView {
    /// Tile at `pos`, or `None` for empty and off-grid cells
    fn tile_at(&self, pos: Pos) -> Option<Tile>;

    fn is_occupied(&self, pos: Pos) -> bool {
        self.tile_at(pos).is_some()
    }
}

/// Orientation of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal line, cells share a row
    Row,
    /// Vertical line, cells share a column
    Column,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::Row, Axis::Column];

    /// Backward and forward scan directions along this axis
    pub fn directions(self) -> (Direction, Direction) {
        match self {
            Axis::Row => (Direction::Left, Direction::Right),
            Axis::Column => (Direction::Up, Direction::Down),
        }
    }
}

/// A maximal contiguous run of occupied cells through one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub axis: Axis,
    /// Cells ordered from the top/left end
    pub cells: Vec<(Pos, Tile)>,
}

impl Line {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Top/left end of the line; identifies the line together with its axis
    pub fn start(&self) -> Option<Pos> {
        self.cells.first().map(|&(pos, _)| pos)
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.iter().any(|&(p, _)| p == pos)
    }

    pub fn has_duplicate(&self) -> bool {
        self.cells
            .iter()
            .enumerate()
            .any(|(i, (_, a))| self.cells[i + 1..].iter().any(|(_, b)| a == b))
    }

    /// Exactly one of {same color, same shape} holds across the line
    pub fn shares_exactly_one(&self) -> bool {
        let Some(&(_, first)) = self.cells.first() else {
            return false;
        };
        let same_color = self.cells.iter().all(|(_, t)| t.color == first.color);
        let same_shape = self.cells.iter().all(|(_, t)| t.shape == first.shape);
        same_color ^ same_shape
    }
}

/// Collect the line through `pos` along `axis`
///
/// The cell itself is included when occupied; scanning stops at the first
/// empty (or off-grid) cell in each direction.
pub fn line_through<V: CellView + ?Sized>(view: &V, pos: Pos, axis: Axis) -> Line {
    let (back, forward) = axis.directions();

    let mut start = pos;
    while view.is_occupied(start.neighbor(back)) {
        start = start.neighbor(back);
    }

    let mut cells = Vec::new();
    let mut cursor = start;
    while let Some(tile) = view.tile_at(cursor) {
        cells.push((cursor, tile));
        cursor = cursor.neighbor(forward);
    }

    Line { axis, cells }
}

/// Single-cell legality check
///
/// Both lines through the cell must be free of duplicates, every line longer
/// than one tile must share exactly one attribute, and the tile must touch at
/// least one other tile.
pub fn check_cell<V: CellView + ?Sized>(view: &V, pos: Pos) -> Result<(), LineRule> {
    let row = line_through(view, pos, Axis::Row);
    let col = line_through(view, pos, Axis::Column);

    if row.has_duplicate() || col.has_duplicate() {
        return Err(LineRule::DuplicateTile);
    }
    for line in [&row, &col] {
        if line.len() > 1 && !line.shares_exactly_one() {
            return Err(LineRule::NoSharedAttribute);
        }
    }
    if row.len() <= 1 && col.len() <= 1 {
        return Err(LineRule::Isolated);
    }
    Ok(())
}

/// Inclusive viewport around every occupied cell
///
/// Only ever grows on successful commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub max_row: i32,
    pub min_col: i32,
    pub min_row: i32,
    pub max_col: i32,
}

impl Bounds {
    /// Square of `margin` cells around `center`
    pub fn around(center: Pos, margin: i32) -> Self {
        Self {
            max_row: center.row + margin,
            min_col: center.col - margin,
            min_row: center.row - margin,
            max_col: center.col + margin,
        }
    }

    /// Grow so that `pos` keeps `margin` cells of padding, clamped to the grid
    fn include(&mut self, pos: Pos, margin: i32, side: usize) {
        let last = side as i32 - 1;
        self.max_row = self.max_row.max((pos.row + margin).min(last));
        self.min_row = self.min_row.min((pos.row - margin).max(0));
        self.max_col = self.max_col.max((pos.col + margin).min(last));
        self.min_col = self.min_col.min((pos.col - margin).max(0));
    }

    pub fn contains(&self, pos: Pos) -> bool {
        (self.min_row..=self.max_row).contains(&pos.row)
            && (self.min_col..=self.max_col).contains(&pos.col)
    }

    /// `(max_row, min_col, min_row, max_col)`
    pub fn as_tuple(&self) -> (i32, i32, i32, i32) {
        (self.max_row, self.min_col, self.min_row, self.max_col)
    }

    pub fn height(&self) -> usize {
        (self.max_row - self.min_row + 1).max(0) as usize
    }

    pub fn width(&self) -> usize {
        (self.max_col - self.min_col + 1).max(0) as usize
    }

    /// Every cell inside the bounds, row-major
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let (min_col, max_col) = (self.min_col, self.max_col);
        (self.min_row..=self.max_row)
            .flat_map(move |row| (min_col..=max_col).map(move |col| Pos::new(row, col)))
    }
}

/// Tentative writes layered over a board
///
/// Reads see the overlay first, then the board. Dropping the overlay discards
/// every tentative write.
#[derive(Debug)]
pub struct Overlay<'a> {
    board: &'a Board,
    placed: Vec<(Pos, Tile)>,
}

impl<'a> Overlay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            placed: Vec::new(),
        }
    }

    /// Tentatively write `tile` at `pos`
    pub fn write(&mut self, pos: Pos, tile: Tile) -> Result<(), PlacementError> {
        if !self.board.in_range(pos) {
            return Err(PlacementError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        if self.is_occupied(pos) {
            return Err(PlacementError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.placed.push((pos, tile));
        Ok(())
    }

    /// Positions written so far, in write order
    pub fn positions(&self) -> Vec<Pos> {
        self.placed.iter().map(|&(pos, _)| pos).collect()
    }

    /// Run the single-cell check at every written cell
    fn check_all(&self) -> Result<(), PlacementError> {
        for &(pos, _) in &self.placed {
            check_cell(self, pos).map_err(|reason| PlacementError::RuleViolation {
                row: pos.row,
                col: pos.col,
                reason,
            })?;
        }
        Ok(())
    }

    /// Some line through a written cell reaches a cell that was already on the board
    fn is_attached(&self) -> bool {
        self.placed.iter().any(|&(pos, _)| {
            Axis::BOTH.iter().any(|&axis| {
                line_through(self, pos, axis)
                    .cells
                    .iter()
                    .any(|&(p, _)| self.board.is_occupied(p))
            })
        })
    }

    /// Every written cell lies on the line through the first one
    ///
    /// The axis comes from the first two positions.
    fn is_colinear(&self) -> bool {
        let [(first, _), (second, _), ..] = self.placed.as_slice() else {
            return true;
        };
        let axis = if first.row == second.row {
            Axis::Row
        } else if first.col == second.col {
            Axis::Column
        } else {
            return false;
        };
        let line = line_through(self, *first, axis);
        self.placed.iter().all(|&(pos, _)| line.contains(pos))
    }

    fn into_placed(self) -> Vec<(Pos, Tile)> {
        self.placed
    }
}

impl CellView for Overlay<'_> {
    fn tile_at(&self, pos: Pos) -> Option<Tile> {
        self.placed
            .iter()
            .find(|&&(p, _)| p == pos)
            .map(|&(_, tile)| tile)
            .or_else(|| self.board.tile_at(pos))
    }
}

/// The shared game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * side + col)
    cells: Vec<Cell>,
    rules: RuleSet,
    empty: bool,
    bounds: Bounds,
}

impl Board {
    /// Create a new empty board with the default rules
    pub fn new() -> Self {
        Self::with_rules(RuleSet::default())
    }

    /// Create a new empty board
    ///
    /// # Panics
    ///
    /// If `rules` is not valid (see [`RuleSet::is_valid`]).
    pub fn with_rules(rules: RuleSet) -> Self {
        assert!(rules.is_valid(), "invalid rule set: {:?}", rules);
        let center = Pos::new(rules.center(), rules.center());
        Self {
            cells: vec![None; rules.side * rules.side],
            rules,
            empty: true,
            bounds: Bounds::around(center, rules.viewport_margin),
        }
    }

    /// Rebuild a board from persisted placements, without rule checks
    ///
    /// The bounds follow from the placements, so `bounds` must match what
    /// growing the initial square over every placed cell gives.
    pub(crate) fn restore(
        rules: RuleSet,
        placements: &[TilePlacement],
        bounds: Bounds,
    ) -> Result<Self, String> {
        if !rules.is_valid() {
            return Err(format!("invalid rule set {:?}", rules));
        }
        let mut board = Self::with_rules(rules);
        for placement in placements {
            let idx = board
                .index(placement.pos())
                .ok_or_else(|| format!("({}, {}) is off the board", placement.row, placement.col))?;
            if board.cells[idx].is_some() {
                return Err(format!(
                    "({}, {}) is placed twice",
                    placement.row, placement.col
                ));
            }
            board.cells[idx] = Some(placement.tile);
            board
                .bounds
                .include(placement.pos(), rules.viewport_margin, rules.side);
        }
        if board.bounds != bounds {
            return Err(format!(
                "bounds {:?} do not match the placed tiles {:?}",
                bounds.as_tuple(),
                board.bounds.as_tuple()
            ));
        }
        board.empty = placements.is_empty();
        Ok(board)
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if !self.in_range(pos) {
            return None;
        }
        Some(pos.row as usize * self.rules.side + pos.col as usize)
    }

    pub fn in_range(&self, pos: Pos) -> bool {
        let side = self.rules.side as i32;
        (0..side).contains(&pos.row) && (0..side).contains(&pos.col)
    }

    pub fn side(&self) -> usize {
        self.rules.side
    }

    pub fn center(&self) -> Pos {
        Pos::new(self.rules.center(), self.rules.center())
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Tile at (row, col); `None` for empty and out-of-range cells
    pub fn get(&self, row: i32, col: i32) -> Option<Tile> {
        self.tile_at(Pos::new(row, col))
    }

    /// True only before the first successful placement
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Every placed tile, row-major
    pub fn occupied(&self) -> impl Iterator<Item = TilePlacement> + '_ {
        let side = self.rules.side;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|tile| TilePlacement::new((idx / side) as i32, (idx % side) as i32, tile))
        })
    }

    /// Number of placed tiles
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Opening move: a line of tiles from the center cell along `direction`
    pub fn first_move(&mut self, direction: Direction, tiles: &[Tile]) -> Result<u32, PlacementError> {
        self.try_first_move(direction, tiles)
            .inspect_err(|err| trace!("first move rejected: {}", err))
    }

    fn try_first_move(&mut self, direction: Direction, tiles: &[Tile]) -> Result<u32, PlacementError> {
        if !self.empty {
            return Err(PlacementError::IllegalState(
                "the first move has already been played",
            ));
        }
        if tiles.is_empty() {
            return Err(PlacementError::EmptyPlacement);
        }
        if !is_valid_opening(tiles) {
            return Err(PlacementError::InvalidFirstMove);
        }

        let mut overlay = Overlay::new(self);
        let center = self.center();
        for (i, &tile) in tiles.iter().enumerate() {
            overlay.write(center.step(direction, i as i32), tile)?;
        }

        let points = score_placement(&overlay, &overlay.positions(), &self.rules).total;
        let placed = overlay.into_placed();
        self.commit(&placed);
        debug!("first move of {} tiles scored {}", placed.len(), points);
        Ok(points)
    }

    /// Place a single tile next to existing tiles
    pub fn place_one(&mut self, row: i32, col: i32, tile: Tile) -> Result<u32, PlacementError> {
        self.place_run(row, col, Direction::Right, &[tile])
    }

    /// Place tiles on consecutive cells from (row, col) along `direction`
    pub fn place_run(
        &mut self,
        row: i32,
        col: i32,
        direction: Direction,
        tiles: &[Tile],
    ) -> Result<u32, PlacementError> {
        self.try_place_run(Pos::new(row, col), direction, tiles)
            .inspect_err(|err| trace!("run at ({}, {}) rejected: {}", row, col, err))
    }

    fn try_place_run(
        &mut self,
        anchor: Pos,
        direction: Direction,
        tiles: &[Tile],
    ) -> Result<u32, PlacementError> {
        self.require_started()?;
        if tiles.is_empty() {
            return Err(PlacementError::EmptyPlacement);
        }

        let mut overlay = Overlay::new(self);
        for (i, &tile) in tiles.iter().enumerate() {
            overlay.write(anchor.step(direction, i as i32), tile)?;
        }
        overlay.check_all()?;
        if !overlay.is_attached() {
            return Err(PlacementError::NotAttached);
        }

        let points = score_placement(&overlay, &overlay.positions(), &self.rules).total;
        let placed = overlay.into_placed();
        self.commit(&placed);
        debug!("run of {} tiles scored {}", placed.len(), points);
        Ok(points)
    }

    /// Place a free set of tiles that must end up on one line
    pub fn place_set(&mut self, placements: &[TilePlacement]) -> Result<u32, PlacementError> {
        self.try_place_set(placements)
            .inspect_err(|err| trace!("set of {} tiles rejected: {}", placements.len(), err))
    }

    fn try_place_set(&mut self, placements: &[TilePlacement]) -> Result<u32, PlacementError> {
        self.require_started()?;
        if placements.is_empty() {
            return Err(PlacementError::EmptyPlacement);
        }

        let mut overlay = Overlay::new(self);
        for placement in placements {
            overlay.write(placement.pos(), placement.tile)?;
        }
        if !overlay.is_colinear() {
            return Err(PlacementError::NotColinear);
        }
        overlay.check_all()?;
        if !overlay.is_attached() {
            return Err(PlacementError::NotAttached);
        }

        let points = score_placement(&overlay, &overlay.positions(), &self.rules).total;
        let placed = overlay.into_placed();
        self.commit(&placed);
        debug!("set of {} tiles scored {}", placed.len(), points);
        Ok(points)
    }

    /// Dispatch a request to the matching placement operation
    pub fn apply(&mut self, request: &PlacementRequest) -> Result<u32, PlacementError> {
        match request {
            PlacementRequest::First { direction, tiles } => self.first_move(*direction, tiles),
            PlacementRequest::Single { row, col, tile } => self.place_one(*row, *col, *tile),
            PlacementRequest::Run {
                row,
                col,
                direction,
                tiles,
            } => self.place_run(*row, *col, *direction, tiles),
            PlacementRequest::Set(placements) => self.place_set(placements),
        }
    }

    /// Whether `tile` could legally go at (row, col) on its own
    ///
    /// Side-effect free: the probe runs on a throwaway overlay.
    pub fn can_place(&self, row: i32, col: i32, tile: Tile) -> bool {
        let pos = Pos::new(row, col);
        let mut overlay = Overlay::new(self);
        if overlay.write(pos, tile).is_err() {
            return false;
        }
        check_cell(&overlay, pos).is_ok()
    }

    /// First cell inside the bounds where `tile` could go, if any
    ///
    /// Every legal cell touches an occupied cell, and the bounds keep at
    /// least one cell of padding around occupied cells, so scanning the
    /// bounds is exhaustive.
    pub fn find_spot(&self, tile: Tile) -> Option<Pos> {
        self.bounds
            .positions()
            .find(|pos| self.can_place(pos.row, pos.col, tile))
    }

    fn require_started(&self) -> Result<(), PlacementError> {
        if self.empty {
            return Err(PlacementError::IllegalState(
                "the board is empty; play a first move",
            ));
        }
        Ok(())
    }

    /// Merge validated writes into the grid
    fn commit(&mut self, placed: &[(Pos, Tile)]) {
        let (margin, side) = (self.rules.viewport_margin, self.rules.side);
        for &(pos, tile) in placed {
            if let Some(idx) = self.index(pos) {
                debug_assert!(self.cells[idx].is_none());
                self.cells[idx] = Some(tile);
                self.bounds.include(pos, margin, side);
            }
        }
        self.empty = false;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl CellView for Board {
    fn tile_at(&self, pos: Pos) -> Option<Tile> {
        self.index(pos).and_then(|idx| self.cells[idx])
    }
}

/// Opening tiles share one color and never repeat a shape
fn is_valid_opening(tiles: &[Tile]) -> bool {
    let Some(first) = tiles.first() else {
        return false;
    };
    tiles.iter().all(|t| t.color == first.color)
        && tiles
            .iter()
            .enumerate()
            .all(|(i, a)| tiles[i + 1..].iter().all(|b| a.shape != b.shape))
}
