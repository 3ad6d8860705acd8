//! Scoring module - points for one committed placement
//!
//! Scoring uses deduplicated accumulation over every newly placed cell:
//! - Every distinct cell address on the row-line and column-line of a placed
//!   cell counts one point, however many placed cells see it.
//! - Every distinct line through a placed cell whose length reaches the
//!   completion length (one tile of every value) earns the Qwirkle bonus once.
//! - A placed cell with both a vertical and a horizontal neighbor earns one
//!   extra point, since it extends two lines at once.

use std::collections::HashSet;

use crate::board::{line_through, Axis, CellView};
use crate::config::RuleSet;
use crate::types::{Direction, Pos};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    /// Distinct cells on the lines touched by the placement.
    pub counted_cells: u32,
    /// Sum of completed-line bonuses.
    pub qwirkle_bonus: u32,
    /// Placed cells bridging a row-line and a column-line.
    pub bridge_bonus: u32,
    /// Completed lines, each counted once.
    pub completed_lines: u32,
    pub total: u32,
}

/// Score the cells in `placed`, which must already be visible in `view`
pub fn score_placement<V: CellView + ?Sized>(
    view: &V,
    placed: &[Pos],
    rules: &RuleSet,
) -> ScoreBreakdown {
    let mut counted: HashSet<Pos> = HashSet::new();
    let mut completed: HashSet<(Axis, Pos)> = HashSet::new();
    let mut bridge_bonus = 0u32;

    for &pos in placed {
        for axis in Axis::BOTH {
            let line = line_through(view, pos, axis);
            counted.extend(line.cells.iter().map(|&(p, _)| p));
            if line.len() == rules.completion_length {
                if let Some(start) = line.start() {
                    completed.insert((axis, start));
                }
            }
        }
        bridge_bonus += bridge_points(view, pos);
    }

    let counted_cells = counted.len() as u32;
    let completed_lines = completed.len() as u32;
    let qwirkle_bonus = completed_lines * rules.qwirkle_bonus;

    ScoreBreakdown {
        counted_cells,
        qwirkle_bonus,
        bridge_bonus,
        completed_lines,
        total: counted_cells + qwirkle_bonus + bridge_bonus,
    }
}

/// 1 if the cell has an occupied vertical neighbor and an occupied horizontal one
pub fn bridge_points<V: CellView + ?Sized>(view: &V, pos: Pos) -> u32 {
    let (mut vertical, mut horizontal) = (false, false);
    for d in Direction::ALL {
        if view.is_occupied(pos.neighbor(d)) {
            if d.is_vertical() {
                vertical = true;
            } else {
                horizontal = true;
            }
        }
    }
    u32::from(vertical && horizontal)
}
