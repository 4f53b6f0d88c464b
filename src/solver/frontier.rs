//! Frontier generation: where the next brick may legally start
//!
//! Restricts the search to positions plausibly adjacent to growth instead of
//! scanning the whole empty board every round.

use crate::solver::placement::PlacementSet;
use crate::spatial::{ColorBoard, NO_COLOR, Point};

/// Neighbor rule applied while scanning for frontier cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierMode {
    /// A cell qualifies when any 4-neighbor is off the board, occupied, or
    /// colorless; finds the outer edge of colorable regions and is used to
    /// seed a search with no bricks placed yet
    Bootstrap,
    /// A cell qualifies only when a 4-neighbor is occupied; keeps growth
    /// attached to already-placed bricks
    Append,
}

/// Top-left-most colorable cell, in row-major scan order
///
/// Used by the greedy driver to start an empty search from a single seed
/// instead of the full bootstrap frontier.
pub fn seed_position(board: &ColorBoard) -> Option<Point> {
    board
        .cells()
        .find(|&pos| board.color_index(pos) != NO_COLOR)
}

/// Collect every cell eligible to anchor the next placement
///
/// Scans in row-major order and emits each qualifying cell once, stopping at
/// its first matching neighbor. The resulting order is deterministic and
/// load-bearing: the greedy driver keeps the first candidate on rank ties,
/// so earlier-scanned positions win.
pub fn next_positions(set: &PlacementSet, board: &ColorBoard, mode: FrontierMode) -> Vec<Point> {
    let mut positions = Vec::new();

    for pos in board.cells() {
        if set.is_peg_occupied(pos) || board.color_index(pos) == NO_COLOR {
            continue;
        }

        for delta in Point::NEIGHBOR_OFFSETS {
            let adjacent = pos.offset(delta);
            let in_board = board.contains(adjacent);
            let occupied = in_board && set.is_peg_occupied(adjacent);
            let colorless = in_board && board.color_index(adjacent) == NO_COLOR;

            let qualifies = match mode {
                FrontierMode::Append => occupied,
                FrontierMode::Bootstrap => !in_board || occupied || colorless,
            };

            if qualifies {
                positions.push(pos);
                break;
            }
        }
    }

    positions
}

/// Whether the set covers every colorable cell of the board
///
/// An empty set is never solved, even on a board with nothing to cover.
/// Full scan each call; both lookups are O(1) per cell, so no incremental
/// cache is kept.
pub fn is_solved(set: &PlacementSet, board: &ColorBoard) -> bool {
    if set.brick_count() == 0 {
        return false;
    }

    board
        .cells()
        .all(|pos| board.color_index(pos) == NO_COLOR || set.is_peg_occupied(pos))
}
