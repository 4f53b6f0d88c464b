//! Exhaustive breadth-first search over all legal continuations
//!
//! Enumerates every placement order the frontier rules allow, so the cost is
//! exponential in board size. Intended for small boards and for verifying
//! the greedy driver's output quality.

use std::collections::VecDeque;

use crate::catalog::BrickCatalog;
use crate::io::error::{PlanError, Result};
use crate::solver::frontier::{FrontierMode, is_solved, next_positions};
use crate::solver::placement::{Brick, PlacementSet};
use crate::spatial::ColorBoard;

/// Enumerate every covering and return the cheapest
///
/// The queue is seeded with the empty set. The very first expansion uses
/// the bootstrap frontier rule; all later expansions use the strict
/// touching-existing-bricks rule. Solved sets are recorded and not
/// requeued. Cost ties are broken in favor of the earliest-discovered
/// solution.
///
/// # Errors
///
/// Returns [`PlanError::Unsolvable`] when the queue drains without a single
/// complete covering.
pub fn solve_exhaustive(board: &ColorBoard, catalog: &BrickCatalog) -> Result<PlacementSet> {
    let mut queue = VecDeque::new();
    queue.push_back(PlacementSet::for_board(board));

    let mut solutions: Vec<PlacementSet> = Vec::new();
    let mut expanded_before = false;

    while let Some(set) = queue.pop_front() {
        let mode = if expanded_before {
            FrontierMode::Append
        } else {
            FrontierMode::Bootstrap
        };
        expanded_before = true;

        for position in next_positions(&set, board, mode) {
            let color_id = board.color_index(position);
            for definition in catalog {
                let brick = Brick {
                    definition_id: definition.id,
                    color_id,
                    position,
                };
                let mut trial = set.clone();
                if !trial.add_brick(brick, catalog, board) {
                    continue;
                }
                if is_solved(&trial, board) {
                    solutions.push(trial);
                } else {
                    queue.push_back(trial);
                }
            }
        }
    }

    // Strict less-than keeps the first-discovered solution on cost ties
    let mut best: Option<PlacementSet> = None;
    for solution in solutions {
        if best
            .as_ref()
            .is_none_or(|b| solution.cost_cents() < b.cost_cents())
        {
            best = Some(solution);
        }
    }

    best.ok_or_else(|| PlanError::Unsolvable {
        placed: 0,
        covered: 0,
        colorable: board.colorable_count(),
    })
}
