//! Greedy hill-climbing search driver
//!
//! Places the single best-ranked brick per round until the board is fully
//! covered. The driver never looks more than one brick ahead; a locally
//! best choice can strand the search on some inputs, which surfaces as
//! [`PlanError::Unsolvable`] rather than triggering any backtracking.

use std::sync::{Mutex, PoisonError};
use std::thread;

use crate::catalog::{BrickCatalog, BrickDefinition};
use crate::io::error::{PlanError, Result};
use crate::solver::frontier::{FrontierMode, is_solved, next_positions, seed_position};
use crate::solver::placement::{Brick, PlacementSet};
use crate::solver::rank::RankStrategy;
use crate::spatial::{ColorBoard, Point};

/// One winning candidate from a search round
#[derive(Debug, Clone, Copy)]
struct Candidate {
    rank: f64,
    brick: Brick,
}

/// Outcome of a single greedy round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// One brick was committed to the live set
    Placed(Brick),
    /// Every colorable peg is covered; nothing was placed
    Solved,
}

/// Stepwise greedy driver over one board and catalog
///
/// Exposes a [`step`](Self::step) loop so callers can interleave progress
/// reporting or per-round snapshots with the search.
pub struct GreedySolver<'a> {
    board: &'a ColorBoard,
    catalog: &'a BrickCatalog,
    strategy: RankStrategy,
    parallel: bool,
    set: PlacementSet,
}

impl<'a> GreedySolver<'a> {
    /// Create a driver with an empty placement set
    pub fn new(
        board: &'a ColorBoard,
        catalog: &'a BrickCatalog,
        strategy: RankStrategy,
        parallel: bool,
    ) -> Self {
        Self {
            board,
            catalog,
            strategy,
            parallel,
            set: PlacementSet::for_board(board),
        }
    }

    /// Current placement state
    pub const fn placements(&self) -> &PlacementSet {
        &self.set
    }

    /// Consume the driver, returning the placement state
    pub fn into_placements(self) -> PlacementSet {
        self.set
    }

    /// Run one search round
    ///
    /// Computes the frontier, evaluates every position x definition x anchor
    /// offset candidate on a clone of the live set, and commits the
    /// minimum-rank winner. Ties keep the first candidate in scan order.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Unsolvable`] when no candidate anywhere on the
    /// frontier can be legally placed; the greedy strategy has no
    /// backtracking, so this ends the run.
    pub fn step(&mut self) -> Result<StepOutcome> {
        if is_solved(&self.set, self.board) {
            return Ok(StepOutcome::Solved);
        }

        // An empty set starts from a single seed rather than the full
        // bootstrap frontier
        let positions = if self.set.brick_count() == 0 {
            seed_position(self.board).into_iter().collect()
        } else {
            next_positions(&self.set, self.board, FrontierMode::Bootstrap)
        };

        let best = if self.parallel {
            self.best_candidate_parallel(&positions)
        } else {
            self.best_candidate_serial(&positions)
        };

        let Some(candidate) = best else {
            return Err(self.stalled());
        };

        // Replay the winning brick onto the live set instead of keeping the
        // evaluation clone
        if !self.set.add_brick(candidate.brick, self.catalog, self.board) {
            return Err(self.stalled());
        }

        Ok(StepOutcome::Placed(candidate.brick))
    }

    /// Drive [`step`](Self::step) until the board is solved
    ///
    /// # Errors
    ///
    /// Propagates [`PlanError::Unsolvable`] from any round.
    pub fn run(mut self) -> Result<PlacementSet> {
        loop {
            if matches!(self.step()?, StepOutcome::Solved) {
                return Ok(self.set);
            }
        }
    }

    fn stalled(&self) -> PlanError {
        PlanError::Unsolvable {
            placed: self.set.brick_count(),
            covered: self.set.covered_pegs(),
            colorable: self.board.colorable_count(),
        }
    }

    fn best_candidate_serial(&self, positions: &[Point]) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;
        for &position in positions {
            if let Some(candidate) = self.best_at_position(position)
                && best.as_ref().is_none_or(|b| candidate.rank < b.rank)
            {
                best = Some(candidate);
            }
        }
        best
    }

    // Workers are batched up to the hardware thread count and joined at the
    // scope boundary before the next batch launches. Equal-rank candidates
    // may resolve differently run-to-run depending on which worker reaches
    // the mutex first.
    fn best_candidate_parallel(&self, positions: &[Point]) -> Option<Candidate> {
        let workers = thread::available_parallelism().map_or(1, std::num::NonZero::get);
        let best = Mutex::new(None::<Candidate>);

        for batch in positions.chunks(workers) {
            thread::scope(|scope| {
                for &position in batch {
                    let best = &best;
                    scope.spawn(move || {
                        let Some(candidate) = self.best_at_position(position) else {
                            return;
                        };
                        let mut slot = best.lock().unwrap_or_else(PoisonError::into_inner);
                        if slot.as_ref().is_none_or(|b| candidate.rank < b.rank) {
                            *slot = Some(candidate);
                        }
                    });
                }
            });
        }

        best.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // Evaluates every definition x anchor offset at one frontier position
    // against clones of the live set. Thread-safe: touches no shared
    // mutable state.
    fn best_at_position(&self, position: Point) -> Option<Candidate> {
        let color_id = self.board.color_index(position);
        let mut best: Option<Candidate> = None;

        for definition in self.catalog {
            for anchor in anchor_offsets(position, definition) {
                let brick = Brick {
                    definition_id: definition.id,
                    color_id,
                    position: anchor,
                };
                let mut trial = self.set.clone();
                if !trial.add_brick(brick, self.catalog, self.board) {
                    continue;
                }
                let rank = self.strategy.rank(&trial);
                if best.as_ref().is_none_or(|b| rank < b.rank) {
                    best = Some(Candidate { rank, brick });
                }
            }
        }

        best
    }
}

// The frontier cell may end up being any corner of the final footprint, so
// the brick is tried anchored at each of the four corners.
fn anchor_offsets(position: Point, definition: &BrickDefinition) -> [Point; 4] {
    let dx = definition.width - 1;
    let dy = definition.height - 1;
    [
        position,
        Point::new(position.x - dx, position.y),
        Point::new(position.x, position.y - dy),
        Point::new(position.x - dx, position.y - dy),
    ]
}
