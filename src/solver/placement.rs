//! Placement state: one candidate assignment of bricks to the board
//!
//! [`PlacementSet`] tracks the ordered brick list, a dense occupancy bitmap,
//! and cached cost/coverage totals. [`PlacementSet::add_brick`] is the only
//! mutator; search branching clones the whole set and discards losing
//! branches rather than undoing placements.

use bitvec::prelude::*;

use crate::catalog::BrickCatalog;
use crate::spatial::{ColorBoard, Point};

/// A placed brick instance
///
/// Points at a catalog definition; `color_id` must equal the board's color
/// index at every covered cell, which `add_brick` enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brick {
    /// Catalog id of the shape
    pub definition_id: usize,
    /// Palette index this brick is ordered in
    pub color_id: i32,
    /// Anchor cell (top-left of the footprint)
    pub position: Point,
}

/// The evolving collision map, brick list, and cost cache for one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementSet {
    width: i32,
    height: i32,
    bricks: Vec<Brick>,
    occupancy: BitVec,
    cost_cents: u64,
    covered_pegs: usize,
}

impl PlacementSet {
    /// Create an empty set for a board of the given size
    pub fn new(width: i32, height: i32) -> Self {
        let cells = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width,
            height,
            bricks: Vec::new(),
            occupancy: bitvec![0; cells],
            cost_cents: 0,
            covered_pegs: 0,
        }
    }

    /// Create an empty set sized to a resolved board
    pub fn for_board(board: &ColorBoard) -> Self {
        Self::new(board.width(), board.height())
    }

    /// Board width in pegs
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Board height in pegs
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Attempt to place a brick; returns whether it was committed
    ///
    /// Preconditions checked in order: the definition id resolves, the whole
    /// footprint lies on the board, the color id is valid, and every
    /// footprint cell is unoccupied with a board color equal to `color_id`.
    /// Any failure leaves the set untouched. This is the sole mutator of
    /// occupancy and the cost/coverage caches.
    pub fn add_brick(&mut self, brick: Brick, catalog: &BrickCatalog, board: &ColorBoard) -> bool {
        let Some(&definition) = catalog.get(brick.definition_id) else {
            return false;
        };

        if brick.position.x < 0
            || brick.position.y < 0
            || brick.position.x + definition.width > self.width
            || brick.position.y + definition.height > self.height
        {
            return false;
        }

        if brick.color_id < 0 {
            return false;
        }

        for pos in definition.footprint(brick.position) {
            if self.is_peg_occupied(pos) || board.color_index(pos) != brick.color_id {
                return false;
            }
        }

        // All checks passed; commit in one pass
        for pos in definition.footprint(brick.position) {
            if let Some(index) = self.peg_index(pos) {
                self.occupancy.set(index, true);
            }
        }
        self.cost_cents += u64::from(definition.cost);
        self.covered_pegs += definition.area();
        self.bricks.push(brick);

        true
    }

    /// Whether a brick already covers the position
    ///
    /// Out-of-board positions read as unoccupied; callers iterating the
    /// board already know the legal ranges.
    pub fn is_peg_occupied(&self, pos: Point) -> bool {
        self.peg_index(pos)
            .and_then(|index| self.occupancy.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Placed bricks in placement order
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    /// Number of placed bricks
    pub const fn brick_count(&self) -> usize {
        self.bricks.len()
    }

    /// Cached total cost in cents
    pub const fn cost_cents(&self) -> u64 {
        self.cost_cents
    }

    /// Cached number of covered pegs
    pub const fn covered_pegs(&self) -> usize {
        self.covered_pegs
    }

    /// Fraction of the board's colorable pegs currently covered
    pub fn fill_fraction(&self, board: &ColorBoard) -> f64 {
        if board.colorable_count() == 0 {
            return 0.0;
        }
        self.covered_pegs as f64 / board.colorable_count() as f64
    }

    /// Recompute `(cost, covered)` from the brick list
    ///
    /// Exists for consistency checks against the cached totals; the two must
    /// agree for every reachable set.
    pub fn recomputed_totals(&self, catalog: &BrickCatalog) -> (u64, usize) {
        let mut cost = 0u64;
        let mut covered = 0usize;
        for brick in &self.bricks {
            if let Some(definition) = catalog.get(brick.definition_id) {
                cost += u64::from(definition.cost);
                covered += definition.area();
            }
        }
        (cost, covered)
    }

    /// Number of set occupancy bits
    ///
    /// Equals [`covered_pegs`](Self::covered_pegs) for every reachable set.
    pub fn occupied_bit_count(&self) -> usize {
        self.occupancy.count_ones()
    }

    fn peg_index(&self, pos: Point) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        Some(pos.y as usize * self.width as usize + pos.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::{Brick, PlacementSet};
    use crate::catalog::BrickCatalog;
    use crate::spatial::{ColorBoard, Point};

    fn uniform_board(width: u32, height: u32) -> ColorBoard {
        ColorBoard::new(width, height, |_| 0)
    }

    #[test]
    fn unknown_definition_is_rejected() {
        let board = uniform_board(4, 4);
        let catalog = BrickCatalog::from_shapes(&[(1, 1, 10)]);
        let mut set = PlacementSet::for_board(&board);

        let brick = Brick {
            definition_id: 9,
            color_id: 0,
            position: Point::new(0, 0),
        };
        assert!(!set.add_brick(brick, &catalog, &board));
        assert_eq!(set.brick_count(), 0);
    }

    #[test]
    fn footprint_must_fit_inside_the_board() {
        let board = uniform_board(3, 3);
        let catalog = BrickCatalog::from_shapes(&[(2, 2, 40)]);
        let mut set = PlacementSet::for_board(&board);

        let hanging = Brick {
            definition_id: 0,
            color_id: 0,
            position: Point::new(2, 2),
        };
        assert!(!set.add_brick(hanging, &catalog, &board));

        let inside = Brick {
            definition_id: 0,
            color_id: 0,
            position: Point::new(1, 1),
        };
        assert!(set.add_brick(inside, &catalog, &board));
    }

    #[test]
    fn negative_color_is_rejected() {
        let board = uniform_board(2, 2);
        let catalog = BrickCatalog::from_shapes(&[(1, 1, 10)]);
        let mut set = PlacementSet::for_board(&board);

        let brick = Brick {
            definition_id: 0,
            color_id: -1,
            position: Point::new(0, 0),
        };
        assert!(!set.add_brick(brick, &catalog, &board));
    }

    #[test]
    fn caches_track_successful_placements() {
        let board = uniform_board(4, 4);
        let catalog = BrickCatalog::from_shapes(&[(2, 2, 40), (1, 1, 10)]);
        let mut set = PlacementSet::for_board(&board);

        assert!(set.add_brick(
            Brick {
                definition_id: 0,
                color_id: 0,
                position: Point::new(0, 0),
            },
            &catalog,
            &board,
        ));
        assert!(set.add_brick(
            Brick {
                definition_id: 1,
                color_id: 0,
                position: Point::new(2, 0),
            },
            &catalog,
            &board,
        ));

        assert_eq!(set.cost_cents(), 50);
        assert_eq!(set.covered_pegs(), 5);
        assert_eq!(set.recomputed_totals(&catalog), (50, 5));
        assert_eq!(set.occupied_bit_count(), 5);
    }
}
