//! Placement search engine: state tracking, frontier generation, and the
//! two search drivers

/// Breadth-first exhaustive enumeration
pub mod exhaustive;
/// Frontier generation and solved detection
pub mod frontier;
/// Greedy hill-climbing driver
pub mod greedy;
/// Placement state and its invariants
pub mod placement;
/// Candidate comparison strategies
pub mod rank;

pub use exhaustive::solve_exhaustive;
pub use frontier::{FrontierMode, is_solved, next_positions, seed_position};
pub use greedy::{GreedySolver, StepOutcome};
pub use placement::{Brick, PlacementSet};
pub use rank::RankStrategy;
