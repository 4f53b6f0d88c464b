//! Candidate comparison strategies for the greedy search

use crate::solver::placement::PlacementSet;

/// Baseline for the fewer-bricks score so small sets stay positive
const SCORE_BASE: i64 = 100_000;

/// How competing candidate placement sets are compared
///
/// Both strategies are normalized so that a lower rank is better, letting
/// the drivers compare a single `f64` regardless of the configured metric.
/// The metric is chosen once per run and never mixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RankStrategy {
    /// Cost per covered peg; prefers cost-efficient coverage
    #[default]
    CostPerPeg,
    /// Penalizes brick count and rewards coverage; prefers fewer, larger
    /// bricks regardless of price
    FewerBricks,
}

impl RankStrategy {
    /// Rank a candidate set; lower is better
    ///
    /// A set covering nothing ranks at positive infinity so any real
    /// placement beats it.
    pub fn rank(self, set: &PlacementSet) -> f64 {
        match self {
            Self::CostPerPeg => {
                if set.covered_pegs() == 0 {
                    f64::INFINITY
                } else {
                    set.cost_cents() as f64 / set.covered_pegs() as f64
                }
            }
            Self::FewerBricks => {
                let score =
                    SCORE_BASE - set.brick_count() as i64 + set.covered_pegs() as i64 * 10;
                // Higher score is better; negate to fit the lower-is-better frame
                -(score as f64)
            }
        }
    }
}
