//! Command-line interface and run orchestration

use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::catalog::{CatalogFile, load_catalog};
use crate::io::configuration::{DEFAULT_TILE_SIZE, FRAME_PREFIX, PLAN_SUFFIX, RESOLVED_SUFFIX};
use crate::io::error::{PlanError, Result};
use crate::io::image::{load_rgba, resolve_board, save_png};
use crate::io::progress::SolveProgress;
use crate::io::render::{render_board, render_placements};
use crate::io::report::PartsList;
use crate::solver::{GreedySolver, PlacementSet, RankStrategy, StepOutcome, solve_exhaustive};
use crate::spatial::ColorBoard;

/// Command-line arguments for the mosaic planner
#[derive(Parser)]
#[command(name = "brickmosaic")]
#[command(author, version, about = "Plan a brick mosaic from a raster image")]
pub struct Cli {
    /// Brick catalog file: colors, then shapes with costs in cents
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Source image; pixels without full alpha are left uncovered
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Output path for the rendered plan (defaults to <image>_plan.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enumerate every legal covering instead of searching greedily
    /// (exponential; small boards only)
    #[arg(short, long)]
    pub exhaustive: bool,

    /// Candidate comparison strategy for the greedy search
    #[arg(long, value_enum, default_value_t = RankArg::CostPerPeg)]
    pub rank: RankArg,

    /// Apply ordered dithering before palette matching
    #[arg(short, long)]
    pub dither: bool,

    /// Evaluate frontier positions on worker threads (equal-rank picks may
    /// vary between runs)
    #[arg(short, long)]
    pub parallel: bool,

    /// Write a preview frame after every placement
    #[arg(long)]
    pub frames: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Edge length of one rendered peg block, in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,
}

/// CLI-facing rank strategy choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RankArg {
    /// Cost per covered peg (lower is better)
    CostPerPeg,
    /// Fewer, larger bricks regardless of price
    FewerBricks,
}

impl From<RankArg> for RankStrategy {
    fn from(arg: RankArg) -> Self {
        match arg {
            RankArg::CostPerPeg => Self::CostPerPeg,
            RankArg::FewerBricks => Self::FewerBricks,
        }
    }
}

/// Orchestrates one full planning run from parsed arguments
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the run: load, resolve, search, render, report
    ///
    /// # Errors
    ///
    /// Returns input errors before any search begins, and
    /// [`PlanError::Unsolvable`] when the chosen strategy cannot reach full
    /// coverage.
    // Allow print for the final purchase order on stdout
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        let CatalogFile { palette, catalog } = load_catalog(&self.cli.catalog)?;

        let image = load_rgba(&self.cli.image)?;
        let board = resolve_board(&image, &palette, self.cli.dither);
        if board.colorable_count() == 0 {
            return Err(PlanError::NoColorablePixels {
                width: board.width(),
                height: board.height(),
            });
        }

        // Resolved-board preview goes out before the search so a failed run
        // still leaves the color mapping inspectable
        save_png(&render_board(&board, &palette), &self.resolved_path())?;

        let set = if self.cli.exhaustive {
            solve_exhaustive(&board, &catalog)?
        } else {
            self.solve_greedy(&board, &catalog, &palette)?
        };

        let plan = render_placements(&set, &catalog, &palette, self.cli.tile_size);
        save_png(&plan, &self.output_path())?;

        let parts = PartsList::tally(&set, &catalog, &palette);
        let stdout = std::io::stdout();
        parts
            .write(&catalog, &palette, &mut stdout.lock())
            .map_err(|e| PlanError::FileSystem {
                path: PathBuf::from("<stdout>"),
                operation: "write report",
                source: e,
            })?;

        Ok(())
    }

    fn solve_greedy(
        &self,
        board: &ColorBoard,
        catalog: &crate::catalog::BrickCatalog,
        palette: &crate::catalog::Palette,
    ) -> Result<PlacementSet> {
        let mut solver = GreedySolver::new(
            board,
            catalog,
            RankStrategy::from(self.cli.rank),
            self.cli.parallel,
        );
        let progress = (!self.cli.quiet).then(|| SolveProgress::new(board.colorable_count()));

        loop {
            match solver.step()? {
                StepOutcome::Solved => break,
                StepOutcome::Placed(_) => {
                    let set = solver.placements();
                    if let Some(bar) = &progress {
                        bar.update(set.covered_pegs(), set.brick_count());
                    }
                    if self.cli.frames {
                        let frame = render_placements(set, catalog, palette, self.cli.tile_size);
                        save_png(&frame, &self.frame_path(set.brick_count()))?;
                    }
                }
            }
        }

        if let Some(bar) = &progress {
            bar.finish();
        }

        Ok(solver.into_placements())
    }

    fn output_path(&self) -> PathBuf {
        self.cli
            .output
            .clone()
            .unwrap_or_else(|| self.derived_path(PLAN_SUFFIX))
    }

    fn resolved_path(&self) -> PathBuf {
        self.derived_path(RESOLVED_SUFFIX)
    }

    fn frame_path(&self, step: usize) -> PathBuf {
        self.derived_path(&format!("_{FRAME_PREFIX}{step:05}"))
    }

    fn derived_path(&self, suffix: &str) -> PathBuf {
        let stem = self.cli.image.file_stem().unwrap_or_default();
        let name = format!("{}{}.png", stem.to_string_lossy(), suffix);

        self.cli
            .image
            .parent()
            .map_or_else(|| PathBuf::from(&name), |parent: &Path| parent.join(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
