//! Parts-list aggregation for a finished plan

use std::io::Write;

use ndarray::Array2;

use crate::catalog::{BrickCatalog, Palette};
use crate::solver::PlacementSet;

/// Per-color, per-definition brick counts with grand totals
#[derive(Debug, Clone)]
pub struct PartsList {
    // Indexed [color, definition]
    counts: Array2<u32>,
    total_bricks: usize,
    total_cost_cents: u64,
}

impl PartsList {
    /// Tally a finished placement set into a purchase order
    pub fn tally(set: &PlacementSet, catalog: &BrickCatalog, palette: &Palette) -> Self {
        let mut counts = Array2::zeros((palette.len(), catalog.len()));

        for brick in set.bricks() {
            if let Ok(color) = usize::try_from(brick.color_id)
                && let Some(slot) = counts.get_mut([color, brick.definition_id])
            {
                *slot += 1;
            }
        }

        Self {
            counts,
            total_bricks: set.brick_count(),
            total_cost_cents: set.cost_cents(),
        }
    }

    /// Count for one color and brick definition
    pub fn count(&self, color_id: usize, definition_id: usize) -> u32 {
        self.counts
            .get([color_id, definition_id])
            .copied()
            .unwrap_or(0)
    }

    /// Total number of bricks in the plan
    pub const fn total_bricks(&self) -> usize {
        self.total_bricks
    }

    /// Total plan cost in cents
    pub const fn total_cost_cents(&self) -> u64 {
        self.total_cost_cents
    }

    /// Write the purchase order, color by color
    ///
    /// Unused colors get a single notice line. Costs print as
    /// dollars.cents.
    ///
    /// # Errors
    ///
    /// Propagates writer failures.
    pub fn write(
        &self,
        catalog: &BrickCatalog,
        palette: &Palette,
        out: &mut impl Write,
    ) -> std::io::Result<()> {
        for (color_id, entry) in palette.iter().enumerate() {
            let color_total: u32 = (0..catalog.len())
                .map(|definition_id| self.count(color_id, definition_id))
                .sum();

            if color_total == 0 {
                writeln!(out, "Color \"{}\" is unused", entry.name)?;
                continue;
            }

            writeln!(out, "Color \"{}\" has {} parts:", entry.name, color_total)?;
            for definition in catalog {
                let count = self.count(color_id, definition.id);
                if count > 0 {
                    writeln!(
                        out,
                        "\t{} needed for part #{} ({}x{}, {} cents per unit)",
                        count, definition.id, definition.width, definition.height, definition.cost
                    )?;
                }
            }
        }

        writeln!(out, "> Total bricks: {}", self.total_bricks)?;
        writeln!(
            out,
            "> Total cost: ${}.{:02}",
            self.total_cost_cents / 100,
            self.total_cost_cents % 100
        )
    }
}
