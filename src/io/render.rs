//! Preview rendering of boards and placement plans
//!
//! Each board cell expands to an N x N pixel block. Brick edge pixels are
//! lightened so individual bricks read visually; uncovered or colorless
//! cells stay transparent.

use image::{Rgba, RgbaImage};

use crate::catalog::{BrickCatalog, Palette};
use crate::io::configuration::EDGE_HIGHLIGHT;
use crate::solver::PlacementSet;
use crate::spatial::ColorBoard;

/// Render the resolved board one pixel per peg
///
/// Cells without a palette color come out fully transparent.
pub fn render_board(board: &ColorBoard, palette: &Palette) -> RgbaImage {
    let mut image = RgbaImage::new(board.width().max(0) as u32, board.height().max(0) as u32);

    for pos in board.cells() {
        let pixel = palette
            .color(board.color_index(pos))
            .map_or(Rgba([0, 0, 0, 0]), |color| Rgba(color.channels()));
        image.put_pixel(pos.x as u32, pos.y as u32, pixel);
    }

    image
}

/// Render a placement plan with each peg expanded to a tile block
///
/// Pixels on a brick's outer edge are lightened by [`EDGE_HIGHLIGHT`] per
/// channel, capped at 255, to mark brick boundaries. Unplaced cells stay
/// transparent.
pub fn render_placements(
    set: &PlacementSet,
    catalog: &BrickCatalog,
    palette: &Palette,
    tile_size: u32,
) -> RgbaImage {
    let tile = tile_size.max(1);
    let mut image = RgbaImage::new(
        set.width().max(0) as u32 * tile,
        set.height().max(0) as u32 * tile,
    );

    for brick in set.bricks() {
        let Some(definition) = catalog.get(brick.definition_id) else {
            continue;
        };
        let Some(color) = palette.color(brick.color_id) else {
            continue;
        };

        let [r, g, b, _] = color.channels();
        let fill = Rgba([r, g, b, 255]);
        let edge = Rgba([
            r.saturating_add(EDGE_HIGHLIGHT),
            g.saturating_add(EDGE_HIGHLIGHT),
            b.saturating_add(EDGE_HIGHLIGHT),
            255,
        ]);

        // Placement validation guarantees non-negative anchors
        let x0 = brick.position.x.max(0) as u32 * tile;
        let y0 = brick.position.y.max(0) as u32 * tile;
        let x1 = x0 + definition.width as u32 * tile;
        let y1 = y0 + definition.height as u32 * tile;

        for py in y0..y1.min(image.height()) {
            for px in x0..x1.min(image.width()) {
                let is_edge = px == x0 || py == y0 || px == x1 - 1 || py == y1 - 1;
                image.put_pixel(px, py, if is_edge { edge } else { fill });
            }
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::{render_board, render_placements};
    use crate::catalog::{BrickCatalog, BrickColor, Palette};
    use crate::io::configuration::EDGE_HIGHLIGHT;
    use crate::solver::{Brick, PlacementSet};
    use crate::spatial::{ColorBoard, NO_COLOR, Point};

    fn single_color_palette() -> Palette {
        let mut palette = Palette::new();
        palette.push("grey", BrickColor::from_rgb(100, 100, 100));
        palette
    }

    #[test]
    fn colorless_cells_render_transparent() {
        let board = ColorBoard::new(2, 1, |pos| if pos.x == 0 { 0 } else { NO_COLOR });
        let image = render_board(&board, &single_color_palette());

        assert_eq!(image.get_pixel(0, 0).0, [100, 100, 100, 255]);
        assert_eq!(image.get_pixel(1, 0).0[3], 0);
    }

    #[test]
    fn brick_edges_are_lightened() {
        let board = ColorBoard::new(2, 1, |_| 0);
        let catalog = BrickCatalog::from_shapes(&[(2, 1, 15)]);
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

        let image = render_placements(&set, &catalog, &single_color_palette(), 4);
        assert_eq!(image.dimensions(), (8, 4));

        let lightened = 100 + EDGE_HIGHLIGHT;
        assert_eq!(image.get_pixel(0, 0).0, [lightened, lightened, lightened, 255]);
        // Interior pixel keeps the base color
        assert_eq!(image.get_pixel(3, 2).0, [100, 100, 100, 255]);
    }
}
