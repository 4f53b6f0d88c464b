//! Read-only color-index board resolved from a source image

use ndarray::Array2;

use crate::spatial::point::Point;

/// Sentinel index for cells that carry no palette color
///
/// Such cells come from transparent source pixels and must never be covered
/// by a brick.
pub const NO_COLOR: i32 = -1;

/// Per-cell resolved palette index for an entire board
///
/// Produced once by palette resolution and treated as immutable for the
/// duration of a search run. Every cell holds either a palette index (>= 0)
/// or [`NO_COLOR`].
#[derive(Debug, Clone)]
pub struct ColorBoard {
    // Indexed [row, col], i.e. [y, x]
    indices: Array2<i32>,
    colorable: usize,
}

impl ColorBoard {
    /// Build a board by resolving every cell through `resolve`
    ///
    /// Cells are visited in row-major order.
    pub fn new(width: u32, height: u32, mut resolve: impl FnMut(Point) -> i32) -> Self {
        let indices = Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
            resolve(Point::new(col as i32, row as i32))
        });
        let colorable = indices.iter().filter(|&&index| index >= 0).count();

        Self { indices, colorable }
    }

    /// Board width in pegs
    pub fn width(&self) -> i32 {
        self.indices.ncols() as i32
    }

    /// Board height in pegs
    pub fn height(&self) -> i32 {
        self.indices.nrows() as i32
    }

    /// Whether the position lies on the board
    pub fn contains(&self, pos: Point) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width() && pos.y < self.height()
    }

    /// Palette index at the position, or [`NO_COLOR`] when out of bounds
    pub fn color_index(&self, pos: Point) -> i32 {
        if pos.x < 0 || pos.y < 0 {
            return NO_COLOR;
        }
        self.indices
            .get([pos.y as usize, pos.x as usize])
            .copied()
            .unwrap_or(NO_COLOR)
    }

    /// Number of cells holding a valid palette index
    pub const fn colorable_count(&self) -> usize {
        self.colorable
    }

    /// All board positions in row-major scan order
    pub fn cells(&self) -> impl Iterator<Item = Point> {
        let width = self.width();
        let height = self.height();
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorBoard, NO_COLOR};
    use crate::spatial::point::Point;

    #[test]
    fn out_of_bounds_cells_read_as_colorless() {
        let board = ColorBoard::new(2, 2, |_| 0);

        assert_eq!(board.color_index(Point::new(-1, 0)), NO_COLOR);
        assert_eq!(board.color_index(Point::new(0, -1)), NO_COLOR);
        assert_eq!(board.color_index(Point::new(2, 0)), NO_COLOR);
        assert_eq!(board.color_index(Point::new(0, 2)), NO_COLOR);
        assert_eq!(board.color_index(Point::new(1, 1)), 0);
    }

    #[test]
    fn colorable_count_skips_sentinel_cells() {
        let board = ColorBoard::new(3, 1, |pos| if pos.x == 1 { NO_COLOR } else { 2 });

        assert_eq!(board.colorable_count(), 2);
    }

    #[test]
    fn cells_iterate_row_major() {
        let board = ColorBoard::new(2, 2, |_| 0);
        let cells: Vec<Point> = board.cells().collect();

        assert_eq!(
            cells,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 1),
            ]
        );
    }
}
