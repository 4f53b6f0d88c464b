//! Integer grid coordinates

/// A position or size on the board, measured in pegs
///
/// The type enforces no sign invariant; callers bounds-check against the
/// board they are addressing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal component (column)
    pub x: i32,
    /// Vertical component (row)
    pub y: i32,
}

impl Point {
    /// The four axis-aligned neighbor offsets, in up/down/left/right order
    pub const NEIGHBOR_OFFSETS: [Self; 4] = [
        Self::new(0, -1),
        Self::new(0, 1),
        Self::new(-1, 0),
        Self::new(1, 0),
    ];

    /// Create a point from its components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate this point by an offset
    #[must_use]
    pub const fn offset(self, delta: Self) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn neighbor_offsets_cover_four_directions() {
        let center = Point::new(3, 3);
        let neighbors: Vec<Point> = Point::NEIGHBOR_OFFSETS
            .iter()
            .map(|&delta| center.offset(delta))
            .collect();

        assert_eq!(
            neighbors,
            vec![
                Point::new(3, 2),
                Point::new(3, 4),
                Point::new(2, 3),
                Point::new(4, 3),
            ]
        );
    }
}
