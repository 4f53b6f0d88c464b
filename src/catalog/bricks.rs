//! Brick shape definitions and the rotation-augmented catalog

use crate::spatial::Point;

/// One purchasable brick shape with its unit cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickDefinition {
    /// Dense index of this definition within its catalog
    pub id: usize,
    /// Footprint width in pegs, >= 1
    pub width: i32,
    /// Footprint height in pegs, >= 1
    pub height: i32,
    /// Unit cost in cents
    pub cost: u32,
}

impl BrickDefinition {
    /// Footprint area in pegs
    pub const fn area(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// Every cell covered when anchored at `anchor`, row-major
    pub fn footprint(&self, anchor: Point) -> impl Iterator<Item = Point> {
        let (width, height) = (self.width, self.height);
        (0..height)
            .flat_map(move |dy| (0..width).map(move |dx| Point::new(anchor.x + dx, anchor.y + dy)))
    }
}

/// The fixed list of brick shapes available to the search
///
/// Definition ids are dense, 0-based, and stable for the catalog's lifetime.
#[derive(Debug, Clone)]
pub struct BrickCatalog {
    definitions: Vec<BrickDefinition>,
}

impl BrickCatalog {
    /// Build a catalog from `(width, height, cost_cents)` rows
    ///
    /// Every non-square source shape gets a 90-degree rotated companion
    /// appended after all source rows, with a fresh id, so the search can
    /// lay bricks either way.
    pub fn from_shapes(shapes: &[(i32, i32, u32)]) -> Self {
        let mut definitions: Vec<BrickDefinition> = shapes
            .iter()
            .enumerate()
            .map(|(id, &(width, height, cost))| BrickDefinition {
                id,
                width,
                height,
                cost,
            })
            .collect();

        let source_count = definitions.len();
        for index in 0..source_count {
            let Some(&definition) = definitions.get(index) else {
                continue;
            };
            if definition.width != definition.height {
                definitions.push(BrickDefinition {
                    id: definitions.len(),
                    width: definition.height,
                    height: definition.width,
                    cost: definition.cost,
                });
            }
        }

        Self { definitions }
    }

    /// Look up a definition by id
    pub fn get(&self, id: usize) -> Option<&BrickDefinition> {
        self.definitions.get(id)
    }

    /// Number of definitions, rotated variants included
    pub const fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the catalog holds no definitions
    pub const fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterate over definitions in id order
    pub fn iter(&self) -> std::slice::Iter<'_, BrickDefinition> {
        self.definitions.iter()
    }
}

impl<'a> IntoIterator for &'a BrickCatalog {
    type Item = &'a BrickDefinition;
    type IntoIter = std::slice::Iter<'a, BrickDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
