//! Brick shapes, colors, and the catalog file format

/// Shape definitions and the rotation-augmented catalog
pub mod bricks;
/// Color values and the fixed palette
pub mod colors;
/// Plain-text catalog file parsing
pub mod loader;

pub use bricks::{BrickCatalog, BrickDefinition};
pub use colors::{BrickColor, Palette, PaletteEntry};
pub use loader::{CatalogFile, load_catalog, parse_catalog};
