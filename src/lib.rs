//! Brick mosaic assembly planning from raster images
//!
//! Resolves an image against a fixed palette of brick colors, then searches
//! for a non-overlapping covering of every colored cell using bricks from a
//! priced shape catalog, keeping the total cost low under a bounded greedy
//! search or an exhaustive enumeration for small boards.

#![forbid(unsafe_code)]

/// Brick shapes, colors, and the catalog file format
pub mod catalog;
/// Input/output operations, rendering, reporting, and error handling
pub mod io;
/// Placement search engine: state, frontier generation, and search drivers
pub mod solver;
/// Grid coordinates and the resolved color board
pub mod spatial;

pub use io::error::{PlanError, Result};
