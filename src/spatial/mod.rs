//! Spatial primitives: grid coordinates and the resolved color board

/// Read-only per-cell color indices for a board
pub mod board;
/// Integer 2D coordinates
pub mod point;

pub use board::{ColorBoard, NO_COLOR};
pub use point::Point;
