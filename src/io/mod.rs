//! Input/output: CLI orchestration, image handling, rendering, reporting,
//! progress display, and error types

/// Command-line interface and run orchestration
pub mod cli;
/// Runtime defaults and rendering constants
pub mod configuration;
/// Error types for planning operations
pub mod error;
/// Image decoding, palette resolution, and PNG export
pub mod image;
/// Coverage progress display
pub mod progress;
/// Preview rendering
pub mod render;
/// Parts-list aggregation
pub mod report;
