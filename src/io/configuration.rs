//! Runtime defaults and rendering constants

/// Default edge length of one rendered peg block, in pixels
pub const DEFAULT_TILE_SIZE: u32 = 8;

/// Per-channel lightening applied to brick edge pixels in previews
pub const EDGE_HIGHLIGHT: u8 = 25;

/// Suffix added to the output stem for the resolved-board preview
pub const RESOLVED_SUFFIX: &str = "_resolved";

/// Suffix added to the output stem for the final plan render
pub const PLAN_SUFFIX: &str = "_plan";

/// File-name prefix for per-step progress frames
pub const FRAME_PREFIX: &str = "step";
