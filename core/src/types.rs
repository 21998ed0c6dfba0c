//! Shared primitive types used across the viewer.

use serde::{Deserialize, Serialize};

/// One axis of a grid coordinate. Signed and 64 bits wide so the galaxy
/// is effectively unbounded in every direction.
pub type SeedCoord = i64;

/// A frame counter. One frame = one input step.
pub type FrameIndex = u64;

/// A grid cell address. The same pair always yields the same body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoordinate {
    pub seed_x: SeedCoord,
    pub seed_y: SeedCoord,
}

impl GridCoordinate {
    pub const fn new(seed_x: SeedCoord, seed_y: SeedCoord) -> Self {
        Self { seed_x, seed_y }
    }
}

/// A pixel position on the logical screen. Origin top-left, y down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenPos {
    pub x: i64,
    pub y: i64,
}

impl ScreenPos {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}
