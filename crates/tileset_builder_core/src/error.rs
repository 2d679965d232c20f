//! Error types for surface operations

use std::num::ParseIntError;
use thiserror::Error;

/// Errors raised while applying pointer input to the editing surface
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The classification mode is not an integer terrain code
    #[error("invalid terrain mode '{mode}': {source}")]
    InvalidTerrainMode {
        mode: String,
        #[source]
        source: ParseIntError,
    },

    /// A pointer-derived coordinate lies outside the terrain grid
    #[error("tile ({x}, {y}) is outside the {width}x{height} terrain grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// Terrain painting was attempted before a terrain grid was assigned
    #[error("no terrain grid assigned to the surface")]
    NotInitialized,

    /// Tile size must be between 1 and `i32::MAX` pixels
    #[error("invalid tile size: {0}")]
    InvalidTileSize(u32),

    /// A terrain grid's code list does not cover `width * height` tiles
    #[error("terrain grid is {width}x{height} but holds {len} codes")]
    GridSizeMismatch { width: u32, height: u32, len: usize },
}
