//! Tile and pixel coordinates

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// A position in surface pixel space (unzoomed, relative to the bitmap origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelPos {
    pub x: i32,
    pub y: i32,
}

impl PixelPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A (column, row) address in the tile grid
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct TileCoord {
    pub x: i32,
    pub y: i32,
}

impl TileCoord {
    pub const LEFT: TileCoord = TileCoord::new(-1, 0);
    pub const RIGHT: TileCoord = TileCoord::new(1, 0);
    pub const DOWN: TileCoord = TileCoord::new(0, 1);
    pub const UP: TileCoord = TileCoord::new(0, -1);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert a pixel position to the tile containing it.
    ///
    /// Uses plain integer division, so positions left of or above the origin
    /// truncate toward zero and nothing is clamped to the grid.
    pub fn from_pixel(pos: PixelPos, tile_size: u32) -> Self {
        let ts = pixel_tile_size(tile_size).max(1);
        Self {
            x: pos.x / ts,
            y: pos.y / ts,
        }
    }

    /// Top-left pixel of this tile
    pub fn to_pixel(self, tile_size: u32) -> PixelPos {
        let ts = pixel_tile_size(tile_size);
        PixelPos::new(self.x * ts, self.y * ts)
    }

    /// Row-major index of this tile in a grid `tiles_per_row` wide
    pub fn linear_index(self, tiles_per_row: u32) -> i64 {
        self.y as i64 * tiles_per_row as i64 + self.x as i64
    }
}

/// Tile size as a pixel offset; sizes past `i32::MAX` saturate
fn pixel_tile_size(tile_size: u32) -> i32 {
    i32::try_from(tile_size).unwrap_or(i32::MAX)
}

impl Add for TileCoord {
    type Output = TileCoord;

    fn add(self, rhs: TileCoord) -> TileCoord {
        TileCoord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(i32, i32)> for TileCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Payload of a hover notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileHover {
    /// Column under the pointer
    pub x: i32,
    /// Row under the pointer
    pub y: i32,
    /// `y * tiles_per_row + x`
    pub index: i64,
}

impl TileHover {
    pub fn new(coord: TileCoord, tiles_per_row: u32) -> Self {
        Self {
            x: coord.x,
            y: coord.y,
            index: coord.linear_index(tiles_per_row),
        }
    }

    pub fn coord(&self) -> TileCoord {
        TileCoord::new(self.x, self.y)
    }
}
