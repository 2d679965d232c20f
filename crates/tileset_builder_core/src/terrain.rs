//! Per-tile terrain classification grid

use serde::{Deserialize, Serialize};

use crate::{SurfaceError, TileCoord};

/// Terrain code meaning "not classified yet"
pub const UNCLASSIFIED: u32 = 0;

/// A fixed-size grid of terrain type codes, one per tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTerrainGrid")]
pub struct TerrainGrid {
    width: u32,
    height: u32,
    /// Row-major codes
    codes: Vec<u32>,
}

/// Unchecked serialized form, validated into a `TerrainGrid`
#[derive(Deserialize)]
struct RawTerrainGrid {
    width: u32,
    height: u32,
    codes: Vec<u32>,
}

impl TryFrom<RawTerrainGrid> for TerrainGrid {
    type Error = SurfaceError;

    fn try_from(raw: RawTerrainGrid) -> Result<Self, Self::Error> {
        if raw.codes.len() != raw.width as usize * raw.height as usize {
            return Err(SurfaceError::GridSizeMismatch {
                width: raw.width,
                height: raw.height,
                len: raw.codes.len(),
            });
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            codes: raw.codes,
        })
    }
}

impl TerrainGrid {
    /// Create a grid with every tile unclassified
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            codes: vec![UNCLASSIFIED; width as usize * height as usize],
        }
    }

    /// Create a grid covering a bitmap of the given pixel size.
    /// Partial tiles at the right and bottom edges are dropped.
    pub fn for_bitmap(pixel_width: u32, pixel_height: u32, tile_size: u32) -> Self {
        let ts = tile_size.max(1);
        Self::new(pixel_width / ts, pixel_height / ts)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether a coordinate lies inside the grid
    pub fn contains(&self, coord: TileCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    fn offset(&self, coord: TileCoord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.y as usize * self.width as usize + coord.x as usize)
    }

    /// Get the code at a coordinate, `None` when outside the grid
    pub fn get(&self, coord: TileCoord) -> Option<u32> {
        self.offset(coord).map(|i| self.codes[i])
    }

    /// Set the code at a coordinate
    pub fn set(&mut self, coord: TileCoord, code: u32) -> Result<(), SurfaceError> {
        let index = self.offset(coord).ok_or(SurfaceError::OutOfBounds {
            x: coord.x,
            y: coord.y,
            width: self.width,
            height: self.height,
        })?;
        self.codes[index] = code;
        Ok(())
    }

    /// Iterate over every classified tile as `(coord, code)`, row by row
    pub fn classified(&self) -> impl Iterator<Item = (TileCoord, u32)> + '_ {
        let width = self.width.max(1);
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, &code)| code != UNCLASSIFIED)
            .map(move |(i, &code)| {
                let i = i as u32;
                (TileCoord::new((i % width) as i32, (i / width) as i32), code)
            })
    }
}
