//! User preferences persisted between sessions

mod file;

pub use file::PreferencesError;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use tileset_builder_core::DEFAULT_TILE_SIZE;

/// Smallest and largest zoom factors the surface supports
pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 8.0;

/// Builder preferences
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderPreferences {
    /// Show terrain icons over classified tiles
    pub show_terrain_types: bool,
    /// Surface zoom factor
    pub zoom: f32,
    /// Tile size used when none is given on the command line
    pub tile_size: u32,
    /// Last tileset image opened
    pub last_image: Option<String>,
}

impl Default for BuilderPreferences {
    fn default() -> Self {
        Self {
            show_terrain_types: true,
            zoom: 2.0,
            tile_size: DEFAULT_TILE_SIZE,
            last_image: None,
        }
    }
}

impl BuilderPreferences {
    /// Zoom clamped to the supported range
    pub fn clamped_zoom(&self) -> f32 {
        self.zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    }
}
