//! Core data structures for tileset_builder
//!
//! This crate provides the headless model behind the template editing surface:
//! - `TileCoord` / `PixelPos` - grid and pixel addressing
//! - `TerrainGrid` - per-tile terrain classification codes
//! - `Template` / `TemplateList` - user-defined groups of tiles
//! - `template_outline` - boundary edges of a template
//! - `EditingSurface` - the pointer-driven editing state machine
//! - `SurfaceFrame` - draw commands produced by rendering the surface

mod coord;
mod error;
mod frame;
mod outline;
mod surface;
mod template;
mod terrain;

pub use coord::{PixelPos, TileCoord, TileHover};
pub use error::SurfaceError;
pub use frame::{DrawCommand, PixelRect, Rgba, SurfaceFrame, SurfaceStyle};
pub use outline::{cell_outline, template_outline, OutlineEdge, Side};
pub use surface::{
    parse_terrain_mode, BitmapSize, EditingSurface, ListenerId, PointerButton, SurfaceBitmap,
    SurfaceResponse, DEFAULT_TILE_SIZE,
};
pub use template::{Template, TemplateList};
pub use terrain::{TerrainGrid, UNCLASSIFIED};
