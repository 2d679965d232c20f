//! Draw commands produced by rendering the editing surface
//!
//! The surface renders into a [`SurfaceFrame`], a flat list of commands in
//! surface pixel space. Hosts replay the list onto whatever painter they use.

use serde::{Deserialize, Serialize};

use crate::{OutlineEdge, PixelPos};

/// An 8-bit RGBA colour (unmultiplied)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub min: PixelPos,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            min: PixelPos::new(x, y),
            width,
            height,
        }
    }

    pub fn max(&self) -> PixelPos {
        PixelPos::new(
            self.min.x + self.width as i32,
            self.min.y + self.height as i32,
        )
    }
}

/// Colours and sizes used when rendering the surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceStyle {
    /// Fill for the cells of the current template
    pub highlight: Rgba,
    /// Template boundary colour
    pub outline: Rgba,
    /// Offset of terrain icons from the tile's top-left corner
    pub icon_inset: u32,
    /// Terrain icons are drawn as squares of this size
    pub icon_size: u32,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            highlight: Rgba::WHITE.with_alpha(60),
            outline: Rgba::WHITE,
            icon_inset: 8,
            icon_size: 16,
        }
    }
}

/// A single draw operation
#[derive(Debug, PartialEq)]
pub enum DrawCommand<'a, B, I> {
    /// The tileset bitmap at native size
    Bitmap { image: &'a B, rect: PixelRect },
    /// A terrain marker icon
    TerrainIcon {
        icon: &'a I,
        code: u32,
        rect: PixelRect,
    },
    /// A filled cell of the current template
    Highlight { rect: PixelRect, color: Rgba },
    /// One boundary segment of a template
    Edge { edge: OutlineEdge, color: Rgba },
}

/// Ordered draw commands for one repaint
#[derive(Debug, PartialEq)]
pub struct SurfaceFrame<'a, B, I> {
    pub commands: Vec<DrawCommand<'a, B, I>>,
}

impl<'a, B, I> SurfaceFrame<'a, B, I> {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand<'a, B, I>) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand<'a, B, I>> {
        self.commands.iter()
    }

    /// Number of outline segments in the frame
    pub fn edge_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Edge { .. }))
            .count()
    }

    /// Number of highlighted cells in the frame
    pub fn highlight_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Highlight { .. }))
            .count()
    }
}

impl<'a, B, I> Default for SurfaceFrame<'a, B, I> {
    fn default() -> Self {
        Self::new()
    }
}
