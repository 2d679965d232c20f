//! The template editing surface
//!
//! `EditingSurface` holds the state behind the template editor widget: the
//! source bitmap, the terrain grid and the template list. It turns pointer
//! presses and moves into edits, renders its state into a [`SurfaceFrame`],
//! and reports the hovered tile to registered listeners.
//!
//! The surface has two modes, chosen by the host through
//! [`EditingSurface::set_input_mode`]:
//! - *template editing* (no mode): primary click starts or selects a
//!   template, dragging extends the current one, secondary click deletes
//!   every template under the pointer.
//! - *terrain classification* (mode holds a terrain code): clicks write the
//!   code into the terrain grid.

use std::sync::Arc;

use crate::frame::{DrawCommand, PixelRect, SurfaceFrame, SurfaceStyle};
use crate::outline::cell_outline;
use crate::{PixelPos, SurfaceError, Template, TemplateList, TerrainGrid, TileCoord, TileHover};

/// Default edge length of a tile in pixels
pub const DEFAULT_TILE_SIZE: u32 = 24;

/// A bitmap the surface can display.
///
/// The surface only needs the pixel size; drawing is left to the host.
pub trait SurfaceBitmap {
    /// Width and height in pixels
    fn size(&self) -> (u32, u32);
}

/// A bitmap known only by its dimensions, for hosts that draw elsewhere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapSize {
    pub width: u32,
    pub height: u32,
}

impl BitmapSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl SurfaceBitmap for BitmapSize {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Pointer buttons the surface distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

/// Outcome of a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceResponse {
    /// Tile under the pointer
    pub coord: TileCoord,
    /// The surface state changed and should be repainted
    pub redraw: bool,
    /// Hover notification sent for this event (moves only)
    pub hover: Option<TileHover>,
}

impl SurfaceResponse {
    fn new(coord: TileCoord, redraw: bool) -> Self {
        Self {
            coord,
            redraw,
            hover: None,
        }
    }
}

/// Handle returned by [`EditingSurface::on_hover`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type HoverListener = Box<dyn FnMut(TileHover) + Send + Sync>;

/// Parse a classification mode into a terrain code
pub fn parse_terrain_mode(mode: &str) -> Result<u32, SurfaceError> {
    mode.trim()
        .parse::<u32>()
        .map_err(|source| SurfaceError::InvalidTerrainMode {
            mode: mode.to_string(),
            source,
        })
}

/// Interactive template editing surface.
///
/// `B` is the host's bitmap type and `I` its terrain icon type. Both are
/// shared with the host through `Arc`.
pub struct EditingSurface<B, I> {
    bitmap: Option<Arc<B>>,
    terrain: Option<TerrainGrid>,
    templates: Option<TemplateList>,
    icons: Arc<[I]>,
    input_mode: Option<String>,
    tile_size: u32,
    tiles_per_row: u32,
    show_terrain_types: bool,
    style: SurfaceStyle,
    /// Index into `templates` of the template receiving drag input
    current: Option<usize>,
    templates_created: u32,
    listeners: Vec<(ListenerId, HoverListener)>,
    next_listener_id: u64,
}

impl<B, I> Default for EditingSurface<B, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B, I> EditingSurface<B, I> {
    /// Create an empty surface. Nothing renders until a bitmap and terrain
    /// grid are assigned.
    pub fn new() -> Self {
        Self {
            bitmap: None,
            terrain: None,
            templates: Some(TemplateList::new()),
            icons: Arc::from(Vec::new()),
            input_mode: None,
            tile_size: DEFAULT_TILE_SIZE,
            tiles_per_row: 0,
            show_terrain_types: false,
            style: SurfaceStyle::default(),
            current: None,
            templates_created: 0,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    // ---------------------------------------------------------------------
    // Host assignments
    // ---------------------------------------------------------------------

    pub fn set_bitmap(&mut self, bitmap: Option<Arc<B>>) {
        self.bitmap = bitmap;
    }

    pub fn set_terrain_grid(&mut self, grid: Option<TerrainGrid>) {
        self.terrain = grid;
    }

    /// Replace the template list. Clears the current template.
    pub fn set_templates(&mut self, templates: Option<TemplateList>) {
        self.templates = templates;
        self.current = None;
    }

    /// Take the template list out, leaving the surface without one
    pub fn take_templates(&mut self) -> Option<TemplateList> {
        self.current = None;
        self.templates.take()
    }

    pub fn set_tile_size(&mut self, tile_size: u32) -> Result<(), SurfaceError> {
        if tile_size == 0 || tile_size > i32::MAX as u32 {
            return Err(SurfaceError::InvalidTileSize(tile_size));
        }
        self.tile_size = tile_size;
        Ok(())
    }

    pub fn set_tiles_per_row(&mut self, tiles_per_row: u32) {
        self.tiles_per_row = tiles_per_row;
    }

    pub fn set_icons(&mut self, icons: Arc<[I]>) {
        self.icons = icons;
    }

    pub fn set_show_terrain_types(&mut self, show: bool) {
        self.show_terrain_types = show;
    }

    /// Set the classification mode. `None` returns to template editing.
    ///
    /// The string is only parsed when a tile is pressed, so an invalid mode
    /// surfaces as an error from [`EditingSurface::pointer_press`].
    pub fn set_input_mode(&mut self, mode: Option<String>) {
        self.input_mode = mode;
    }

    /// Switch to terrain classification with the given code
    pub fn set_terrain_code(&mut self, code: u32) {
        self.input_mode = Some(code.to_string());
    }

    pub fn set_style(&mut self, style: SurfaceStyle) {
        self.style = style;
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn bitmap(&self) -> Option<&Arc<B>> {
        self.bitmap.as_ref()
    }

    pub fn terrain_grid(&self) -> Option<&TerrainGrid> {
        self.terrain.as_ref()
    }

    pub fn templates(&self) -> Option<&TemplateList> {
        self.templates.as_ref()
    }

    pub fn icons(&self) -> &Arc<[I]> {
        &self.icons
    }

    pub fn input_mode(&self) -> Option<&str> {
        self.input_mode.as_deref()
    }

    /// True when clicks classify terrain instead of editing templates
    pub fn is_classifying(&self) -> bool {
        self.input_mode.is_some()
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn tiles_per_row(&self) -> u32 {
        self.tiles_per_row
    }

    pub fn show_terrain_types(&self) -> bool {
        self.show_terrain_types
    }

    pub fn style(&self) -> &SurfaceStyle {
        &self.style
    }

    pub fn current_template_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_template(&self) -> Option<&Template> {
        self.templates.as_ref()?.get(self.current?)
    }

    /// Rename a template. Returns false if the index is out of range.
    pub fn rename_template(&mut self, index: usize, name: impl Into<String>) -> bool {
        match self.templates.as_mut().and_then(|list| list.get_mut(index)) {
            Some(template) => {
                template.name = name.into();
                true
            }
            None => false,
        }
    }

    // ---------------------------------------------------------------------
    // Hover listeners
    // ---------------------------------------------------------------------

    /// Register a listener called with the hovered tile on every pointer move
    pub fn on_hover<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(TileHover) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Detach a hover listener. Returns false if it was not registered.
    pub fn remove_hover_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    // ---------------------------------------------------------------------
    // Pointer input
    // ---------------------------------------------------------------------

    /// Handle a button press at a surface pixel position
    pub fn pointer_press(
        &mut self,
        pos: PixelPos,
        button: PointerButton,
    ) -> Result<SurfaceResponse, SurfaceError> {
        let coord = TileCoord::from_pixel(pos, self.tile_size);

        let Some(mode) = self.input_mode.as_deref() else {
            let templates = self
                .templates
                .as_mut()
                .ok_or(SurfaceError::NotInitialized)?;

            return Ok(match button {
                PointerButton::Primary => {
                    let index = match templates.find_containing(coord) {
                        Some(index) => index,
                        None => {
                            self.templates_created += 1;
                            let name = format!("Template {}", self.templates_created);
                            templates.push(Template::new(name, coord))
                        }
                    };
                    self.current = Some(index);
                    SurfaceResponse::new(coord, true)
                }
                PointerButton::Secondary => {
                    templates.remove_containing(coord);
                    self.current = None;
                    SurfaceResponse::new(coord, true)
                }
                PointerButton::Middle | PointerButton::Other => {
                    SurfaceResponse::new(coord, false)
                }
            });
        };

        let code = parse_terrain_mode(mode)?;
        let grid = self.terrain.as_mut().ok_or(SurfaceError::NotInitialized)?;
        grid.set(coord, code)?;
        Ok(SurfaceResponse::new(coord, true))
    }

    /// Handle pointer motion. `held` is the button held down, if any.
    ///
    /// Every call notifies the hover listeners exactly once.
    pub fn pointer_move(&mut self, pos: PixelPos, held: Option<PointerButton>) -> SurfaceResponse {
        let coord = TileCoord::from_pixel(pos, self.tile_size);
        let mut redraw = false;

        if self.input_mode.is_none() && held == Some(PointerButton::Primary) {
            if let (Some(index), Some(templates)) = (self.current, self.templates.as_mut()) {
                if let Some(template) = templates.get_mut(index) {
                    redraw = template.insert(coord);
                }
            }
        }

        let hover = TileHover::new(coord, self.tiles_per_row);
        for (_, listener) in self.listeners.iter_mut() {
            listener(hover);
        }

        SurfaceResponse {
            coord,
            redraw,
            hover: Some(hover),
        }
    }
}

impl<B: SurfaceBitmap, I> EditingSurface<B, I> {
    /// Create a surface ready for editing: a zeroed terrain grid covering the
    /// bitmap, an empty template list and `tiles_per_row` taken from its width.
    pub fn from_bitmap(bitmap: Arc<B>, tile_size: u32) -> Result<Self, SurfaceError> {
        let mut surface = Self::new();
        surface.set_tile_size(tile_size)?;
        surface.attach_bitmap(bitmap);
        Ok(surface)
    }

    /// Assign a bitmap and rebuild the terrain grid to match it.
    /// Existing templates are kept.
    pub fn attach_bitmap(&mut self, bitmap: Arc<B>) {
        let (width, height) = bitmap.size();
        let grid = TerrainGrid::for_bitmap(width, height, self.tile_size);
        self.tiles_per_row = grid.width();
        self.terrain = Some(grid);
        self.bitmap = Some(bitmap);
    }

    /// Render the current state.
    ///
    /// Returns `None` while the bitmap, terrain grid or template list is
    /// unset.
    pub fn render(&self) -> Option<SurfaceFrame<'_, B, I>> {
        let bitmap = self.bitmap.as_deref()?;
        let terrain = self.terrain.as_ref()?;
        let templates = self.templates.as_ref()?;

        let ts = self.tile_size;
        let mut frame = SurfaceFrame::new();

        let (width, height) = bitmap.size();
        frame.push(DrawCommand::Bitmap {
            image: bitmap,
            rect: PixelRect::new(0, 0, width, height),
        });

        if self.show_terrain_types {
            let inset = self.style.icon_inset as i32;
            for (coord, code) in terrain.classified() {
                // Codes without an icon have nothing to show
                let Some(icon) = self.icons.get(code as usize) else {
                    continue;
                };
                let origin = coord.to_pixel(ts);
                frame.push(DrawCommand::TerrainIcon {
                    icon,
                    code,
                    rect: PixelRect::new(
                        origin.x + inset,
                        origin.y + inset,
                        self.style.icon_size,
                        self.style.icon_size,
                    ),
                });
            }
        }

        for (index, template) in templates.iter().enumerate() {
            let is_current = self.current == Some(index);
            for cell in template.sorted_cells() {
                if is_current {
                    let origin = cell.to_pixel(ts);
                    frame.push(DrawCommand::Highlight {
                        rect: PixelRect::new(origin.x, origin.y, ts, ts),
                        color: self.style.highlight,
                    });
                }
                for edge in cell_outline(template, cell, ts) {
                    frame.push(DrawCommand::Edge {
                        edge,
                        color: self.style.outline,
                    });
                }
            }
        }

        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    const TS: u32 = 24;

    type TestSurface = EditingSurface<BitmapSize, &'static str>;

    /// 8x4 tiles
    fn surface() -> TestSurface {
        EditingSurface::from_bitmap(Arc::new(BitmapSize::new(8 * TS, 4 * TS)), TS).unwrap()
    }

    /// Pixel position in the middle of a tile
    fn at(x: i32, y: i32) -> PixelPos {
        let ts = TS as i32;
        PixelPos::new(x * ts + ts / 2, y * ts + ts / 2)
    }

    fn click(surface: &mut TestSurface, x: i32, y: i32) {
        surface
            .pointer_press(at(x, y), PointerButton::Primary)
            .unwrap();
    }

    fn drag(surface: &mut TestSurface, x: i32, y: i32) -> SurfaceResponse {
        surface.pointer_move(at(x, y), Some(PointerButton::Primary))
    }

    fn template_count(surface: &TestSurface) -> usize {
        surface.templates().map(|t| t.len()).unwrap_or(0)
    }

    #[test]
    fn test_from_bitmap() {
        let surface = surface();
        assert_eq!(surface.tiles_per_row(), 8);
        let grid = surface.terrain_grid().unwrap();
        assert_eq!((grid.width(), grid.height()), (8, 4));
        assert_eq!(template_count(&surface), 0);
        assert!(!surface.is_classifying());
    }

    #[test]
    fn test_zero_tile_size_rejected() {
        let result = TestSurface::from_bitmap(Arc::new(BitmapSize::new(64, 64)), 0);
        assert!(matches!(result, Err(SurfaceError::InvalidTileSize(0))));
    }

    #[test]
    fn test_oversized_tile_size_rejected() {
        let mut surface = TestSurface::new();
        let too_big = i32::MAX as u32 + 1;

        assert_eq!(
            surface.set_tile_size(too_big),
            Err(SurfaceError::InvalidTileSize(too_big))
        );
        assert_eq!(
            surface.set_tile_size(u32::MAX),
            Err(SurfaceError::InvalidTileSize(u32::MAX))
        );
        assert_eq!(surface.tile_size(), DEFAULT_TILE_SIZE);

        surface.set_tile_size(i32::MAX as u32).unwrap();
        assert_eq!(surface.tile_size(), i32::MAX as u32);
    }

    #[test]
    fn test_clicks_create_distinct_templates() {
        let mut surface = surface();
        click(&mut surface, 1, 1);
        click(&mut surface, 4, 2);

        let templates = surface.templates().unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(
            templates.get(0).unwrap().sorted_cells(),
            vec![TileCoord::new(1, 1)]
        );
        assert_eq!(
            templates.get(1).unwrap().sorted_cells(),
            vec![TileCoord::new(4, 2)]
        );
        assert_ne!(templates.get(0).unwrap().id, templates.get(1).unwrap().id);
        assert_eq!(templates.get(1).unwrap().name, "Template 2");
        assert_eq!(surface.current_template_index(), Some(1));
    }

    #[test]
    fn test_click_inside_existing_template_selects_it() {
        let mut surface = surface();
        click(&mut surface, 2, 2);
        drag(&mut surface, 3, 2);
        click(&mut surface, 6, 0);
        assert_eq!(surface.current_template_index(), Some(1));

        let before = surface.templates().unwrap().get(0).unwrap().clone();
        click(&mut surface, 3, 2);

        assert_eq!(template_count(&surface), 2);
        assert_eq!(surface.current_template_index(), Some(0));
        assert_eq!(surface.current_template(), Some(&before));
    }

    #[test]
    fn test_secondary_click_removes_whole_template() {
        let mut surface = surface();
        click(&mut surface, 0, 0);
        drag(&mut surface, 1, 0);
        drag(&mut surface, 2, 0);
        click(&mut surface, 5, 3);

        let response = surface
            .pointer_press(at(1, 0), PointerButton::Secondary)
            .unwrap();
        assert!(response.redraw);

        let templates = surface.templates().unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates.find_containing(TileCoord::new(0, 0)), None);
        assert_eq!(templates.find_containing(TileCoord::new(2, 0)), None);
        assert_eq!(surface.current_template_index(), None);
    }

    #[test]
    fn test_secondary_click_removes_overlapping_templates() {
        let mut surface = TestSurface::from_bitmap(Arc::new(BitmapSize::new(96, 96)), TS).unwrap();
        surface.set_templates(Some(TemplateList::from(vec![
            Template::new("A", TileCoord::new(1, 1)),
            Template::from_cells("B", [TileCoord::new(1, 1), TileCoord::new(2, 1)]),
            Template::new("C", TileCoord::new(0, 0)),
        ])));

        surface
            .pointer_press(at(1, 1), PointerButton::Secondary)
            .unwrap();

        let templates = surface.templates().unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates.get(0).unwrap().name, "C");
    }

    #[test]
    fn test_drag_extends_current_template() {
        let mut surface = surface();
        click(&mut surface, 2, 2);
        assert!(drag(&mut surface, 2, 3).redraw);
        assert!(drag(&mut surface, 3, 3).redraw);
        // Revisiting a member cell changes nothing
        assert!(!drag(&mut surface, 2, 3).redraw);

        let template = surface.current_template().unwrap();
        assert_eq!(
            template.sorted_cells(),
            vec![
                TileCoord::new(2, 2),
                TileCoord::new(2, 3),
                TileCoord::new(3, 3)
            ]
        );
    }

    #[test]
    fn test_drag_requires_primary_and_current_template() {
        let mut surface = surface();

        // No current template yet
        drag(&mut surface, 1, 1);
        assert_eq!(template_count(&surface), 0);

        click(&mut surface, 0, 0);
        surface.pointer_move(at(1, 0), None);
        surface.pointer_move(at(2, 0), Some(PointerButton::Secondary));
        assert_eq!(surface.current_template().unwrap().len(), 1);

        // Deleting clears the current template, so later drags do nothing
        surface
            .pointer_press(at(0, 0), PointerButton::Secondary)
            .unwrap();
        drag(&mut surface, 3, 0);
        assert_eq!(template_count(&surface), 0);
    }

    #[test]
    fn test_drag_accepts_cells_outside_bitmap() {
        let mut surface = surface();
        click(&mut surface, 7, 3);
        drag(&mut surface, 8, 3);
        assert!(surface
            .current_template()
            .unwrap()
            .contains(TileCoord::new(8, 3)));
    }

    #[test]
    fn test_terrain_mode_sets_grid_without_templates() {
        let mut surface = surface();
        surface.set_input_mode(Some("3".to_string()));

        let response = surface
            .pointer_press(at(1, 1), PointerButton::Primary)
            .unwrap();
        assert!(response.redraw);
        assert_eq!(
            surface.terrain_grid().unwrap().get(TileCoord::new(1, 1)),
            Some(3)
        );

        surface
            .pointer_press(at(1, 1), PointerButton::Primary)
            .unwrap();
        assert_eq!(template_count(&surface), 0);

        // Drags do not touch templates either
        drag(&mut surface, 2, 1);
        assert_eq!(template_count(&surface), 0);
    }

    #[test]
    fn test_terrain_mode_applies_to_any_button() {
        let mut surface = surface();
        surface.set_terrain_code(2);
        surface
            .pointer_press(at(0, 3), PointerButton::Secondary)
            .unwrap();
        assert_eq!(
            surface.terrain_grid().unwrap().get(TileCoord::new(0, 3)),
            Some(2)
        );
    }

    #[test]
    fn test_invalid_terrain_mode() {
        let mut surface = surface();
        surface.set_input_mode(Some("water".to_string()));

        let err = surface
            .pointer_press(at(0, 0), PointerButton::Primary)
            .unwrap_err();
        assert!(matches!(err, SurfaceError::InvalidTerrainMode { ref mode, .. } if mode == "water"));
        assert_eq!(surface.terrain_grid().unwrap().classified().count(), 0);
    }

    #[test]
    fn test_terrain_click_outside_grid() {
        let mut surface = surface();
        surface.set_terrain_code(1);

        let err = surface
            .pointer_press(at(8, 0), PointerButton::Primary)
            .unwrap_err();
        assert!(matches!(err, SurfaceError::OutOfBounds { x: 8, y: 0, .. }));
    }

    #[test]
    fn test_terrain_click_without_grid() {
        let mut surface = TestSurface::new();
        surface.set_terrain_code(1);
        let err = surface
            .pointer_press(at(0, 0), PointerButton::Primary)
            .unwrap_err();
        assert_eq!(err, SurfaceError::NotInitialized);
    }

    #[test]
    fn test_every_move_notifies_hover_once() {
        let mut surface = surface();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        surface.on_hover(move |hover| sink.lock().unwrap().push(hover));

        surface.pointer_move(at(3, 2), None);
        surface.pointer_move(at(3, 2), Some(PointerButton::Primary));
        surface.set_terrain_code(4);
        surface.pointer_move(at(7, 1), Some(PointerButton::Secondary));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen[0],
            TileHover {
                x: 3,
                y: 2,
                index: 19
            }
        );
        assert_eq!(seen[2].index, 15);
    }

    #[test]
    fn test_move_response_carries_hover() {
        let mut surface = surface();
        let response = surface.pointer_move(at(5, 3), None);
        assert_eq!(response.coord, TileCoord::new(5, 3));
        assert_eq!(response.hover.map(|h| h.index), Some(29));
        assert!(!response.redraw);
    }

    #[test]
    fn test_remove_hover_listener() {
        let mut surface = surface();
        let count = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&count);
        let id = surface.on_hover(move |_| *sink.lock().unwrap() += 1);

        surface.pointer_move(at(0, 0), None);
        assert!(surface.remove_hover_listener(id));
        assert!(!surface.remove_hover_listener(id));
        surface.pointer_move(at(1, 0), None);

        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[test]
    fn test_render_requires_state() {
        let mut surface = TestSurface::new();
        assert!(surface.render().is_none());

        surface.set_bitmap(Some(Arc::new(BitmapSize::new(48, 48))));
        assert!(surface.render().is_none());

        surface.set_terrain_grid(Some(TerrainGrid::new(2, 2)));
        assert!(surface.render().is_some());

        surface.take_templates();
        assert!(surface.render().is_none());
    }

    #[test]
    fn test_render_bitmap_first() {
        let surface = surface();
        let frame = surface.render().unwrap();
        assert_eq!(frame.len(), 1);
        assert_eq!(
            frame.commands[0],
            DrawCommand::Bitmap {
                image: &BitmapSize::new(8 * TS, 4 * TS),
                rect: PixelRect::new(0, 0, 8 * TS, 4 * TS),
            }
        );
    }

    #[test]
    fn test_render_terrain_icons() {
        let mut surface = surface();
        surface.set_icons(Arc::from(vec!["none", "clear", "water"]));
        surface.set_terrain_code(2);
        surface
            .pointer_press(at(1, 2), PointerButton::Primary)
            .unwrap();
        // No icon for code 9
        surface.set_terrain_code(9);
        surface
            .pointer_press(at(0, 0), PointerButton::Primary)
            .unwrap();

        // Hidden until the overlay is enabled
        assert_eq!(surface.render().unwrap().len(), 1);

        surface.set_show_terrain_types(true);
        let frame = surface.render().unwrap();
        assert_eq!(frame.len(), 2);
        assert_eq!(
            frame.commands[1],
            DrawCommand::TerrainIcon {
                icon: &"water",
                code: 2,
                rect: PixelRect::new(TS as i32 + 8, 2 * TS as i32 + 8, 16, 16),
            }
        );
    }

    #[test]
    fn test_render_highlights_only_current_template() {
        let mut surface = surface();
        click(&mut surface, 0, 0);
        drag(&mut surface, 1, 0);
        click(&mut surface, 5, 2);

        let frame = surface.render().unwrap();
        // Only the single-cell current template is filled
        assert_eq!(frame.highlight_count(), 1);
        // 2x1 template has 6 edges, the single cell has 4
        assert_eq!(frame.edge_count(), 10);

        let highlight = frame
            .iter()
            .find_map(|c| match c {
                DrawCommand::Highlight { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .unwrap();
        assert_eq!(highlight.0, PixelRect::new(5 * TS as i32, 2 * TS as i32, TS, TS));
        assert_eq!(highlight.1, surface.style().highlight);
    }

    #[test]
    fn test_render_after_delete_has_no_highlight() {
        let mut surface = surface();
        click(&mut surface, 1, 1);
        click(&mut surface, 3, 3);
        surface
            .pointer_press(at(3, 3), PointerButton::Secondary)
            .unwrap();

        let frame = surface.render().unwrap();
        assert_eq!(frame.highlight_count(), 0);
        assert_eq!(frame.edge_count(), 4);
    }

    #[test]
    fn test_rename_template() {
        let mut surface = surface();
        click(&mut surface, 0, 0);
        assert!(surface.rename_template(0, "Cliff"));
        assert!(!surface.rename_template(3, "Nope"));
        assert_eq!(surface.current_template().unwrap().name, "Cliff");
    }

    #[test]
    fn test_parse_terrain_mode() {
        assert_eq!(parse_terrain_mode("7"), Ok(7));
        assert_eq!(parse_terrain_mode(" 12 "), Ok(12));
        assert!(parse_terrain_mode("").is_err());
        assert!(parse_terrain_mode("-1").is_err());
    }
}
