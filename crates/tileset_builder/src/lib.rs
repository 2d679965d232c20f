//! tileset_builder - tile template authoring surface for Bevy
//!
//! This crate hosts the editing surface from `tileset_builder_core` inside a
//! bevy_egui window:
//! - Renders the tileset bitmap with terrain markers and template outlines
//! - Click and drag to build templates, right-click to delete them
//! - Terrain classification mode paints per-tile terrain codes
//! - Reports the hovered tile through the `TileHoverChanged` message
//!
//! # Usage
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use tileset_builder::TilesetBuilderPlugin;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(TilesetBuilderPlugin::new().with_image("tiles/temperat.png"))
//!         .run();
//! }
//! ```

pub mod preferences;
pub mod shortcuts;
pub mod surface_view;
pub mod textures;
pub mod ui;

// Re-export the core crate
pub use tileset_builder_core;

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use std::path::PathBuf;
use tileset_builder_core::{SurfaceError, TemplateList, TileHover};

use preferences::{BuilderPreferences, MAX_ZOOM, MIN_ZOOM};
use shortcuts::handle_keyboard_shortcuts;
use surface_view::TemplateSurface;
use textures::{load_surface_textures, SurfaceTextureCache};
use ui::BuilderUiPlugin;

/// Terrain codes offered when no icon set is loaded
pub const FALLBACK_TERRAIN_CODES: u32 = 9;

/// Message sent on every pointer move over the surface
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileHoverChanged {
    pub x: i32,
    pub y: i32,
    /// `y * tiles_per_row + x`
    pub index: i64,
}

impl From<TileHover> for TileHoverChanged {
    fn from(hover: TileHover) -> Self {
        Self {
            x: hover.x,
            y: hover.y,
            index: hover.index,
        }
    }
}

/// Global builder state
#[derive(Resource)]
pub struct BuilderState {
    /// The editing surface
    pub surface: TemplateSurface,
    /// Surface zoom factor
    pub zoom: f32,
    /// Last hovered tile, for the status readout
    pub hover: Option<TileHoverChanged>,
    /// Last surface error, shown in the status bar
    pub last_error: Option<String>,

    // Load requests, consumed by the texture loading system
    pub requested_bitmap: Option<PathBuf>,
    pub requested_icons: Option<Vec<PathBuf>>,
}

impl Default for BuilderState {
    fn default() -> Self {
        Self {
            surface: TemplateSurface::new(),
            zoom: 2.0,
            hover: None,
            last_error: None,
            requested_bitmap: None,
            requested_icons: None,
        }
    }
}

impl BuilderState {
    /// Return to template editing
    pub fn set_template_mode(&mut self) {
        self.surface.set_input_mode(None);
    }

    /// Switch to terrain classification with the given code
    pub fn set_terrain_mode(&mut self, code: u32) {
        self.surface.set_terrain_code(code);
    }

    /// The terrain code being painted, if classifying
    pub fn terrain_mode(&self) -> Option<u32> {
        self.surface
            .input_mode()
            .and_then(|mode| tileset_builder_core::parse_terrain_mode(mode).ok())
    }

    /// Terrain codes the host offers for painting (code 0 means unclassified)
    pub fn terrain_codes(&self) -> std::ops::RangeInclusive<u32> {
        let icons = self.surface.icons().len() as u32;
        if icons > 1 {
            1..=icons - 1
        } else {
            1..=FALLBACK_TERRAIN_CODES
        }
    }

    /// Request a new tileset image. Templates from the previous image are dropped.
    pub fn open_image(&mut self, path: PathBuf) {
        self.surface.set_templates(Some(TemplateList::new()));
        self.hover = None;
        self.last_error = None;
        self.requested_bitmap = Some(path);
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Record a surface error for the status bar
    pub fn report_error(&mut self, error: &SurfaceError) {
        warn!("Surface input rejected: {}", error);
        self.last_error = Some(error.to_string());
    }
}

/// Configuration for initial builder state
///
/// Values set here take precedence over saved preferences.
#[derive(Clone, Debug, Default)]
pub struct BuilderStateConfig {
    pub tile_size: Option<u32>,
    pub show_terrain_types: Option<bool>,
    pub initial_zoom: Option<f32>,
}

/// Main builder plugin
///
/// # Example
///
/// ```rust,ignore
/// use bevy::prelude::*;
/// use tileset_builder::TilesetBuilderPlugin;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(
///         TilesetBuilderPlugin::new()
///             .with_image("tiles/snow.png")
///             .with_icons(["icons/clear.png", "icons/water.png"])
///             .with_tile_size(24)
///             .with_show_terrain_types(true)
///     )
///     .run();
/// ```
#[derive(Default)]
pub struct TilesetBuilderPlugin {
    /// Tileset image to open on startup
    pub image_path: Option<PathBuf>,
    /// Terrain icons, indexed by terrain code
    pub icon_paths: Vec<PathBuf>,
    /// Initial state configuration
    pub initial_state: BuilderStateConfig,
}

impl TilesetBuilderPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open this tileset image on startup
    pub fn with_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.image_path = Some(path.into());
        self
    }

    /// Terrain icons, the first one standing for code 0
    pub fn with_icons<P: Into<PathBuf>>(mut self, paths: impl IntoIterator<Item = P>) -> Self {
        self.icon_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.initial_state.tile_size = Some(tile_size);
        self
    }

    pub fn with_show_terrain_types(mut self, show: bool) -> Self {
        self.initial_state.show_terrain_types = Some(show);
        self
    }

    pub fn with_initial_zoom(mut self, zoom: f32) -> Self {
        self.initial_state.initial_zoom = Some(zoom.clamp(MIN_ZOOM, MAX_ZOOM));
        self
    }

    /// Build the initial state from preferences and plugin configuration
    fn initial_builder_state(&self, preferences: &BuilderPreferences) -> BuilderState {
        let mut state = BuilderState::default();

        let tile_size = self.initial_state.tile_size.unwrap_or(preferences.tile_size);
        if let Err(e) = state.surface.set_tile_size(tile_size) {
            error!("{}; keeping {} px tiles", e, state.surface.tile_size());
        }

        state.surface.set_show_terrain_types(
            self.initial_state
                .show_terrain_types
                .unwrap_or(preferences.show_terrain_types),
        );
        state.set_zoom(
            self.initial_state
                .initial_zoom
                .unwrap_or_else(|| preferences.clamped_zoom()),
        );

        state.requested_bitmap = self
            .image_path
            .clone()
            .or_else(|| preferences.last_image.as_ref().map(PathBuf::from));
        if !self.icon_paths.is_empty() {
            state.requested_icons = Some(self.icon_paths.clone());
        }

        state
    }
}

impl Plugin for TilesetBuilderPlugin {
    fn build(&self, app: &mut App) {
        let preferences = BuilderPreferences::load();
        bevy::log::info!("Loaded builder preferences");

        let state = self.initial_builder_state(&preferences);
        bevy::log::info!(
            "TilesetBuilderPlugin: {} px tiles, image {:?}",
            state.surface.tile_size(),
            state.requested_bitmap
        );

        app.add_plugins(EguiPlugin::default())
            .add_plugins(BuilderUiPlugin)
            .add_message::<TileHoverChanged>()
            .insert_resource(state)
            .insert_resource(preferences)
            .init_resource::<SurfaceTextureCache>()
            .add_systems(Startup, setup_builder_camera)
            .add_systems(
                Update,
                (load_surface_textures, handle_keyboard_shortcuts, track_hover),
            );
    }
}

/// Keep the last hovered tile for the status readout
fn track_hover(mut hovers: MessageReader<TileHoverChanged>, mut state: ResMut<BuilderState>) {
    if let Some(hover) = hovers.read().last() {
        state.hover = Some(*hover);
    }
}

/// Spawns a camera for egui if one doesn't exist
fn setup_builder_camera(mut commands: Commands, camera_query: Query<&Camera2d>) {
    if camera_query.is_empty() {
        commands.spawn(Camera2d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_message_from_tile_hover() {
        let hover = TileHover {
            x: 4,
            y: 2,
            index: 36,
        };
        assert_eq!(
            TileHoverChanged::from(hover),
            TileHoverChanged {
                x: 4,
                y: 2,
                index: 36
            }
        );
    }

    #[test]
    fn test_mode_switching() {
        let mut state = BuilderState::default();
        assert_eq!(state.terrain_mode(), None);

        state.set_terrain_mode(3);
        assert_eq!(state.terrain_mode(), Some(3));
        assert!(state.surface.is_classifying());

        state.set_template_mode();
        assert!(!state.surface.is_classifying());
    }

    #[test]
    fn test_open_image_clears_templates() {
        use tileset_builder_core::{PixelPos, PointerButton};

        let mut state = BuilderState::default();
        state
            .surface
            .pointer_press(PixelPos::new(5, 5), PointerButton::Primary)
            .unwrap();
        assert_eq!(state.surface.templates().map(|t| t.len()), Some(1));

        state.open_image(PathBuf::from("desert.png"));
        assert_eq!(state.surface.templates().map(|t| t.len()), Some(0));
        assert_eq!(state.requested_bitmap, Some(PathBuf::from("desert.png")));
    }

    #[test]
    fn test_terrain_codes_without_icons() {
        let state = BuilderState::default();
        assert_eq!(state.terrain_codes(), 1..=FALLBACK_TERRAIN_CODES);
    }

    #[test]
    fn test_plugin_config_overrides_preferences() {
        let mut preferences = BuilderPreferences::default();
        preferences.tile_size = 32;
        preferences.show_terrain_types = true;
        preferences.last_image = Some("old.png".to_string());

        let plugin = TilesetBuilderPlugin::new()
            .with_image("new.png")
            .with_tile_size(24)
            .with_show_terrain_types(false)
            .with_initial_zoom(100.0);
        let state = plugin.initial_builder_state(&preferences);

        assert_eq!(state.surface.tile_size(), 24);
        assert!(!state.surface.show_terrain_types());
        assert_eq!(state.zoom, MAX_ZOOM);
        assert_eq!(state.requested_bitmap, Some(PathBuf::from("new.png")));
        assert!(state.requested_icons.is_none());
    }

    #[test]
    fn test_preferences_fill_unset_config() {
        let mut preferences = BuilderPreferences::default();
        preferences.tile_size = 32;
        preferences.last_image = Some("old.png".to_string());

        let state = TilesetBuilderPlugin::new()
            .with_icons(["clear.png", "water.png"])
            .initial_builder_state(&preferences);

        assert_eq!(state.surface.tile_size(), 32);
        assert_eq!(state.requested_bitmap, Some(PathBuf::from("old.png")));
        assert_eq!(state.requested_icons.map(|icons| icons.len()), Some(2));
    }

    #[test]
    fn test_zero_tile_size_keeps_default() {
        let state = TilesetBuilderPlugin::new()
            .with_tile_size(0)
            .initial_builder_state(&BuilderPreferences::default());
        assert_eq!(
            state.surface.tile_size(),
            tileset_builder_core::DEFAULT_TILE_SIZE
        );
    }
}
