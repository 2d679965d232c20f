//! Tileset bitmap and terrain icon loading
//!
//! Images are loaded through the `AssetServer`, registered with egui, and
//! handed to the editing surface once every pending load has finished.

use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiTextureHandle};
use std::path::PathBuf;
use std::sync::Arc;
use tileset_builder_core::SurfaceBitmap;

use crate::BuilderState;

/// The tileset bitmap as displayed by the surface
#[derive(Debug, Clone)]
pub struct SurfaceImage {
    pub handle: Handle<Image>,
    pub texture_id: egui::TextureId,
    pub width: u32,
    pub height: u32,
    pub path: PathBuf,
}

impl SurfaceBitmap for SurfaceImage {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// A terrain marker icon. `texture_id` is `None` when the image failed to load.
#[derive(Debug, Clone)]
pub struct TerrainIcon {
    pub texture_id: Option<egui::TextureId>,
    pub path: PathBuf,
}

/// State of an image load operation
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ImageLoadState {
    /// Not yet started loading
    #[default]
    Pending,
    /// Currently loading
    Loading,
    /// Successfully loaded
    Loaded,
    /// Failed to load
    Failed(String),
}

/// One image the cache is tracking
#[derive(Debug, Clone)]
pub struct TrackedImage {
    pub path: PathBuf,
    pub handle: Handle<Image>,
    pub state: ImageLoadState,
    /// Set once loaded: (texture id, width, height)
    pub texture: Option<(egui::TextureId, u32, u32)>,
}

impl TrackedImage {
    fn new(path: PathBuf, handle: Handle<Image>) -> Self {
        Self {
            path,
            handle,
            state: ImageLoadState::Loading,
            texture: None,
        }
    }

    fn is_settled(&self) -> bool {
        matches!(
            self.state,
            ImageLoadState::Loaded | ImageLoadState::Failed(_)
        )
    }
}

/// Resource to track surface texture loading
#[derive(Resource, Default)]
pub struct SurfaceTextureCache {
    /// The tileset bitmap being loaded or shown
    pub bitmap: Option<TrackedImage>,
    /// Terrain icons, indexed by terrain code
    pub icons: Vec<TrackedImage>,
    /// Whether the loaded bitmap has been handed to the surface
    pub bitmap_installed: bool,
    /// Whether the loaded icons have been handed to the surface
    pub icons_installed: bool,
}

impl SurfaceTextureCache {
    /// Load state of the tileset bitmap
    pub fn bitmap_state(&self) -> ImageLoadState {
        self.bitmap
            .as_ref()
            .map(|image| image.state.clone())
            .unwrap_or_default()
    }
}

/// Convert a path to a format Bevy's AssetServer can load
pub fn to_asset_path(path: &std::path::Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Poll a tracked image, registering it with egui once loaded
fn poll_image(
    image: &mut TrackedImage,
    asset_server: &AssetServer,
    images: &Assets<Image>,
    contexts: &mut EguiContexts,
) {
    if image.is_settled() {
        return;
    }

    match asset_server.load_state(&image.handle) {
        LoadState::Loaded => {
            if let Some(loaded) = images.get(&image.handle) {
                let texture_id = contexts.add_image(EguiTextureHandle::Strong(image.handle.clone()));
                image.texture = Some((texture_id, loaded.width(), loaded.height()));
                image.state = ImageLoadState::Loaded;
            }
        }
        LoadState::Failed(_) => {
            let message = format!("Failed to load: {}", image.path.display());
            warn!("{}", message);
            image.state = ImageLoadState::Failed(message);
        }
        LoadState::Loading | LoadState::NotLoaded => {}
    }
}

/// System to load the requested bitmap and icons and install them on the surface
pub fn load_surface_textures(
    mut state: ResMut<BuilderState>,
    mut cache: ResMut<SurfaceTextureCache>,
    mut contexts: EguiContexts,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
) {
    // Start loads for new requests
    if let Some(path) = state.requested_bitmap.take() {
        info!("Loading tileset image: {}", path.display());
        let handle: Handle<Image> = asset_server.load(to_asset_path(&path));
        cache.bitmap = Some(TrackedImage::new(path, handle));
        cache.bitmap_installed = false;
    }
    if let Some(paths) = state.requested_icons.take() {
        info!("Loading {} terrain icons", paths.len());
        cache.icons = paths
            .into_iter()
            .map(|path| {
                let handle: Handle<Image> = asset_server.load(to_asset_path(&path));
                TrackedImage::new(path, handle)
            })
            .collect();
        cache.icons_installed = false;
    }

    let cache = &mut *cache;

    if let Some(bitmap) = cache.bitmap.as_mut() {
        poll_image(bitmap, &asset_server, &images, &mut contexts);

        if !cache.bitmap_installed && bitmap.is_settled() {
            cache.bitmap_installed = true;
            match bitmap.texture {
                Some((texture_id, width, height)) => {
                    let image = SurfaceImage {
                        handle: bitmap.handle.clone(),
                        texture_id,
                        width,
                        height,
                        path: bitmap.path.clone(),
                    };
                    state.surface.attach_bitmap(Arc::new(image));
                    info!(
                        "Tileset image ready: {}x{} px, {} tiles per row",
                        width,
                        height,
                        state.surface.tiles_per_row()
                    );
                }
                None => {
                    state.last_error = Some(format!(
                        "Could not load tileset image {}",
                        bitmap.path.display()
                    ));
                }
            }
        }
    }

    for icon in cache.icons.iter_mut() {
        poll_image(icon, &asset_server, &images, &mut contexts);
    }

    if !cache.icons_installed && cache.icons.iter().all(TrackedImage::is_settled) {
        cache.icons_installed = true;
        if cache.icons.is_empty() {
            return;
        }
        // A failed icon still occupies its code's slot
        let icons: Vec<TerrainIcon> = cache
            .icons
            .iter()
            .map(|icon| TerrainIcon {
                texture_id: icon.texture.map(|(id, _, _)| id),
                path: icon.path.clone(),
            })
            .collect();
        state.surface.set_icons(Arc::from(icons));
    }
}
