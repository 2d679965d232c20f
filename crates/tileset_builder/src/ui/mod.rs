//! Builder UI: toolbar, template surface and status bar

mod status_bar;
mod theme;
mod toolbar;

pub use status_bar::{hover_text, render_status_bar};
pub use theme::BuilderTheme;
pub use toolbar::{render_toolbar, ToolbarResult};

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::preferences::BuilderPreferences;
use crate::surface_view::render_template_surface;
use crate::textures::SurfaceTextureCache;
use crate::{BuilderState, TileHoverChanged};

/// Plugin for the builder UI
pub struct BuilderUiPlugin;

impl Plugin for BuilderUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, render_ui);
    }
}

/// Main UI rendering system
fn render_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<BuilderState>,
    mut preferences: ResMut<BuilderPreferences>,
    cache: Res<SurfaceTextureCache>,
    mut hovers: MessageWriter<TileHoverChanged>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    BuilderTheme::apply(ctx);

    let toolbar = render_toolbar(ctx, &mut state, &mut preferences);
    let mut preferences_changed = toolbar.preferences_changed;

    if let Some(path) = toolbar.open_image {
        info!("Opening tileset image: {}", path.display());
        preferences.last_image = Some(path.to_string_lossy().to_string());
        preferences_changed = true;
        state.open_image(path);
    }

    render_status_bar(ctx, &mut state, &cache);

    // Central panel - the surface, scrollable when zoomed in
    let zoom = state.zoom;
    let view = egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(BuilderTheme::BG_SURFACE))
        .show(ctx, |ui| {
            egui::ScrollArea::both()
                .drag_to_scroll(false)
                .show(ui, |ui| render_template_surface(ui, &mut state.surface, zoom))
                .inner
        })
        .inner;

    for hover in &view.hovers {
        hovers.write((*hover).into());
    }

    if let Some(error) = &view.error {
        state.report_error(error);
    } else if view.changed {
        state.last_error = None;
    }

    if preferences_changed {
        if let Err(e) = preferences.save() {
            warn!("Failed to save preferences: {}", e);
        }
    }
}
