//! Toolbar UI for mode selection, overlay and zoom

use bevy_egui::egui;
use std::path::PathBuf;

use crate::preferences::BuilderPreferences;
use crate::shortcuts::ZOOM_STEP;
use crate::BuilderState;

/// What the toolbar changed this frame
#[derive(Debug, Default)]
pub struct ToolbarResult {
    /// Preferences were edited and should be saved
    pub preferences_changed: bool,
    /// A tileset image was picked
    pub open_image: Option<PathBuf>,
}

/// Render the toolbar
pub fn render_toolbar(
    ctx: &egui::Context,
    state: &mut BuilderState,
    preferences: &mut BuilderPreferences,
) -> ToolbarResult {
    let mut result = ToolbarResult::default();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            #[cfg(feature = "native")]
            {
                if ui.button("Open Image...").clicked() {
                    result.open_image = rfd::FileDialog::new()
                        .add_filter("Images", &["png", "jpg", "jpeg", "bmp"])
                        .pick_file();
                }
                ui.separator();
            }

            // Mode selection
            ui.label("Mode:");
            let terrain_mode = state.terrain_mode();
            if ui
                .selectable_label(!state.surface.is_classifying(), "Templates")
                .on_hover_text("Click to add tiles, right-click to delete a template (Esc)")
                .clicked()
            {
                state.set_template_mode();
            }

            let mode_text = match terrain_mode {
                Some(code) => format!("Terrain {}", code),
                None => "Terrain".to_string(),
            };
            egui::ComboBox::from_id_salt("terrain_mode")
                .selected_text(mode_text)
                .show_ui(ui, |ui| {
                    for code in state.terrain_codes() {
                        let label = terrain_label(state, code);
                        if ui
                            .selectable_label(terrain_mode == Some(code), label)
                            .clicked()
                        {
                            state.set_terrain_mode(code);
                        }
                    }
                });

            ui.separator();

            let mut show = state.surface.show_terrain_types();
            if ui
                .checkbox(&mut show, "Show terrain")
                .on_hover_text("Draw terrain markers over classified tiles (T)")
                .changed()
            {
                state.surface.set_show_terrain_types(show);
                preferences.show_terrain_types = show;
                result.preferences_changed = true;
            }

            ui.separator();

            // Zoom
            ui.label("Zoom:");
            if ui.small_button("-").on_hover_text("Zoom out (-)").clicked() {
                let zoom = state.zoom / ZOOM_STEP;
                state.set_zoom(zoom);
                preferences.zoom = state.zoom;
                result.preferences_changed = true;
            }
            ui.label(format!("{:.0}%", state.zoom * 100.0));
            if ui.small_button("+").on_hover_text("Zoom in (+)").clicked() {
                let zoom = state.zoom * ZOOM_STEP;
                state.set_zoom(zoom);
                preferences.zoom = state.zoom;
                result.preferences_changed = true;
            }
        });
    });

    result
}

/// Menu label for a terrain code, named after its icon file when there is one
fn terrain_label(state: &BuilderState, code: u32) -> String {
    state
        .surface
        .icons()
        .get(code as usize)
        .and_then(|icon| icon.path.file_stem())
        .map(|stem| format!("{}: {}", code, stem.to_string_lossy()))
        .unwrap_or_else(|| code.to_string())
}
