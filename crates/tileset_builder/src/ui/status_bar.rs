//! Status bar: hovered tile, templates and the last error

use bevy_egui::egui;

use super::theme::BuilderTheme;
use crate::textures::{ImageLoadState, SurfaceTextureCache};
use crate::{BuilderState, TileHoverChanged};

/// Hover readout, e.g. `Tile (3, 1) #23`
pub fn hover_text(hover: Option<&TileHoverChanged>) -> String {
    match hover {
        Some(hover) => format!("Tile ({}, {}) #{}", hover.x, hover.y, hover.index),
        None => "Tile -".to_string(),
    }
}

/// Render the status bar
pub fn render_status_bar(
    ctx: &egui::Context,
    state: &mut BuilderState,
    cache: &SurfaceTextureCache,
) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(hover_text(state.hover.as_ref()));
            ui.separator();

            if let ImageLoadState::Loading = cache.bitmap_state() {
                ui.spinner();
                ui.label("Loading image...");
                ui.separator();
            }

            let count = state.surface.templates().map_or(0, |t| t.len());
            ui.label(format!("{} templates", count));

            // Current template, renamable in place
            if let Some(index) = state.surface.current_template_index() {
                ui.separator();
                let mut name = state
                    .surface
                    .current_template()
                    .map(|t| t.name.clone())
                    .unwrap_or_default();
                let cells = state.surface.current_template().map_or(0, |t| t.len());
                ui.label("Current:");
                if ui
                    .add(egui::TextEdit::singleline(&mut name).desired_width(120.0))
                    .changed()
                {
                    state.surface.rename_template(index, name);
                }
                ui.label(format!("({} tiles)", cells));
            }

            if let Some(error) = &state.last_error {
                ui.separator();
                ui.colored_label(BuilderTheme::TEXT_ERROR, error);
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_text() {
        let hover = TileHoverChanged {
            x: 3,
            y: 1,
            index: 23,
        };
        assert_eq!(hover_text(Some(&hover)), "Tile (3, 1) #23");
        assert_eq!(hover_text(None), "Tile -");
    }
}
