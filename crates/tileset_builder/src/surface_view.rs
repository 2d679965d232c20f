//! Egui widget for the template editing surface
//!
//! Feeds egui pointer input into an [`EditingSurface`] and replays the
//! resulting [`SurfaceFrame`] onto an egui painter.

use bevy_egui::egui;
use tileset_builder_core::{
    DrawCommand, EditingSurface, PixelPos, PixelRect, PointerButton, Rgba, SurfaceError,
    SurfaceFrame, TileHover,
};

use crate::textures::{SurfaceImage, TerrainIcon};

/// The surface type used by the editor: bitmaps and icons are egui textures
pub type TemplateSurface = EditingSurface<SurfaceImage, TerrainIcon>;

/// What happened on the surface this frame
#[derive(Debug, Default)]
pub struct SurfaceViewResult {
    /// One hover per pointer move over the surface, in event order
    pub hovers: Vec<TileHover>,
    /// Error raised by a press (invalid terrain mode, click outside the grid)
    pub error: Option<SurfaceError>,
    /// The surface state changed
    pub changed: bool,
}

/// Convert a screen position to an unzoomed surface pixel
pub fn screen_to_surface(pos: egui::Pos2, origin: egui::Pos2, zoom: f32) -> PixelPos {
    let zoom = zoom.max(f32::EPSILON);
    PixelPos::new(
        ((pos.x - origin.x) / zoom).floor() as i32,
        ((pos.y - origin.y) / zoom).floor() as i32,
    )
}

/// Convert an unzoomed surface pixel to a screen position
pub fn surface_to_screen(pos: PixelPos, origin: egui::Pos2, zoom: f32) -> egui::Pos2 {
    egui::pos2(
        origin.x + pos.x as f32 * zoom,
        origin.y + pos.y as f32 * zoom,
    )
}

fn rect_to_screen(rect: PixelRect, origin: egui::Pos2, zoom: f32) -> egui::Rect {
    egui::Rect::from_min_max(
        surface_to_screen(rect.min, origin, zoom),
        surface_to_screen(rect.max(), origin, zoom),
    )
}

fn to_color32(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

fn to_pointer_button(button: egui::PointerButton) -> PointerButton {
    match button {
        egui::PointerButton::Primary => PointerButton::Primary,
        egui::PointerButton::Secondary => PointerButton::Secondary,
        egui::PointerButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

/// A pointer event for the surface, in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
enum PointerInput {
    Press {
        pos: egui::Pos2,
        button: egui::PointerButton,
    },
    Move {
        pos: egui::Pos2,
        held: Option<PointerButton>,
    },
}

/// Turn this frame's egui events into surface input, one entry per press or move.
///
/// `held_now` is the button down at the end of the frame. The button held
/// during each move is replayed from the press and release events.
fn pointer_inputs(events: &[egui::Event], held_now: Option<PointerButton>) -> Vec<PointerInput> {
    let mut held = events
        .iter()
        .find_map(|event| match event {
            egui::Event::PointerButton {
                button, pressed, ..
            } => Some(if *pressed {
                None
            } else {
                Some(to_pointer_button(*button))
            }),
            _ => None,
        })
        .unwrap_or(held_now);

    let mut inputs = Vec::new();
    for event in events {
        match event {
            egui::Event::PointerMoved(pos) => inputs.push(PointerInput::Move { pos: *pos, held }),
            egui::Event::PointerButton {
                pos,
                button,
                pressed: true,
                ..
            } => {
                held = Some(to_pointer_button(*button));
                inputs.push(PointerInput::Press {
                    pos: *pos,
                    button: *button,
                });
            }
            egui::Event::PointerButton {
                button,
                pressed: false,
                ..
            } => {
                if held == Some(to_pointer_button(*button)) {
                    held = None;
                }
            }
            _ => {}
        }
    }
    inputs
}

fn gather_pointer_input(ui: &egui::Ui) -> Vec<PointerInput> {
    ui.input(|i| {
        let held_now = if i.pointer.primary_down() {
            Some(PointerButton::Primary)
        } else if i.pointer.secondary_down() {
            Some(PointerButton::Secondary)
        } else if i.pointer.middle_down() {
            Some(PointerButton::Middle)
        } else {
            None
        };
        pointer_inputs(&i.events, held_now)
    })
}

/// Draw the surface and apply pointer input to it.
///
/// Shows a placeholder while no bitmap is assigned.
pub fn render_template_surface(
    ui: &mut egui::Ui,
    surface: &mut TemplateSurface,
    zoom: f32,
) -> SurfaceViewResult {
    let mut result = SurfaceViewResult::default();

    let Some((width, height)) = surface.bitmap().map(|b| (b.width, b.height)) else {
        ui.centered_and_justified(|ui| {
            ui.label("No tileset image loaded");
        });
        return result;
    };

    let desired_size = egui::vec2(width as f32 * zoom, height as f32 * zoom);
    let (response, painter) = ui.allocate_painter(desired_size, egui::Sense::click_and_drag());
    let origin = response.rect.min;

    // Apply input first so this frame already shows the edit
    // Moves keep tracking while a drag started here leaves the widget
    let tracking = response.hovered() || response.dragged();
    for input in gather_pointer_input(ui) {
        match input {
            PointerInput::Press { pos, button } => {
                if !response.hovered() || !response.rect.contains(pos) {
                    continue;
                }
                match surface.pointer_press(
                    screen_to_surface(pos, origin, zoom),
                    to_pointer_button(button),
                ) {
                    Ok(press) => result.changed |= press.redraw,
                    Err(e) => result.error = Some(e),
                }
            }
            PointerInput::Move { pos, held } => {
                if !tracking {
                    continue;
                }
                let moved = surface.pointer_move(screen_to_surface(pos, origin, zoom), held);
                result.changed |= moved.redraw;
                result.hovers.extend(moved.hover);
            }
        }
    }

    if let Some(frame) = surface.render() {
        paint_frame(&painter, &frame, origin, zoom);
    }

    if result.changed {
        ui.ctx().request_repaint();
    }

    result
}

/// Replay a frame onto an egui painter
pub fn paint_frame(
    painter: &egui::Painter,
    frame: &SurfaceFrame<'_, SurfaceImage, TerrainIcon>,
    origin: egui::Pos2,
    zoom: f32,
) {
    let full_uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));

    for command in frame.iter() {
        match command {
            DrawCommand::Bitmap { image, rect } => {
                painter.image(
                    image.texture_id,
                    rect_to_screen(*rect, origin, zoom),
                    full_uv,
                    egui::Color32::WHITE,
                );
            }
            DrawCommand::TerrainIcon { icon, rect, .. } => {
                if let Some(texture_id) = icon.texture_id {
                    painter.image(
                        texture_id,
                        rect_to_screen(*rect, origin, zoom),
                        full_uv,
                        egui::Color32::WHITE,
                    );
                }
            }
            DrawCommand::Highlight { rect, color } => {
                painter.rect_filled(rect_to_screen(*rect, origin, zoom), 0.0, to_color32(*color));
            }
            DrawCommand::Edge { edge, color } => {
                painter.line_segment(
                    [
                        surface_to_screen(edge.from, origin, zoom),
                        surface_to_screen(edge.to, origin, zoom),
                    ],
                    egui::Stroke::new(1.0, to_color32(*color)),
                );
            }
        }
    }
}
