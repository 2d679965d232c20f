//! Builder theme for egui
//!
//! A compact dark palette. The surface itself is painted with the tileset's
//! own colors, so the chrome stays neutral.

use bevy_egui::egui::{self, Color32, CornerRadius, Stroke, Visuals};

/// Dark flat theme colors
pub struct BuilderTheme;

impl BuilderTheme {
    /// Window background
    pub const BG_WINDOW: Color32 = Color32::from_rgb(40, 41, 47);

    /// Panel background
    pub const BG_PANEL: Color32 = Color32::from_rgb(52, 54, 60);

    /// Widget background
    pub const BG_WIDGET: Color32 = Color32::from_rgb(67, 68, 75);

    /// Hovered widget background
    pub const BG_HOVER: Color32 = Color32::from_rgb(85, 86, 94);

    /// Behind the surface, so transparent tileset pixels stand out
    pub const BG_SURFACE: Color32 = Color32::from_rgb(28, 28, 32);

    pub const BORDER: Color32 = Color32::from_rgb(85, 86, 90);

    /// Selected mode / active widget
    pub const ACCENT_BLUE: Color32 = Color32::from_rgb(45, 130, 209);

    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(185, 185, 187);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(140, 140, 144);
    pub const TEXT_WHITE: Color32 = Color32::WHITE;

    /// Status bar error text
    pub const TEXT_ERROR: Color32 = Color32::from_rgb(230, 110, 100);

    /// Apply the theme to an egui context
    pub fn apply(ctx: &egui::Context) {
        let mut visuals = Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        visuals.extreme_bg_color = Self::BG_SURFACE;
        visuals.popup_shadow = egui::Shadow::NONE;
        visuals.window_shadow = egui::Shadow::NONE;

        visuals.widgets.noninteractive.bg_fill = Self::BG_WIDGET;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, Self::TEXT_MUTED);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, Self::BORDER);

        visuals.widgets.inactive.bg_fill = Self::BG_WIDGET;
        visuals.widgets.inactive.weak_bg_fill = Self::BG_WIDGET;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.inactive.corner_radius = CornerRadius::same(4);

        visuals.widgets.hovered.bg_fill = Self::BG_HOVER;
        visuals.widgets.hovered.weak_bg_fill = Self::BG_HOVER;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Self::TEXT_WHITE);
        visuals.widgets.hovered.corner_radius = CornerRadius::same(4);

        visuals.widgets.active.bg_fill = Self::ACCENT_BLUE;
        visuals.widgets.active.weak_bg_fill = Self::ACCENT_BLUE;
        visuals.widgets.active.fg_stroke = Stroke::new(1.5, Self::TEXT_WHITE);
        visuals.widgets.active.corner_radius = CornerRadius::same(4);

        visuals.selection.bg_fill = Self::ACCENT_BLUE;
        visuals.selection.stroke = Stroke::new(1.0, Self::TEXT_WHITE);

        ctx.set_visuals(visuals);
    }
}
