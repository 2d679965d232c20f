//! Keyboard shortcut handling

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::preferences::BuilderPreferences;
use crate::BuilderState;

/// Zoom step for the +/- keys and toolbar buttons
pub const ZOOM_STEP: f32 = 1.25;

const DIGIT_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// Terrain code bound to a digit key
fn terrain_code_for_key(key: KeyCode) -> Option<u32> {
    DIGIT_KEYS
        .iter()
        .position(|digit| *digit == key)
        .map(|i| i as u32 + 1)
}

/// Handle keyboard shortcuts
pub fn handle_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut state: ResMut<BuilderState>,
    mut preferences: ResMut<BuilderPreferences>,
) {
    // Skip while typing into a text field
    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.wants_keyboard_input() {
            return;
        }
    }

    // Escape - back to template editing
    if keyboard.just_pressed(KeyCode::Escape) {
        state.set_template_mode();
    }

    // 1-9 - paint that terrain code
    let codes = state.terrain_codes();
    if let Some(code) = keyboard
        .get_just_pressed()
        .filter_map(|key| terrain_code_for_key(*key))
        .find(|code| codes.contains(code))
    {
        state.set_terrain_mode(code);
    }

    let mut preferences_changed = false;

    // T - toggle terrain overlay
    if keyboard.just_pressed(KeyCode::KeyT) {
        let show = !state.surface.show_terrain_types();
        state.surface.set_show_terrain_types(show);
        preferences.show_terrain_types = show;
        preferences_changed = true;
    }

    // +/- zoom
    if keyboard.just_pressed(KeyCode::Equal) || keyboard.just_pressed(KeyCode::NumpadAdd) {
        let zoom = state.zoom * ZOOM_STEP;
        state.set_zoom(zoom);
        preferences.zoom = state.zoom;
        preferences_changed = true;
    }
    if keyboard.just_pressed(KeyCode::Minus) || keyboard.just_pressed(KeyCode::NumpadSubtract) {
        let zoom = state.zoom / ZOOM_STEP;
        state.set_zoom(zoom);
        preferences.zoom = state.zoom;
        preferences_changed = true;
    }

    if preferences_changed {
        if let Err(e) = preferences.save() {
            warn!("Failed to save preferences: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_code_for_key() {
        assert_eq!(terrain_code_for_key(KeyCode::Digit1), Some(1));
        assert_eq!(terrain_code_for_key(KeyCode::Digit9), Some(9));
        assert_eq!(terrain_code_for_key(KeyCode::Digit0), None);
        assert_eq!(terrain_code_for_key(KeyCode::KeyT), None);
    }
}
