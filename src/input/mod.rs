use macroquad::prelude::*;

use crate::application::{BRUSHES, GameState, Viewport};
use crate::ui::{Button, ButtonAction};

/// Paint with the left mouse button while the pointer is over the grid.
/// Runs between ticks, so it never races a sweep.
pub fn handle_mouse_paint(state: &mut GameState, viewport: &Viewport, mouse_pos: (f32, f32)) {
    if !is_mouse_button_down(MouseButton::Left) {
        return;
    }
    if !viewport.contains(state.sim.grid().dimensions(), mouse_pos.0, mouse_pos.1) {
        return;
    }
    let (gx, gy) = viewport.screen_to_grid(mouse_pos.0, mouse_pos.1);
    state.paint(gx, gy);
}

/// Keyboard shortcuts; skipped entirely while the message box has focus
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 3] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::Up, |s| s.adjust_speed(1)),
        (KeyCode::Down, |s| s.adjust_speed(-1)),
    ];

    let mut new_state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    if is_key_pressed(KeyCode::C) {
        new_state = new_state.clear();
    }
    if is_key_pressed(KeyCode::H) {
        new_state.drop_heart();
    }

    let brush_keys = [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4];
    for (key, (cell, _)) in brush_keys.iter().zip(BRUSHES) {
        if is_key_pressed(*key) {
            new_state.set_brush(cell);
        }
    }

    new_state
}

/// Apply a button's action to the state
pub fn apply_action(mut state: GameState, action: ButtonAction, message: &str) -> GameState {
    match action {
        ButtonAction::TogglePlay => state.toggle_running(),
        ButtonAction::Clear => state.clear(),
        ButtonAction::Stamp => state.stamp(message),
        ButtonAction::ClearAndStamp => state.clear_and_stamp(message),
        ButtonAction::DropHeart => {
            state.drop_heart();
            state
        }
    }
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: GameState,
    buttons: &[Button],
    mouse_pos: (f32, f32),
    message: &str,
) -> GameState {
    buttons.iter().fold(state, |s, btn| {
        if btn.is_clicked(mouse_pos) {
            apply_action(s, btn.action, message)
        } else {
            s
        }
    })
}
