mod button;
mod dropdown;
mod text_box;

pub use button::{Button, ButtonAction};
pub use dropdown::Dropdown;
pub use text_box::{MAX_MESSAGE_LEN, TextBox};

// Layout helpers are functions so the panel follows window resizes
use macroquad::prelude::screen_width;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
/// Minimum window height that fits the whole panel
pub const PANEL_MIN_HEIGHT: f32 = 680.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Create panel buttons; the play button label follows the run state
pub fn create_buttons(is_running: bool) -> Vec<Button> {
    let px = panel_x();
    let play = if is_running { "Pause" } else { "Play" };
    [
        (play, ButtonAction::TogglePlay),
        ("Clear", ButtonAction::Clear),
        ("Stamp", ButtonAction::Stamp),
        ("Clear + Stamp", ButtonAction::ClearAndStamp),
        ("Heart", ButtonAction::DropHeart),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (label, action))| {
        Button::new(
            px,
            150.0 + i as f32 * (BUTTON_HEIGHT + 8.0),
            PANEL_WIDTH,
            BUTTON_HEIGHT,
            label,
            action,
        )
    })
    .collect()
}
