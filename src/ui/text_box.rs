use macroquad::prelude::*;

/// Longest message the box accepts
pub const MAX_MESSAGE_LEN: usize = 32;

/// Single-line text input for the stamp message
#[derive(Clone)]
pub struct TextBox {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    focused: bool,
}

impl TextBox {
    pub fn new(x: f32, y: f32, width: f32, text: impl Into<String>) -> Self {
        let text: String = text.into();
        let text = text.chars().take(MAX_MESSAGE_LEN).collect();
        Self {
            x,
            y,
            width,
            height: 30.0,
            text,
            focused: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Append a printable ASCII character; anything else is dropped
    pub fn push_char(&mut self, c: char) {
        if (c.is_ascii_graphic() || c == ' ') && self.text.len() < MAX_MESSAGE_LEN {
            self.text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Handle focus and typing for this frame.
    /// Returns true when Enter is pressed while focused.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if is_mouse_button_pressed(MouseButton::Left) {
            self.focused = self.is_hovered(mouse_pos);
        }
        if !self.focused {
            // Drain the queue so keys typed elsewhere don't show up later
            while get_char_pressed().is_some() {}
            return false;
        }

        while let Some(c) = get_char_pressed() {
            self.push_char(c);
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.backspace();
        }
        if is_key_pressed(KeyCode::Escape) {
            self.focused = false;
        }
        is_key_pressed(KeyCode::Enter)
    }

    pub fn draw(&self) {
        draw_text("Message", self.x, self.y - 5.0, 14.0, GRAY);
        draw_rectangle(
            self.x,
            self.y,
            self.width,
            self.height,
            Color::from_rgba(45, 45, 45, 255),
        );
        let border = if self.focused { YELLOW } else { WHITE };
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, border);

        // Show the tail when the text is wider than the box
        let mut shown = self.text.as_str();
        while !shown.is_empty() && measure_text(shown, None, 16, 1.0).width > self.width - 12.0 {
            shown = &shown[shown.chars().next().map_or(0, char::len_utf8)..];
        }
        let caret = if self.focused { "_" } else { "" };
        draw_text(
            &format!("{shown}{caret}"),
            self.x + 5.0,
            self.y + 21.0,
            16.0,
            WHITE,
        );
    }
}
