use macroquad::prelude::*;

/// What a panel button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    TogglePlay,
    Clear,
    Stamp,
    ClearAndStamp,
    DropHeart,
}

/// Button UI component with hover and click detection
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    pub action: ButtonAction,
}

impl Button {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        text: impl Into<String>,
        action: ButtonAction,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            action,
        }
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text_size = measure_text(&self.text, None, 18, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            18.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_bounds_are_inclusive() {
        let btn = Button::new(10.0, 20.0, 100.0, 30.0, "Clear", ButtonAction::Clear);
        assert!(btn.is_hovered((10.0, 20.0)));
        assert!(btn.is_hovered((110.0, 50.0)));
        assert!(!btn.is_hovered((9.9, 25.0)));
        assert!(!btn.is_hovered((50.0, 50.1)));
    }
}
