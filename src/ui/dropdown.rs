use macroquad::prelude::*;

/// Dropdown selector with an optional colour swatch per item
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    items: Vec<(String, Option<Color>)>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        label: impl Into<String>,
        items: Vec<(String, Option<Color>)>,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height: 30.0,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    /// Get currently selected index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Set selected index; out-of-range indices are ignored
    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn draw_item(&self, index: usize, y: f32, background: Color) {
        let (text, swatch) = &self.items[index];
        draw_rectangle(self.x, y, self.width, self.height, background);
        let mut text_x = self.x + 5.0;
        if let Some(color) = swatch {
            draw_rectangle(self.x + 5.0, y + 8.0, 14.0, 14.0, *color);
            text_x += 20.0;
        }
        draw_text(text, text_x, y + 21.0, 16.0, WHITE);
    }

    /// Draw dropdown without handling interaction
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let button_color = if self.is_hovered_main(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        if !self.items.is_empty() {
            self.draw_item(self.selected, self.y, button_color);
        }
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);
        draw_text("v", self.x + self.width - 18.0, self.y + 21.0, 16.0, WHITE);

        if !self.is_open {
            return;
        }

        let menu_height = self.items.len() as f32 * self.height;
        for i in 0..self.items.len() {
            let item_y = self.item_y(i);
            let item_color = if self.is_hovered_item(mouse_pos, i) {
                Color::from_rgba(100, 149, 237, 255)
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };
            self.draw_item(i, item_y, item_color);
            draw_rectangle_lines(
                self.x,
                item_y,
                self.width,
                self.height,
                1.0,
                Color::from_rgba(80, 80, 80, 255),
            );
        }
        draw_rectangle_lines(self.x, self.y + self.height, self.width, menu_height, 2.0, WHITE);
    }

    /// Handle interaction and return true if selection changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }
        self.handle_click(mouse_pos)
    }

    /// Apply a left click at `mouse_pos`
    fn handle_click(&mut self, mouse_pos: (f32, f32)) -> bool {
        if self.is_hovered_main(mouse_pos) {
            self.is_open = !self.is_open;
            return false;
        }
        if !self.is_open {
            return false;
        }

        self.is_open = false;
        match (0..self.items.len()).find(|&i| self.is_hovered_item(mouse_pos, i)) {
            Some(i) if i != self.selected => {
                self.selected = i;
                true
            }
            _ => false,
        }
    }

    /// Whether the pointer is over the dropdown or its open menu
    pub fn is_hovered_any(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered_main(mouse_pos)
            || (self.is_open
                && (0..self.items.len()).any(|i| self.is_hovered_item(mouse_pos, i)))
    }

    fn item_y(&self, index: usize) -> f32 {
        self.y + self.height + index as f32 * self.height
    }

    fn is_hovered_main(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    fn is_hovered_item(&self, mouse_pos: (f32, f32), index: usize) -> bool {
        let item_y = self.item_y(index);
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= item_y
            && mouse_pos.1 <= item_y + self.height
    }
}
