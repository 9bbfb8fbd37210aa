use macroquad::prelude::*;
use rayon::prelude::*;

use crate::application::{BRUSHES, GameState, Viewport};
use crate::domain::{CellType, Grid};
use crate::ui::{Button, Dropdown, TextBox, PANEL_WIDTH, panel_x};

/// Fixed RGBA palette, one entry per cell type
pub const fn palette(cell: CellType) -> [u8; 4] {
    match cell {
        CellType::Empty => [17, 17, 17, 255],
        CellType::Sand => [194, 178, 128, 255],
        CellType::Water => [60, 120, 220, 255],
        CellType::Stone => [120, 120, 120, 255],
    }
}

/// Write the grid into a row-major RGBA8 buffer of `width * height * 4` bytes.
/// Rows are filled in parallel; the grid is only read.
pub fn fill_rgba(grid: &Grid, pixels: &mut [u8]) {
    let width = grid.width();
    if width == 0 {
        return;
    }
    pixels
        .par_chunks_mut(width * 4)
        .zip(grid.cells().par_chunks(width))
        .for_each(|(row_pixels, row_cells)| {
            for (px, &cell) in row_pixels.chunks_exact_mut(4).zip(row_cells) {
                px.copy_from_slice(&palette(cell));
            }
        });
}

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Blits the grid through a CPU image and a nearest-filtered texture
pub struct GridRenderer {
    image: Image,
    texture: Texture2D,
}

impl GridRenderer {
    /// Needs a live macroquad context
    pub fn new(grid: &Grid) -> Self {
        let image = Image::gen_image_color(grid.width() as u16, grid.height() as u16, BLACK);
        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Nearest);
        Self { image, texture }
    }

    pub fn draw(&mut self, grid: &Grid, viewport: &Viewport) {
        fill_rgba(grid, &mut self.image.bytes);
        self.texture.update(&self.image);

        let (w, h) = viewport.screen_size(grid.dimensions());
        draw_texture_ex(
            &self.texture,
            viewport.origin_x,
            viewport.origin_y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(w, h)),
                ..Default::default()
            },
        );
    }
}

/// Outline the brush footprint under the cursor
pub fn draw_brush_preview(state: &GameState, viewport: &Viewport, mouse_pos: (f32, f32)) {
    if !viewport.contains(state.sim.grid().dimensions(), mouse_pos.0, mouse_pos.1) {
        return;
    }
    // Inside the grid, so both coordinates are non-negative
    let (gx, gy) = viewport.screen_to_grid(mouse_pos.0, mouse_pos.1);
    let (sx, sy) = viewport.grid_to_screen(gx as usize, gy as usize);
    let [r, g, b, _] = palette(state.brush);
    let half = viewport.scale / 2.0;
    let radius = (state.brush_radius as f32 + 0.5) * viewport.scale;
    draw_circle_lines(
        sx + half,
        sy + half,
        radius,
        1.0,
        Color::from_rgba(r, g, b, 200),
    );
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with buttons, brush picker, message box and stats
pub fn draw_controls(
    state: &GameState,
    buttons: &[Button],
    brush_dropdown: &Dropdown,
    text_box: &TextBox,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));
    text_box.draw();

    let px = panel_x();
    let controls = [
        ("Controls:", 385.0, 14.0, WHITE),
        ("LMB: Paint", 400.0, 12.0, GRAY),
        ("Space: Play/Pause", 413.0, 12.0, GRAY),
        ("C: Clear  H: Heart", 426.0, 12.0, GRAY),
        ("1-4: Brush", 439.0, 12.0, GRAY),
        ("Up/Down: Speed", 452.0, 12.0, GRAY),
    ];
    controls.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    let grid = state.sim.grid();
    let [_, sand, water, stone] = grid.counts();
    let (gw, gh) = grid.dimensions();
    let stats = [
        format!("Grid: {}x{}", gw, gh),
        format!("Sand: {}", format_number(sand)),
        format!("Water: {}", format_number(water)),
        format!("Stone: {}", format_number(stone)),
        format!("Tick: {}", state.sim.tick()),
        format!("Speed: {} tick/frame", state.ticks_per_frame),
        format!("Step: {:.1}ms", state.last_step_time_ms),
        format!("Render: {:.1}ms", state.last_render_time_ms),
        format!("FPS: {}", get_fps()),
    ];
    for (i, line) in stats.iter().enumerate() {
        draw_text(line, px, 480.0 + i as f32 * 15.0, 13.0, LIGHTGRAY);
    }

    let (status, color) = if state.is_running {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    };
    draw_text(status, px, 625.0, 16.0, color);

    let brush_name = BRUSHES
        .iter()
        .find(|(cell, _)| *cell == state.brush)
        .map_or("?", |(_, name)| *name);
    draw_text(&format!("Brush: {}", brush_name), px, 645.0, 14.0, WHITE);

    // Drawn last so the open menu sits on top
    brush_dropdown.draw(mouse_pos);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_opaque_and_distinct() {
        let colors: Vec<_> = CellType::ALL.iter().map(|&c| palette(c)).collect();
        assert!(colors.iter().all(|c| c[3] == 255));
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_fill_rgba_maps_each_cell() {
        let mut grid = Grid::new(3, 2);
        grid.set(0, 0, CellType::Sand);
        grid.set(2, 1, CellType::Water);
        let mut pixels = vec![0u8; 3 * 2 * 4];
        fill_rgba(&grid, &mut pixels);
        assert_eq!(&pixels[0..4], &palette(CellType::Sand));
        assert_eq!(&pixels[4..8], &palette(CellType::Empty));
        assert_eq!(&pixels[20..24], &palette(CellType::Water));
    }

    #[test]
    fn test_fill_rgba_zero_width() {
        let grid = Grid::new(0, 5);
        let mut pixels = Vec::new();
        fill_rgba(&grid, &mut pixels);
        assert!(pixels.is_empty());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(60_000), "60.0K");
        assert_eq!(format_number(2_500_000), "2.5M");
    }
}
