use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::*;
use tracing::info;

use falling_sand::{
    Config, GameState, Viewport,
    application::BRUSHES,
    input,
    rendering::{self, GridRenderer, palette},
    ui::{self, Dropdown, TextBox},
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn window_conf(config: &Config) -> Conf {
    let (grid_w, grid_h) = config.grid_pixel_size();
    Conf {
        window_title: "Falling Sand".to_owned(),
        window_width: (grid_w + ui::PANEL_WIDTH) as i32,
        window_height: grid_h.max(ui::PANEL_MIN_HEIGHT) as i32,
        window_resizable: true,
        ..Default::default()
    }
}

fn main() -> Result<()> {
    init_tracing();
    let config = Config::parse();
    config.validate().context("invalid configuration")?;
    info!(
        width = config.width,
        height = config.height,
        scale = config.scale,
        "Starting falling sand"
    );

    macroquad::Window::from_config(window_conf(&config), run(config));
    Ok(())
}

async fn run(config: Config) {
    let mut state = GameState::from_config(&config);
    let viewport = Viewport::new(config.scale);
    let mut renderer = GridRenderer::new(state.sim.grid());

    let brush_items = BRUSHES
        .iter()
        .map(|(cell, name)| {
            let [r, g, b, a] = palette(*cell);
            (name.to_string(), Some(Color::from_rgba(r, g, b, a)))
        })
        .collect();
    let mut brush_dropdown = Dropdown::new(ui::panel_x(), 40.0, ui::PANEL_WIDTH, "Brush", brush_items);
    let mut text_box = TextBox::new(ui::panel_x(), 100.0, ui::PANEL_WIDTH, config.message.clone());

    loop {
        let mouse_pos = mouse_position();

        // Follow window resizes
        let px = ui::panel_x();
        brush_dropdown.set_position(px, 40.0);
        text_box.set_position(px, 100.0);
        let buttons = ui::create_buttons(state.is_running);

        // An open menu swallows the click that closes it
        let menu_active = brush_dropdown.is_hovered_any(mouse_pos);
        if brush_dropdown.update(mouse_pos) {
            state.set_brush(BRUSHES[brush_dropdown.selected()].0);
        }

        if text_box.update(mouse_pos) {
            state = state.stamp(text_box.text());
        }

        if !menu_active {
            state = input::process_button_clicks(state, &buttons, mouse_pos, text_box.text());
            input::handle_mouse_paint(&mut state, &viewport, mouse_pos);
        }
        if !text_box.is_focused() {
            state = input::process_keyboard_input(state);
            if let Some(i) = BRUSHES.iter().position(|(cell, _)| *cell == state.brush) {
                brush_dropdown.set_selected(i);
            }
        }

        // One sweep per frame (or more when sped up), after all edits
        state = state.tick();

        let render_start = std::time::Instant::now();
        clear_background(BLACK);
        renderer.draw(state.sim.grid(), &viewport);
        rendering::draw_brush_preview(&state, &viewport, mouse_pos);
        rendering::draw_controls(&state, &buttons, &brush_dropdown, &text_box, mouse_pos);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
