use rand::Rng;
use tracing::{debug, info, trace};

use crate::config::{Config, DEFAULT_BRUSH_RADIUS, DEFAULT_TEXT_SCALE, MAX_TICKS_PER_FRAME};
use crate::domain::{CellType, Simulation, paint_circle, presets, stamp_centered};

/// Brushes offered by the UI, in dropdown order
pub const BRUSHES: [(CellType, &str); 4] = [
    (CellType::Sand, "Sand"),
    (CellType::Water, "Water"),
    (CellType::Stone, "Stone"),
    (CellType::Empty, "Eraser"),
];

/// GameState drives the simulation between frames.
/// Painting and stamping happen only between ticks, never during one.
pub struct GameState {
    pub sim: Simulation,
    pub brush: CellType,
    pub brush_radius: u32,
    pub text_scale: u32,
    pub is_running: bool,
    pub ticks_per_frame: u32,
    pub last_step_time_ms: f32,   // Simulation cost of the last frame
    pub last_render_time_ms: f32, // Render cost of the last frame
}

impl GameState {
    fn with_simulation(sim: Simulation) -> Self {
        Self {
            sim,
            brush: CellType::Sand,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            text_scale: DEFAULT_TEXT_SCALE,
            is_running: true,
            ticks_per_frame: 1,
            last_step_time_ms: 0.0,
            last_render_time_ms: 0.0,
        }
    }

    /// Build the state described by a validated configuration,
    /// stamping the startup message if one is set
    pub fn from_config(config: &Config) -> Self {
        let sim = match config.seed {
            Some(seed) => Simulation::seeded(config.width, config.height, seed),
            None => Simulation::new(config.width, config.height),
        };
        debug!(
            width = config.width,
            height = config.height,
            seed = ?config.seed,
            "Created simulation"
        );

        let mut state = Self::with_simulation(sim);
        state.brush_radius = config.brush_radius;
        state.text_scale = config.text_scale;
        state.ticks_per_frame = config.ticks_per_frame;
        state.stamp(&config.message)
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        info!(running = self.is_running, "Toggled simulation");
        self
    }

    /// Empty the grid; the run state is left as it was
    pub fn clear(mut self) -> Self {
        self.sim.clear();
        info!("Cleared grid");
        self
    }

    /// Stamp `message` in stone at the centre of the grid
    pub fn stamp(mut self, message: &str) -> Self {
        let text = message.trim();
        if !text.is_empty() {
            stamp_centered(self.sim.grid_mut(), text, self.text_scale, CellType::Stone);
            info!(text, "Stamped message");
        }
        self
    }

    pub fn clear_and_stamp(self, message: &str) -> Self {
        self.clear().stamp(message)
    }

    /// Adjust simulation speed in ticks per frame
    pub fn adjust_speed(mut self, delta: i32) -> Self {
        self.ticks_per_frame =
            (self.ticks_per_frame as i32 + delta).clamp(1, MAX_TICKS_PER_FRAME as i32) as u32;
        self
    }

    pub fn set_brush(&mut self, brush: CellType) {
        if self.brush != brush {
            info!(brush = brush.name(), "Selected brush");
            self.brush = brush;
        }
    }

    /// Paint the current brush as a disc centred on a grid cell
    pub fn paint(&mut self, x: i32, y: i32) {
        paint_circle(self.sim.grid_mut(), x, y, self.brush_radius, self.brush);
    }

    /// Drop a sand heart somewhere near the top of the grid
    pub fn drop_heart(&mut self) {
        let (width, height) = (self.sim.width() as i32, self.sim.height() as i32);
        let rng = self.sim.rng_mut();
        let x = if width > 20 { rng.random_range(10..width - 10) } else { width / 2 };
        let y_max = height.min(70);
        let y = if y_max > 20 { rng.random_range(20..y_max) } else { height / 2 };

        presets::heart().place_centered(self.sim.grid_mut(), x, y, CellType::Sand);
        info!(x, y, "Dropped heart");
    }

    /// Advance the simulation for one rendered frame
    pub fn tick(mut self) -> Self {
        if !self.is_running {
            return self;
        }

        let start = std::time::Instant::now();
        self.sim.step_n(self.ticks_per_frame);
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        trace!(
            tick = self.sim.tick(),
            step_ms = self.last_step_time_ms,
            "Advanced simulation"
        );

        self
    }
}
