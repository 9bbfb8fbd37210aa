//! Command-line configuration for the falling sand demo.

use clap::Parser;
use thiserror::Error;

pub const DEFAULT_WIDTH: usize = 300;
pub const DEFAULT_HEIGHT: usize = 200;
pub const DEFAULT_SCALE: u32 = 3;
pub const DEFAULT_BRUSH_RADIUS: u32 = 2;
pub const DEFAULT_TEXT_SCALE: u32 = 2;
pub const DEFAULT_MESSAGE: &str = "Always Falling For You Susan";
pub const MAX_TICKS_PER_FRAME: u32 = 16;
/// Texture dimensions are `u16`
pub const MAX_DIMENSION: usize = u16::MAX as usize;
pub const MAX_SCALE: u32 = 32;
pub const MAX_BRUSH_RADIUS: u32 = 64;
pub const MAX_TEXT_SCALE: u32 = 16;

/// Errors raised when validating a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid dimensions must be within 1..={max} (got {width}x{height})")]
    Dimension {
        width: usize,
        height: usize,
        max: usize,
    },
    #[error("display scale must be within 1..={max} (got {value})")]
    Scale { value: u32, max: u32 },
    #[error("brush radius must be at most {max} (got {value})")]
    BrushRadius { value: u32, max: u32 },
    #[error("text scale must be within 1..={max} (got {value})")]
    TextScale { value: u32, max: u32 },
    #[error("ticks per frame must be within 1..={max} (got {value})")]
    TicksPerFrame { value: u32, max: u32 },
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "falling-sand", about = "Falling sand, water and stone on a pixel grid")]
pub struct Config {
    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Screen pixels per cell
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: u32,

    /// Fixed RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Paint brush radius in cells (0 paints a single cell)
    #[arg(long, default_value_t = DEFAULT_BRUSH_RADIUS)]
    pub brush_radius: u32,

    /// Simulation ticks per rendered frame
    #[arg(long, default_value_t = 1)]
    pub ticks_per_frame: u32,

    /// Font pixel size used when stamping text
    #[arg(long, default_value_t = DEFAULT_TEXT_SCALE)]
    pub text_scale: u32,

    /// Message stamped in stone at startup (empty for none)
    #[arg(long, default_value = DEFAULT_MESSAGE)]
    pub message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: DEFAULT_SCALE,
            seed: None,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            ticks_per_frame: 1,
            text_scale: DEFAULT_TEXT_SCALE,
            message: DEFAULT_MESSAGE.to_owned(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dimension_range = 1..=MAX_DIMENSION;
        if !dimension_range.contains(&self.width) || !dimension_range.contains(&self.height) {
            return Err(ConfigError::Dimension {
                width: self.width,
                height: self.height,
                max: MAX_DIMENSION,
            });
        }
        if !(1..=MAX_SCALE).contains(&self.scale) {
            return Err(ConfigError::Scale {
                value: self.scale,
                max: MAX_SCALE,
            });
        }
        if self.brush_radius > MAX_BRUSH_RADIUS {
            return Err(ConfigError::BrushRadius {
                value: self.brush_radius,
                max: MAX_BRUSH_RADIUS,
            });
        }
        if !(1..=MAX_TEXT_SCALE).contains(&self.text_scale) {
            return Err(ConfigError::TextScale {
                value: self.text_scale,
                max: MAX_TEXT_SCALE,
            });
        }
        if !(1..=MAX_TICKS_PER_FRAME).contains(&self.ticks_per_frame) {
            return Err(ConfigError::TicksPerFrame {
                value: self.ticks_per_frame,
                max: MAX_TICKS_PER_FRAME,
            });
        }
        Ok(())
    }

    /// Window size in screen pixels for the grid area alone
    pub fn grid_pixel_size(&self) -> (f32, f32) {
        (
            self.width as f32 * self.scale as f32,
            self.height as f32 * self.scale as f32,
        )
    }
}
