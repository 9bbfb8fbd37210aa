// Domain layer - simulation core
pub mod domain;

// Application layer - tick driver and coordinate mapping
pub mod application;

// Infrastructure layer - UI, rendering, input, configuration
pub mod ui;
pub mod rendering;
pub mod input;
pub mod config;

// Re-exports for convenience
pub use domain::{CellType, Grid, Pattern, Simulation, presets};
pub use application::{GameState, Viewport};
pub use config::{Config, ConfigError};
