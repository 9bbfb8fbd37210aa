mod cell;
mod grid;
mod simulation;
pub mod font;
pub mod patterns;

pub use cell::CellType;
pub use grid::Grid;
pub use simulation::{Simulation, step};
pub use patterns::{Pattern, presets, measure_text, stamp_text, stamp_centered, paint_circle};
