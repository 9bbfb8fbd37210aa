mod game_state;
mod viewport;

pub use game_state::{BRUSHES, GameState};
pub use viewport::Viewport;
