//! Pane rendering modules
//!
//! Each pane is a stateless `render_*` function that draws one part of the
//! screen from read-only game data.
//!
//! - [`title`]: game name and start prompt
//! - [`board`]: the grid with the snake and the food
//! - [`game_over`]: overlay shown over the frozen board after a collision
//! - [`status`]: status bar with board info and keybindings

pub mod board;
pub mod game_over;
pub mod status;
pub mod title;

// Re-export render functions for convenience
pub use board::render_board;
pub use game_over::render_game_over;
pub use status::render_status_bar;
pub use title::render_title;
