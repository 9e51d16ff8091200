//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — the frame loop: poll input, update the game, draw
//! - **[`panes`]** — stateless render functions for the title screen, board,
//!   game-over overlay and status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Game`] and
//! call [`App::run`] with a terminal and a [`Platform`].
//!
//! [`Game`]: crate::game::Game
//! [`Platform`]: crate::input::Platform
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
