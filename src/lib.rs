//! # Introduction
//!
//! snaketty is a terminal Snake game. The snake moves one cell at a fixed
//! cadence, grows when it eats food, and the round ends when it runs into a
//! wall or into itself. The terminal UI is built with
//! [ratatui](https://docs.rs/ratatui) on top of crossterm.
//!
//! ## Frame pipeline
//!
//! ```text
//! Platform::poll_frame → Game::update → App::render
//!   (key, held, dt)      (≤ 1 tick)     (ratatui)
//! ```
//!
//! 1. [`input`] — the [`input::Platform`] seam, key bindings and the
//!    crossterm-backed platform.
//! 2. [`game`] — the state machine (title, gameplay, game over), the snake
//!    simulation on a fixed-capacity body buffer, and food placement.
//! 3. [`ui`] — the frame loop driver and the panes; not part of the stable
//!    library API.
//! 4. [`config`] and [`error`] — command-line configuration and fatal errors.
//!
//! ## Timing
//!
//! Movement speed is set in moves per second and is independent of the frame
//! rate: frames accumulate elapsed time and the snake ticks at most once per
//! frame when a full movement period has passed.

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod ui;
