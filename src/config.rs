//! Runtime configuration
//!
//! Defaults live in the constants below; command-line flags override them.
//! Validation that depends on the terminal (the `--fit` grid) happens in
//! [`Config::grid`], once the terminal size is known.

use crate::error::GameError;
use crate::game::grid::Grid;
use crate::game::DEFAULT_MOVES_PER_SECOND;
use clap::Parser;
use std::path::PathBuf;

/// Board width in cells (a 1280x720 window with 72px cells fits 16x9)
pub const DEFAULT_GRID_WIDTH: u16 = 16;
pub const DEFAULT_GRID_HEIGHT: u16 = 9;

/// Frame-rate cap
pub const DEFAULT_FPS: u32 = 60;

/// Terminal columns used to draw one cell, so cells look roughly square
pub const CELL_COLUMNS: u16 = 2;

/// Rows and columns around the board taken by its border and the status bar
const BORDER_COLUMNS: i64 = 2;
const RESERVED_ROWS: i64 = 3;

const KEYS_HELP: &str = "Keys: arrows/WASD steer, r restart, space continue, q quit";

/// Snake in the terminal
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "snaketty", version, about, long_about = None, after_help = KEYS_HELP)]
pub struct Config {
    /// Board width in cells
    #[arg(
        long,
        value_name = "CELLS",
        default_value_t = DEFAULT_GRID_WIDTH,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub width: u16,

    /// Board height in cells
    #[arg(
        long,
        value_name = "CELLS",
        default_value_t = DEFAULT_GRID_HEIGHT,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub height: u16,

    /// Size the board to the terminal
    #[arg(long, conflicts_with_all = ["width", "height"])]
    pub fit: bool,

    /// Snake moves per second
    #[arg(
        long = "speed",
        value_name = "MOVES",
        default_value_t = DEFAULT_MOVES_PER_SECOND,
        value_parser = parse_speed
    )]
    pub moves_per_second: f32,

    /// Frame-rate cap
    #[arg(
        long,
        value_name = "FPS",
        default_value_t = DEFAULT_FPS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub fps: u32,

    /// Write a log to FILE
    #[arg(long = "log", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            fit: false,
            moves_per_second: DEFAULT_MOVES_PER_SECOND,
            fps: DEFAULT_FPS,
            log_file: None,
        }
    }
}

impl Config {
    /// Resolve the board, asking for the terminal size only with `--fit`.
    ///
    /// Fails when a side is not positive or the board cannot hold both the
    /// snake and a piece of food.
    pub fn grid<F>(&self, terminal_size: F) -> Result<Grid, GameError>
    where
        F: FnOnce() -> std::io::Result<(u16, u16)>,
    {
        let (width, height) = if self.fit {
            let (cols, rows) = terminal_size()?;
            grid_for_terminal(cols, rows)
        } else {
            (i64::from(self.width), i64::from(self.height))
        };

        let degenerate = GameError::DegenerateGrid { width, height };
        let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
            return Err(degenerate);
        };
        match Grid::new(w, h) {
            Some(grid) if grid.area() >= 2 => Ok(grid),
            _ => Err(degenerate),
        }
    }
}

/// Cells that fit in a terminal of `cols` x `rows`, may be non-positive
pub fn grid_for_terminal(cols: u16, rows: u16) -> (i64, i64) {
    let width = (i64::from(cols) - BORDER_COLUMNS) / i64::from(CELL_COLUMNS);
    let height = i64::from(rows) - RESERVED_ROWS;
    (width, height)
}

fn parse_speed(value: &str) -> Result<f32, String> {
    match value.parse::<f32>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        Ok(_) => Err("must be a positive number".to_string()),
        Err(e) => Err(e.to_string()),
    }
}
