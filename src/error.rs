//! Fatal error types
//!
//! [`GameError`] covers everything that can stop the game from starting or
//! from keeping the terminal alive. Collisions are not errors: they are
//! reported as [`TickOutcome`](crate::game::snake::TickOutcome) values and
//! handled by the state machine.

use std::fmt;
use std::io;

/// Errors that terminate the process
#[derive(Debug)]
pub enum GameError {
    /// The configured or derived board is too small to hold the snake and food
    DegenerateGrid { width: i64, height: i64 },

    /// Storage for the snake body could not be reserved
    BufferAllocation { cells: usize },

    /// Terminal or log file failure
    Io(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::DegenerateGrid { width, height } => {
                write!(
                    f,
                    "Grid of {}x{} cells is too small to play on",
                    width, height
                )
            }
            GameError::BufferAllocation { cells } => {
                write!(f, "Could not allocate a snake body of {} cells", cells)
            }
            GameError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        GameError::Io(e)
    }
}
