//! Snake simulation
//!
//! The body lives in a buffer allocated once with room for every cell of the
//! grid, so the snake never reallocates while it grows. Only the prefix
//! `body[0..length)` is meaningful: index 0 is the head, `length - 1` the tail.
//!
//! # Movement
//!
//! Each [`Snake::tick`] runs in a fixed order:
//!
//! ```text
//! 1. growing?  copy tail into slot `length`
//! 2. shift     body[i] = body[i - 1]   for i in (1..length).rev()
//! 3. growing?  length += 1
//! 4. turn      current = buffered
//! 5. move head one cell (or report a wall hit)
//! 6. scan body[1..length) for the new head (self hit)
//! ```
//!
//! Copying the tail before the shift makes growth and plain movement share
//! one code path: the new segment appears exactly where the old tail was.

use super::grid::{Direction, Grid, Position};
use crate::error::GameError;

/// Result of a single movement step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The head advanced onto a free cell
    Moved,
    /// The head would have left the board; it was not moved
    HitWall,
    /// The head moved onto one of the snake's own segments
    HitSelf,
}

impl TickOutcome {
    pub fn is_collision(self) -> bool {
        !matches!(self, TickOutcome::Moved)
    }
}

#[derive(Debug, Clone)]
pub struct Snake {
    grid: Grid,
    body: Box<[Position]>,
    length: usize,
    current_direction: Direction,
    buffered_direction: Direction,
    growth_pending: bool,
    move_accumulator: f32,
}

// A snake always has at least its head
#[allow(clippy::len_without_is_empty)]
impl Snake {
    pub const START: Position = Position::ORIGIN;
    pub const START_DIRECTION: Direction = Direction::Right;

    /// Create a length-1 snake at the origin, reserving one body slot per grid cell
    pub fn new(grid: Grid) -> Result<Self, GameError> {
        let cells = grid.area();
        let mut body = Vec::new();
        body.try_reserve_exact(cells)
            .map_err(|_| GameError::BufferAllocation { cells })?;
        body.resize(cells, Self::START);

        let mut snake = Snake {
            grid,
            body: body.into_boxed_slice(),
            length: 1,
            current_direction: Self::START_DIRECTION,
            buffered_direction: Self::START_DIRECTION,
            growth_pending: false,
            move_accumulator: 0.0,
        };
        snake.reset();
        Ok(snake)
    }

    /// Back to a single segment at the origin, heading right
    pub fn reset(&mut self) {
        self.length = 1;
        self.body[0] = Self::START;
        self.current_direction = Self::START_DIRECTION;
        self.buffered_direction = Self::START_DIRECTION;
        self.growth_pending = false;
        self.move_accumulator = 0.0;
    }

    /// Queue a turn for the next tick.
    ///
    /// Turning straight back into the neck is refused. Returns whether the
    /// request was accepted.
    pub fn request_direction(&mut self, dir: Direction) -> bool {
        if dir == self.current_direction.opposite() {
            return false;
        }
        self.buffered_direction = dir;
        true
    }

    /// Mark the snake to grow by one segment on the next tick
    pub fn grow(&mut self) {
        self.growth_pending = true;
    }

    /// Add `dt` seconds to the movement timer and tick once if a full
    /// movement period has elapsed.
    ///
    /// Returns `None` when no tick happened this frame.
    pub fn advance(&mut self, dt: f32, moves_per_second: f32) -> Option<TickOutcome> {
        self.move_accumulator += dt;
        if self.move_accumulator >= 1.0 / moves_per_second {
            let outcome = self.tick();
            self.move_accumulator = 0.0;
            Some(outcome)
        } else {
            None
        }
    }

    /// Perform one movement step (see the module docs for the order)
    pub fn tick(&mut self) -> TickOutcome {
        // A full buffer cannot grow; the flag is simply dropped
        let growing = self.growth_pending && self.length < self.body.len();

        if growing {
            self.body[self.length] = self.body[self.length - 1];
        }

        self.body.copy_within(0..self.length - 1, 1);

        if growing {
            self.length += 1;
        }
        self.growth_pending = false;

        self.current_direction = self.buffered_direction;

        let Some(next) = self.grid.step(self.head(), self.current_direction) else {
            return TickOutcome::HitWall;
        };
        self.body[0] = next;

        if self.body[1..self.length].contains(&next) {
            return TickOutcome::HitSelf;
        }

        TickOutcome::Moved
    }

    /// Whether the head sits on `food`
    pub fn check_food_collision(&self, food: Position) -> bool {
        self.head() == food
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Occupied segments, head first
    pub fn body(&self) -> &[Position] {
        &self.body[..self.length]
    }

    pub fn len(&self) -> usize {
        self.length
    }

    /// Maximum length, equal to the grid area
    pub fn capacity(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body().contains(&pos)
    }

    pub fn direction(&self) -> Direction {
        self.current_direction
    }

    pub fn buffered_direction(&self) -> Direction {
        self.buffered_direction
    }

    pub fn is_growing(&self) -> bool {
        self.growth_pending
    }

    pub fn move_accumulator(&self) -> f32 {
        self.move_accumulator
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }
}
