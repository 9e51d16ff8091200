//! Grid geometry: cell coordinates, board bounds and movement directions

use std::fmt;

/// A cell on the board. `(0, 0)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub const fn new(x: u16, y: u16) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Movement direction of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction pointing the other way along the same axis
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Board bounds in cells. Both sides are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    /// Returns `None` if either side is zero
    pub fn new(width: u16, height: u16) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            Some(Grid { width, height })
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of cells, which is also the longest a snake can ever get
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// The neighbouring cell in `dir`, or `None` if it lies outside the board
    pub fn step(&self, pos: Position, dir: Direction) -> Option<Position> {
        let next = match dir {
            Direction::Up => Position::new(pos.x, pos.y.checked_sub(1)?),
            Direction::Down => Position::new(pos.x, pos.y.checked_add(1)?),
            Direction::Left => Position::new(pos.x.checked_sub(1)?, pos.y),
            Direction::Right => Position::new(pos.x.checked_add(1)?, pos.y),
        };
        self.contains(next).then_some(next)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
