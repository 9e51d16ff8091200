//! Board pane: the grid, the snake and the food

use crate::config::CELL_COLUMNS;
use crate::game::grid::{Grid, Position};
use crate::game::snake::Snake;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SEGMENT: &str = "██";
const FOOD: &str = "▐▌";
const CRASH: &str = "><";
const EMPTY: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Body,
    Head,
    Food,
}

/// Outer size of the board including its border
pub fn board_size(grid: Grid) -> (u16, u16) {
    (
        grid.width().saturating_mul(CELL_COLUMNS).saturating_add(2),
        grid.height().saturating_add(2),
    )
}

/// The rectangle the board occupies when centered in `area`
pub fn board_area(area: Rect, grid: Grid) -> Rect {
    let (width, height) = board_size(grid);
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    board
}

/// Render the board centered in `area`.
///
/// When `crashed` is set the head is drawn as a collision marker.
pub fn render_board(
    frame: &mut Frame,
    area: Rect,
    grid: Grid,
    snake: &Snake,
    food: Position,
    crashed: bool,
) {
    let cells = layout_cells(grid, snake, food);

    let lines: Vec<Line> = (0..grid.height())
        .map(|y| {
            let spans: Vec<Span> = (0..grid.width())
                .map(|x| {
                    let cell = cells[y as usize * grid.width() as usize + x as usize];
                    cell_span(cell, x, y, crashed)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    frame.render_widget(Paragraph::new(lines).block(block), board_area(area, grid));
}

/// Row-major cell contents. Food is drawn under the snake so it never hides it.
fn layout_cells(grid: Grid, snake: &Snake, food: Position) -> Vec<Cell> {
    let width = grid.width() as usize;
    let mut cells = vec![Cell::Empty; grid.area()];
    let index = |p: Position| p.y as usize * width + p.x as usize;

    if grid.contains(food) {
        cells[index(food)] = Cell::Food;
    }
    for &segment in &snake.body()[1..] {
        cells[index(segment)] = Cell::Body;
    }
    cells[index(snake.head())] = Cell::Head;
    cells
}

fn cell_span(cell: Cell, x: u16, y: u16, crashed: bool) -> Span<'static> {
    let bg = if (x ^ y) & 1 == 0 {
        DEFAULT_THEME.cell_even
    } else {
        DEFAULT_THEME.cell_odd
    };
    let base = Style::default().bg(bg);

    match cell {
        Cell::Empty => Span::styled(EMPTY, base),
        Cell::Body => Span::styled(SEGMENT, base.fg(DEFAULT_THEME.snake_body)),
        Cell::Head if crashed => Span::styled(
            CRASH,
            base.fg(DEFAULT_THEME.error).add_modifier(Modifier::BOLD),
        ),
        Cell::Head => Span::styled(SEGMENT, base.fg(DEFAULT_THEME.snake_head)),
        Cell::Food => Span::styled(FOOD, base.fg(DEFAULT_THEME.food)),
    }
}
