//! Color palette shared by every pane

use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border: Color,
    pub status_bg: Color,
    pub cell_even: Color,
    pub cell_odd: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub title: Color,
    pub shadow: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border: Color::Rgb(205, 214, 244),
    status_bg: Color::Rgb(50, 50, 70),
    cell_even: Color::Rgb(30, 30, 46), // Checkerboard stands in for grid lines
    cell_odd: Color::Rgb(36, 36, 54),
    snake_head: Color::Rgb(137, 180, 250), // Blue
    snake_body: Color::Rgb(137, 220, 235), // Sky
    food: Color::Rgb(166, 227, 161),
    title: Color::Rgb(186, 194, 222),
    shadow: Color::Rgb(69, 71, 90),
};
