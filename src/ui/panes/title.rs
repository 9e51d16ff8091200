//! Title screen

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub const GAME_NAME: &str = "snaketty";

/// Render the game name with a drop shadow, centered in `area`
pub fn render_title(frame: &mut Frame, area: Rect) {
    // Letter-spaced so the name reads as a heading in a monospace grid
    let spaced: String = GAME_NAME
        .chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let shadow = "▀".repeat(spaced.chars().count());

    let lines = vec![
        Line::styled(
            spaced,
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(shadow, Style::default().fg(DEFAULT_THEME.shadow)),
        Line::from(""),
        Line::styled(
            "Press any key to start",
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ];

    let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(area);

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered,
    );
}
