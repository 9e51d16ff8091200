//! Status bar rendering with board info, keybindings and state indicators

use crate::game::grid::Grid;
use crate::game::GameState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, grid: Grid, length: usize, state: GameState) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let game_over = state == GameState::GameOver;

    // Left side: state badge, board and snake info
    let left_spans = vec![
        Span::styled(
            if game_over { " GAME OVER " } else { " ▶ PLAYING " },
            Style::default()
                .bg(if game_over {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.success
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" Grid {} │ Length {} ", grid, length),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let right_spans = vec![
        Span::styled(" ←↑↓→ ", key_style),
        Span::styled(" steer ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" r ", key_style),
        Span::styled(" restart ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
