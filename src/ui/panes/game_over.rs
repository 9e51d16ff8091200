//! Game-over overlay drawn on top of the frozen board

use crate::game::GameOverReason;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const OVERLAY_WIDTH: u16 = 30;
const OVERLAY_HEIGHT: u16 = 8;

pub fn render_game_over(
    frame: &mut Frame,
    area: Rect,
    reason: Option<GameOverReason>,
    length: usize,
) {
    let [column] = Layout::horizontal([Constraint::Length(OVERLAY_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let [overlay] = Layout::vertical([Constraint::Length(OVERLAY_HEIGHT)])
        .flex(Flex::Center)
        .areas(column);

    let key_style = Style::default()
        .bg(DEFAULT_THEME.comment)
        .fg(Color::Black);
    let hint_style = Style::default().fg(DEFAULT_THEME.comment);

    let lines = vec![
        Line::styled(
            "Game Over",
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            reason.map(GameOverReason::describe).unwrap_or_default(),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Line::styled(
            format!("Length {}", length),
            Style::default().fg(DEFAULT_THEME.secondary),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", hint_style),
            Span::styled(" SPACE ", key_style),
            Span::styled(" to continue", hint_style),
        ]),
        Line::from(vec![
            Span::styled("Press ", hint_style),
            Span::styled(" Q ", key_style),
            Span::styled(" to quit", hint_style),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.error));

    frame.render_widget(Clear, overlay);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        overlay,
    );
}
