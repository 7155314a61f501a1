//! Header widget displaying the round and game status.

use client_frontend_core::view_model::BoardView;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::Theme;

/// Render the header panel with the status line and game number.
pub fn render(frame: &mut Frame, area: Rect, board: &BoardView) {
    let mut spans = vec![Span::styled(board.status_text(), Theme::status(board.status()))];
    if board.game() > 0 {
        spans.push(Span::styled(
            format!("  (game #{})", board.game()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Simon "));

    frame.render_widget(paragraph, area);
}
