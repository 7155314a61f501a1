//! The two pads, side by side.

use client_frontend_core::view_model::BoardView;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use simon_core::Move;

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, board: &BoardView) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_pad(frame, columns[0], Move::Red, "[r] RED", board.is_lit(Move::Red));
    render_pad(frame, columns[1], Move::Blue, "[b] BLUE", board.is_lit(Move::Blue));
}

fn render_pad(frame: &mut Frame, area: Rect, mv: Move, label: &str, lit: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if lit {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Theme::pad_border(mv, lit));

    // Vertically center the label inside the block.
    let inner_height = area.height.saturating_sub(2);
    let padding = usize::from(inner_height.saturating_sub(1) / 2);
    let mut text = "\n".repeat(padding);
    text.push_str(label);

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Theme::pad_fill(mv, lit))
        .block(block);

    frame.render_widget(paragraph, area);
}
