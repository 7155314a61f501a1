//! Gauge showing how much of the current sequence has been reproduced.

use client_frontend_core::view_model::BoardView;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Gauge},
};

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, board: &BoardView) {
    let percent = board.progress_percent();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Theme::gauge())
        .percent(percent)
        .label(format!("{}/{} ({percent}%)", board.matched(), board.total()));

    frame.render_widget(gauge, area);
}
