//! UI rendering entry point composing all widgets.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::presentation::{terminal::Tui, widgets};
use client_frontend_core::{message::MessageLog, view_model::BoardView};

/// Everything needed to draw one frame.
pub struct RenderContext<'a> {
    pub board: &'a BoardView,
    pub messages: &'a MessageLog,
    pub message_panel_height: u16,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| draw(frame, ctx))?;
    Ok(())
}

/// Layout, top to bottom: header, pads, progress, messages, key help.
pub fn draw(frame: &mut Frame, ctx: &RenderContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(ctx.message_panel_height),
            Constraint::Length(1),
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.board);
    widgets::pads::render(frame, chunks[1], ctx.board);
    widgets::progress::render(frame, chunks[2], ctx.board);
    widgets::messages::render(frame, chunks[3], ctx.messages);
    widgets::footer::render(frame, chunks[4]);
}
