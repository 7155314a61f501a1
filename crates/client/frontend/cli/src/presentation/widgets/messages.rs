//! Message log panel, newest at the bottom.

use client_frontend_core::message::MessageLog;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog) {
    let visible = usize::from(area.height.saturating_sub(2));
    let mut lines: Vec<Line> = messages
        .recent(visible)
        .map(|entry| {
            let prefix = entry.round.map(|r| format!("[{r:>2}] ")).unwrap_or_default();
            Line::from(Span::styled(
                format!("{prefix}{}", entry.text),
                Theme::message(entry.level),
            ))
        })
        .collect();
    lines.reverse();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Messages "));

    frame.render_widget(paragraph, area);
}
