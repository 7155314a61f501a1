//! Key binding help.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::theme::Theme;

const BINDINGS: [(&str, &str); 4] = [
    ("s/Enter", "start"),
    ("r/←/1", "red"),
    ("b/→/2", "blue"),
    ("q/Esc", "quit"),
];

pub fn render(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::with_capacity(BINDINGS.len() * 2);
    for (key, action) in BINDINGS {
        spans.push(Span::styled(key, Theme::key_hint()));
        spans.push(Span::raw(format!(" {action}   ")));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
