//! Colors and styles for the terminal UI.
use client_frontend_core::{message::MessageLevel, view_model::BoardStatus};
use ratatui::style::{Color, Modifier, Style};
use simon_core::Move;

pub struct Theme;

impl Theme {
    pub fn pad_color(mv: Move) -> Color {
        match mv {
            Move::Red => Color::Red,
            Move::Blue => Color::Blue,
        }
    }

    /// Lit pads are filled with their color; dark pads only show a border.
    pub fn pad_fill(mv: Move, lit: bool) -> Style {
        if lit {
            Style::default()
                .bg(Self::pad_color(mv))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Self::pad_color(mv)).add_modifier(Modifier::DIM)
        }
    }

    pub fn pad_border(mv: Move, lit: bool) -> Style {
        let style = Style::default().fg(Self::pad_color(mv));
        if lit {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn status(status: BoardStatus) -> Style {
        let color = match status {
            BoardStatus::Idle => Color::Yellow,
            BoardStatus::Playing { .. } => Color::LightGreen,
            BoardStatus::Lost => Color::LightRed,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn message(level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::Gray),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    pub fn gauge() -> Style {
        Style::default().fg(Color::LightGreen).bg(Color::Black)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }
}
