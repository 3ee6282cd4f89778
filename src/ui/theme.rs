//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── sidebar ────────────────────────────────────────────────
    pub fn folder_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlight for the selected row; dimmer when its pane lacks focus.
    pub fn selected_style(focused: bool) -> Style {
        if focused {
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::UNDERLINED)
        }
    }

    // ── form ───────────────────────────────────────────────────
    pub fn label_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn value_style() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn editing_style() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
    }

    pub fn button_style(pressed: bool) -> Style {
        if pressed {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        }
    }

    pub fn dim_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style(focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn error_style() -> Style {
        Style::default().fg(Color::Red)
    }
}
