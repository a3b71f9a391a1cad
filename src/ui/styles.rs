//! Colour palette for the study screens

use ratatui::style::{Color, Modifier, Style};

/// Plain list and body text
pub fn default_style() -> Style {
    Style::default().fg(Color::Reset)
}

/// Highlighted row in the app and task lists
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightBlue)
        .add_modifier(Modifier::BOLD)
}

/// The big HH:MM:SS readout
pub fn running_style() -> Style {
    Style::default()
        .fg(Color::LightGreen)
        .add_modifier(Modifier::BOLD | Modifier::ITALIC)
}

pub fn title_style() -> Style {
    Style::default()
        .fg(Color::LightBlue)
        .add_modifier(Modifier::BOLD)
}

pub fn border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Border of the setup field that receives typing
pub fn focused_border_style() -> Style {
    Style::default()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD)
}

/// Confirm, error and summary boxes
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::Black).fg(Color::Gray)
}

pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD)
}

/// Hint bar and empty-list placeholders
pub fn hint_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

/// Elapsed share of the session
pub fn gauge_style() -> Style {
    Style::default().fg(Color::LightGreen).bg(Color::Black)
}

/// "Invalid Time" message text
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::LightRed)
        .add_modifier(Modifier::BOLD)
}

/// Checked-off task titles
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}
