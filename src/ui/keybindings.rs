use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar for the current mode
pub fn render_keybindings(f: &mut Frame, mode: UiMode, area: Rect) {
    let hints: &[&str] = match mode {
        UiMode::Setup | UiMode::Error => &[
            " Tab/Shift+Tab field   ",
            "Enter add   ",
            "↑/↓ select   ",
            "Del remove   ",
            "F2 preset   ",
            "F5 start   ",
            "Esc quit",
        ],
        UiMode::Session | UiMode::ConfirmQuit => &[
            " ↑/↓ select   ",
            "Space check   ",
            "z zen   ",
            "x end early",
        ],
        UiMode::Summary => &[" n new session   ", "q quit"],
    };

    let line = Line::from(hints.iter().map(|h| Span::raw(*h)).collect::<Vec<_>>());
    let paragraph = Paragraph::new(line).style(hint_style());
    f.render_widget(paragraph, area);
}
