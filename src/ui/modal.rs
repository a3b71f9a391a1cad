use crate::app::AppState;
use crate::domain::{SessionPhase, UiMode};
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn render_boxed(f: &mut Frame, title: &str, lines: Vec<Line>, area: Rect) {
    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the end-early confirmation
pub fn render_confirm_quit_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if app.ui_mode != UiMode::ConfirmQuit {
        return;
    }

    let lines = vec![
        Line::raw(""),
        Line::raw(format!(
            "  {} still on the clock.",
            app.session.remaining()
        )),
        Line::raw("  Ending now stops the countdown and stops silencing apps."),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [y]", modal_title_style()),
            Span::raw(" End session  "),
            Span::styled("[n]", modal_title_style()),
            Span::raw(" Keep going"),
        ]),
    ];

    render_boxed(f, " End Session Early? ", lines, area);
}

/// Render the rejected-start message
pub fn render_error_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if app.ui_mode != UiMode::Error {
        return;
    }
    let Some(message) = &app.error_message else {
        return;
    };

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(format!("  {}", message), error_style())),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [Enter]", modal_title_style()),
            Span::raw(" OK"),
        ]),
    ];

    render_boxed(f, " Invalid Time ", lines, area);
}

/// Render the end-of-session summary
pub fn render_summary(f: &mut Frame, app: &AppState, area: Rect) {
    let summary = app.session.summary();
    let time = |t: Option<chrono::DateTime<chrono::Local>>| {
        t.map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "--:--:--".to_string())
    };

    let headline = match summary.outcome {
        SessionPhase::Completed => "  🎉 Time's up! Session complete.".to_string(),
        SessionPhase::ForceQuit => format!("  Session ended early with {} left.", summary.remaining),
        other => format!("  {}", other.label()),
    };

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(headline, modal_title_style())),
        Line::raw(""),
        Line::raw(format!(
            "  Planned {}   Started {}   Ended {}",
            summary.planned,
            time(summary.started_at),
            time(summary.ended_at)
        )),
        Line::raw(format!(
            "  Tasks done: {} / {}",
            summary.tasks_done, summary.tasks_total
        )),
        Line::raw(format!(
            "  Apps closed while studying: {}",
            summary.apps_closed
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [n]", modal_title_style()),
            Span::raw(" New session  "),
            Span::styled("[q]", modal_title_style()),
            Span::raw(" Quit"),
        ]),
    ];

    render_boxed(f, " Session Summary ", lines, area);
}
