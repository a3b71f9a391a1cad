use crate::app::AppState;
use crate::session::SuppressionKind;
use crate::ui::styles::{
    border_style, default_style, done_style, gauge_style, hint_style, running_style,
    selected_style, title_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the countdown with its progress gauge
pub fn render_countdown(f: &mut Frame, app: &AppState, area: Rect) {
    let countdown = app.session.countdown();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" ⏳ Time Remaining ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let time = Paragraph::new(Span::styled(countdown.remaining().to_string(), running_style()))
        .alignment(Alignment::Center);
    f.render_widget(time, rows[0]);

    let ratio = countdown.progress_ratio().clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(ratio)
        .label(format!("{:.0}% of {}", ratio * 100.0, countdown.initial()));
    f.render_widget(gauge, rows[2]);
}

/// Render the task checklist
pub fn render_checklist(f: &mut Frame, app: &AppState, area: Rect) {
    let tasks = &app.session.tasks;
    let title = format!(
        " Tasks to do ({}/{}) ",
        tasks.completed_count(),
        tasks.len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    if tasks.is_empty() {
        let empty = Paragraph::new(Span::styled("No tasks for this session.", hint_style()))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| {
            let style = if task.done { done_style() } else { default_style() };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", task.checkbox())),
                Span::styled(task.title.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(selected_style());
    let mut state = ListState::default().with_selected(Some(app.selected_task));
    f.render_stateful_widget(list, area, &mut state);
}

/// Render the recent suppression events, newest first
pub fn render_events(f: &mut Frame, app: &AppState, area: Rect) {
    let title = format!(
        " 🚫 Silenced ({}) ",
        app.session.apps.iter().collect::<Vec<_>>().join(", ")
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    let mut lines: Vec<Line> = app
        .session
        .events()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .map(|event| {
            let action = match event.kind {
                SuppressionKind::AtStart => "closed",
                SuppressionKind::Reopened => "closed again",
            };
            Line::from(vec![
                Span::styled(event.at.format("%H:%M:%S ").to_string(), hint_style()),
                Span::raw(format!("{} {}", event.app, action)),
            ])
        })
        .collect();

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing to close so far. Stay focused!",
            hint_style(),
        )));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}
