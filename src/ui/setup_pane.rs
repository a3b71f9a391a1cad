use crate::app::AppState;
use crate::domain::SetupField;
use crate::ui::layout::SetupLayout;
use crate::ui::styles::{
    border_style, default_style, focused_border_style, hint_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

fn field_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            focused_border_style()
        } else {
            border_style()
        })
        .title(Span::styled(title, title_style()))
}

/// Single-line text input with a block cursor when focused
fn render_input(f: &mut Frame, title: &str, value: &str, focused: bool, area: Rect) {
    let line = Line::from(vec![
        Span::raw(value.to_string()),
        if focused {
            Span::styled("█", focused_border_style())
        } else {
            Span::raw("")
        },
    ]);
    f.render_widget(Paragraph::new(line).block(field_block(title, focused)), area);
}

fn render_list(
    f: &mut Frame,
    title: &str,
    rows: Vec<String>,
    selected: usize,
    focused: bool,
    empty_hint: &str,
    area: Rect,
) {
    if rows.is_empty() {
        let hint = Paragraph::new(Span::styled(empty_hint.to_string(), hint_style()))
            .block(field_block(title, focused));
        f.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = rows.into_iter().map(ListItem::new).collect();
    let list = List::new(items)
        .block(field_block(title, focused))
        .style(default_style())
        .highlight_style(if focused { selected_style() } else { default_style() });

    let mut state = ListState::default().with_selected(Some(selected));
    f.render_stateful_widget(list, area, &mut state);
}

/// Render the session setup form
pub fn render_setup_pane(f: &mut Frame, app: &AppState, layout: &SetupLayout) {
    let form = &app.form;
    let focus = form.focus;

    let durations = [
        (" Hours ", &form.hours, SetupField::Hours),
        (" Minutes ", &form.minutes, SetupField::Minutes),
        (" Seconds ", &form.seconds, SetupField::Seconds),
    ];
    for ((title, value, field), area) in durations.into_iter().zip(layout.duration_areas) {
        render_input(f, title, value, focus == field, area);
    }

    render_input(
        f,
        " Silence app (Enter to add) ",
        &form.app_input,
        focus == SetupField::AppInput,
        layout.app_input_area,
    );
    render_list(
        f,
        &format!(" Silenced apps ({}) ", app.session.apps.len()),
        app.session.apps.iter().map(|name| format!("🚫 {}", name)).collect(),
        form.app_selected,
        focus == SetupField::AppList,
        "No apps yet. Type a name above or press F2 for the preset.",
        layout.app_list_area,
    );

    render_input(
        f,
        " Task (Enter to add) ",
        &form.task_input,
        focus == SetupField::TaskInput,
        layout.task_input_area,
    );
    render_list(
        f,
        &format!(" Tasks ({}) ", app.session.tasks.len()),
        app.session
            .tasks
            .iter()
            .map(|task| format!("• {}", task.title))
            .collect(),
        form.task_selected,
        focus == SetupField::TaskList,
        "No tasks yet.",
        layout.task_list_area,
    );
}
