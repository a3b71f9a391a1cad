use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Setup screen layout
pub struct SetupLayout {
    pub keybindings_area: Rect,
    pub duration_areas: [Rect; 3],
    pub app_input_area: Rect,
    pub app_list_area: Rect,
    pub task_input_area: Rect,
    pub task_list_area: Rect,
}

/// Session screen layout
pub struct SessionLayout {
    pub keybindings_area: Rect,
    pub countdown_area: Rect,
    pub checklist_area: Option<Rect>,
    pub events_area: Rect,
}

/// Create the setup layout
/// - Top bar: keybindings (1 row)
/// - Duration row: HH | MM | SS
/// - Main area: Apps (50%) | Tasks (50%), each an input above a list
pub fn create_setup_layout(area: Rect) -> SetupLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(3), // Duration fields
            Constraint::Min(0),    // Lists
        ])
        .split(area);

    let duration = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Min(0),
        ])
        .split(rows[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    let split_column = |column: Rect| {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(column)
    };
    let apps = split_column(columns[0]);
    let tasks = split_column(columns[1]);

    SetupLayout {
        keybindings_area: rows[0],
        duration_areas: [duration[0], duration[1], duration[2]],
        app_input_area: apps[0],
        app_list_area: apps[1],
        task_input_area: tasks[0],
        task_list_area: tasks[1],
    }
}

/// Create the session layout
/// - Top bar: keybindings (1 row)
/// - Countdown with progress gauge
/// - Checklist (60%) | Suppression log (40%), or the log alone in zen mode
pub fn create_session_layout(area: Rect, zen_mode: bool) -> SessionLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(5), // Countdown
            Constraint::Min(0),    // Checklist + log
        ])
        .split(area);

    if zen_mode {
        return SessionLayout {
            keybindings_area: rows[0],
            countdown_area: rows[1],
            checklist_area: None,
            events_area: rows[2],
        };
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[2]);

    SessionLayout {
        keybindings_area: rows[0],
        countdown_area: rows[1],
        checklist_area: Some(columns[0]),
        events_area: columns[1],
    }
}

/// Create centered modal area
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(12),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
