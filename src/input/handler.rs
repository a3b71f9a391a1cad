use crate::app::AppState;
use crate::domain::{SetupField, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should exit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Ctrl+C always exits, ending a running session first
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.session.force_quit();
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Setup => handle_setup_mode(app, key),
        UiMode::Session => handle_session_mode(app, key),
        UiMode::ConfirmQuit => handle_confirm_quit_mode(app, key),
        UiMode::Summary => handle_summary_mode(app, key),
        UiMode::Error => handle_error_mode(app, key),
    }
}

/// Handle keys on the setup screen
fn handle_setup_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let on_list = matches!(app.form.focus, SetupField::AppList | SetupField::TaskList);

    match key.code {
        // Start session from any field
        KeyCode::F(5) => {
            app.start_session();
            Ok(false)
        }
        KeyCode::Char('s') if ctrl => {
            app.start_session();
            Ok(false)
        }

        // Default preset
        KeyCode::F(2) => {
            app.use_preset();
            Ok(false)
        }
        KeyCode::Char('p') if ctrl => {
            app.use_preset();
            Ok(false)
        }

        // Field navigation
        KeyCode::Tab => {
            app.focus_next();
            Ok(false)
        }
        KeyCode::BackTab => {
            app.focus_prev();
            Ok(false)
        }

        // List navigation
        KeyCode::Up if on_list => {
            app.form_select(false);
            Ok(false)
        }
        KeyCode::Down if on_list => {
            app.form_select(true);
            Ok(false)
        }

        // Remove from list
        KeyCode::Delete | KeyCode::Backspace if on_list => {
            app.form_remove_selected();
            Ok(false)
        }
        KeyCode::Char('x') | KeyCode::Char('X') if on_list => {
            app.form_remove_selected();
            Ok(false)
        }

        KeyCode::Enter => {
            app.form_submit();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.form_backspace();
            Ok(false)
        }
        KeyCode::Char(c) if !ctrl => {
            app.form_add_char(c);
            Ok(false)
        }

        // Quit
        KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while the countdown is running
fn handle_session_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Check/uncheck task
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_selected_task();
            Ok(false)
        }

        // Zen mode
        KeyCode::Char('z') | KeyCode::Char('Z') => {
            app.toggle_zen_mode();
            Ok(false)
        }

        // End session early
        KeyCode::Char('x')
        | KeyCode::Char('X')
        | KeyCode::Char('q')
        | KeyCode::Char('Q')
        | KeyCode::Esc => {
            app.request_end_early();
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in the end-early confirmation modal
fn handle_confirm_quit_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.confirm_end_early();
            Ok(false)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel_end_early();
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys on the summary screen
fn handle_summary_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.new_session();
            Ok(false)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),
        _ => Ok(false),
    }
}

/// Handle keys in the rejected-start modal
fn handle_error_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            app.dismiss_error();
            Ok(false)
        }
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::domain::{Hms, SessionPhase};
    use crate::monitor::fake::FakeProcesses;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn create_test_app() -> AppState {
        AppState::new(&AppConfig::default(), Box::new(FakeProcesses::default()))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_handle_add_app() {
        let mut app = create_test_app();

        for c in "Discord".chars() {
            handle_key(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert!(app.session.apps.contains("discord"));
    }

    #[test]
    fn test_handle_tab_cycles_focus() {
        let mut app = create_test_app();
        assert_eq!(app.form.focus, SetupField::AppInput);

        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.form.focus, SetupField::AppList);

        handle_key(&mut app, key(KeyCode::BackTab)).unwrap();
        assert_eq!(app.form.focus, SetupField::AppInput);
    }

    #[test]
    fn test_handle_preset_and_remove() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::F(2))).unwrap();
        assert_eq!(app.session.apps.len(), 4);

        app.form.focus = SetupField::AppList;
        handle_key(&mut app, key(KeyCode::Delete)).unwrap();
        assert_eq!(app.session.apps.len(), 3);
        assert!(!app.session.apps.contains("Steam"));
    }

    #[test]
    fn test_handle_start_and_end_early() {
        let mut app = create_test_app();

        // Default config pre-fills 00:25:00
        handle_key(&mut app, ctrl('s')).unwrap();
        assert_eq!(app.ui_mode, UiMode::Session);
        assert_eq!(app.session.remaining(), Hms::new(0, 25, 0));

        handle_key(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::ConfirmQuit);

        handle_key(&mut app, key(KeyCode::Char('y'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Summary);
        assert_eq!(app.session.phase(), SessionPhase::ForceQuit);

        let should_quit = handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(should_quit);
    }

    #[test]
    fn test_handle_typing_q_in_setup_does_not_quit() {
        let mut app = create_test_app();
        let should_quit = handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(!should_quit);
        assert_eq!(app.form.app_input, "q");

        assert!(handle_key(&mut app, key(KeyCode::Esc)).unwrap());
    }

    #[test]
    fn test_handle_zero_duration_modal() {
        let mut app = create_test_app();
        app.form.minutes = "00".to_string();

        handle_key(&mut app, key(KeyCode::F(5))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Error);

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Setup);
    }

    #[test]
    fn test_handle_ctrl_c_force_quits() {
        let mut app = create_test_app();
        app.start_session_with(Hms::new(0, 5, 0));

        assert!(handle_key(&mut app, ctrl('c')).unwrap());
        assert_eq!(app.session.phase(), SessionPhase::ForceQuit);
    }
}
