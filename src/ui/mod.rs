pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod session_pane;
pub mod setup_pane;
pub mod styles;

use crate::app::AppState;
use crate::domain::UiMode;
use keybindings::render_keybindings;
use layout::{create_session_layout, create_setup_layout};
use modal::{render_confirm_quit_modal, render_error_modal, render_summary};
use ratatui::Frame;
use session_pane::{render_checklist, render_countdown, render_events};
use setup_pane::render_setup_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();

    match app.ui_mode {
        UiMode::Setup | UiMode::Error => {
            let layout = create_setup_layout(size);
            render_keybindings(f, app.ui_mode, layout.keybindings_area);
            render_setup_pane(f, app, &layout);
            render_error_modal(f, app, size);
        }
        UiMode::Session | UiMode::ConfirmQuit | UiMode::Summary => {
            let layout = create_session_layout(size, app.session.zen_mode);
            render_keybindings(f, app.ui_mode, layout.keybindings_area);
            render_countdown(f, app, layout.countdown_area);
            if let Some(checklist_area) = layout.checklist_area {
                render_checklist(f, app, checklist_area);
            }
            render_events(f, app, layout.events_area);

            render_confirm_quit_modal(f, app, size);
            if app.ui_mode == UiMode::Summary {
                render_summary(f, app, size);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::domain::Hms;
    use crate::monitor::fake::FakeProcesses;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn create_test_app() -> AppState {
        let mut app = AppState::new(
            &AppConfig::default(),
            Box::new(FakeProcesses::with_running(&["Discord"])),
        );
        app.use_preset();
        app.session.tasks.add("Read chapter 3");
        app
    }

    #[test]
    fn test_render_setup_screen() {
        let app = create_test_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| render(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Silenced apps (4)"));
        assert!(text.contains("Read chapter 3"));
    }

    #[test]
    fn test_render_session_and_zen_mode() {
        let mut app = create_test_app();
        app.start_session_with(Hms::new(1, 2, 3));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| render(f, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("01:02:03"));
        assert!(text.contains("Tasks to do"));
        assert!(text.contains("Discord closed"));

        app.toggle_zen_mode();
        terminal.draw(|f| render(f, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("01:02:03"));
        assert!(!text.contains("Tasks to do"));
    }

    #[test]
    fn test_render_summary() {
        let mut app = create_test_app();
        app.start_session_with(Hms::new(0, 10, 0));
        app.request_end_early();
        app.confirm_end_early();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| render(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Session Summary"));
        assert!(text.contains("Tasks done: 0 / 1"));
    }
}
