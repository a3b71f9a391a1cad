use crate::config::AppConfig;
use crate::domain::{Hms, SessionPhase, SetupField, SuppressedAppSet, TaskList, UiMode};
use crate::error::user_message;
use crate::monitor::{ProcessControl, SuppressionMonitor};
use crate::notifications;
use crate::session::Session;
use crate::ticker::Ticker;
use std::time::Instant;
use tracing::{info, warn};

/// Text fields of the setup screen
#[derive(Debug, Clone)]
pub struct SetupForm {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub app_input: String,
    pub task_input: String,
    pub focus: SetupField,
    pub app_selected: usize,
    pub task_selected: usize,
}

impl SetupForm {
    pub fn new(duration: Hms) -> Self {
        Self {
            hours: format!("{:02}", duration.hours),
            minutes: format!("{:02}", duration.minutes),
            seconds: format!("{:02}", duration.seconds),
            app_input: String::new(),
            task_input: String::new(),
            focus: SetupField::AppInput,
            app_selected: 0,
            task_selected: 0,
        }
    }

    /// Duration typed into the form; empty fields count as zero
    pub fn duration(&self) -> Hms {
        let parse = |s: &str| s.trim().parse::<u32>().unwrap_or(0);
        Hms::new(parse(&self.hours), parse(&self.minutes), parse(&self.seconds))
    }

    fn field_mut(&mut self, field: SetupField) -> Option<&mut String> {
        match field {
            SetupField::Hours => Some(&mut self.hours),
            SetupField::Minutes => Some(&mut self.minutes),
            SetupField::Seconds => Some(&mut self.seconds),
            SetupField::AppInput => Some(&mut self.app_input),
            SetupField::TaskInput => Some(&mut self.task_input),
            SetupField::AppList | SetupField::TaskList => None,
        }
    }
}

/// Main application state
pub struct AppState {
    pub session: Session,
    pub monitor: SuppressionMonitor<Box<dyn ProcessControl>>,
    pub ticker: Ticker,
    pub ui_mode: UiMode,
    pub form: SetupForm,
    pub preset_apps: Vec<String>,
    pub selected_task: usize, // Checklist cursor on the session screen
    pub error_message: Option<String>,
}

impl AppState {
    pub fn new(config: &AppConfig, control: Box<dyn ProcessControl>) -> Self {
        let period = config.tick_interval();
        Self {
            session: Session::new(SuppressedAppSet::new(), TaskList::new(), config.max_event_log),
            monitor: SuppressionMonitor::new(control, period),
            ticker: Ticker::new(period, Instant::now()),
            ui_mode: UiMode::Setup,
            form: SetupForm::new(config.default_duration.to_hms()),
            preset_apps: config.preset_apps.clone(),
            selected_task: 0,
            error_message: None,
        }
    }

    // ----- Setup screen -----

    /// Move focus to the next setup field
    pub fn focus_next(&mut self) {
        self.form.focus = self.form.focus.next();
    }

    /// Move focus to the previous setup field
    pub fn focus_prev(&mut self) {
        self.form.focus = self.form.focus.prev();
    }

    /// Type a character into the focused field.
    ///
    /// Duration fields take digits only and reject values above the field's
    /// maximum. A field that reads all zeros is replaced by the first digit.
    pub fn form_add_char(&mut self, c: char) {
        let focus = self.form.focus;
        let max = focus.max_value();
        let Some(field) = self.form.field_mut(focus) else {
            return;
        };

        match max {
            Some(max) => {
                if !c.is_ascii_digit() {
                    return;
                }
                let mut candidate = if !field.is_empty() && field.chars().all(|ch| ch == '0') {
                    String::new()
                } else {
                    field.clone()
                };
                candidate.push(c);
                let fits = candidate.len() <= 2
                    && candidate.parse::<u32>().map(|v| v <= max).unwrap_or(false);
                if fits {
                    *field = candidate;
                }
            }
            None => field.push(c),
        }
    }

    /// Delete the last character of the focused field
    pub fn form_backspace(&mut self) {
        let focus = self.form.focus;
        if let Some(field) = self.form.field_mut(focus) {
            field.pop();
        }
    }

    /// Enter on the setup screen: add the typed app/task, or start the session
    pub fn form_submit(&mut self) {
        match self.form.focus {
            SetupField::AppInput => {
                let name = std::mem::take(&mut self.form.app_input);
                if self.session.apps.add(&name) {
                    self.form.app_selected = self.session.apps.len() - 1;
                }
            }
            SetupField::TaskInput => {
                let title = std::mem::take(&mut self.form.task_input);
                if self.session.tasks.add(&title).is_some() {
                    self.form.task_selected = self.session.tasks.len() - 1;
                }
            }
            field if field.is_duration() => self.start_session(),
            _ => {}
        }
    }

    /// Move the cursor in the focused setup list
    pub fn form_select(&mut self, down: bool) {
        let (selected, len) = match self.form.focus {
            SetupField::AppList => (&mut self.form.app_selected, self.session.apps.len()),
            SetupField::TaskList => (&mut self.form.task_selected, self.session.tasks.len()),
            _ => return,
        };
        if down {
            if *selected + 1 < len {
                *selected += 1;
            }
        } else {
            *selected = selected.saturating_sub(1);
        }
    }

    /// Remove the highlighted entry of the focused setup list
    pub fn form_remove_selected(&mut self) {
        match self.form.focus {
            SetupField::AppList => {
                let selected = self.session.apps.names().get(self.form.app_selected).cloned();
                if let Some(name) = selected {
                    if self.session.apps.remove(&name) {
                        info!(app = %name, "Removed suppressed app");
                    }
                }
                self.form.app_selected = clamp_index(self.form.app_selected, self.session.apps.len());
            }
            SetupField::TaskList => {
                if let Some(id) = self.session.tasks.get(self.form.task_selected).map(|t| t.id) {
                    self.session.tasks.remove(id);
                }
                self.form.task_selected =
                    clamp_index(self.form.task_selected, self.session.tasks.len());
            }
            _ => {}
        }
    }

    /// Replace the suppressed apps with the configured preset, or the
    /// built-in one when config.json lists none
    pub fn use_preset(&mut self) {
        if self.preset_apps.is_empty() {
            self.session.apps.use_default_preset();
        } else {
            self.session.apps.apply_preset(&self.preset_apps);
        }
        self.form.app_selected = 0;
    }

    /// Start the session with the form's duration
    pub fn start_session(&mut self) {
        let duration = self.form.duration();
        self.start_session_with(duration);
    }

    /// Start the session. A rejected duration shows the error modal and keeps
    /// the setup screen.
    pub fn start_session_with(&mut self, duration: Hms) -> bool {
        match self.session.start(duration, &mut self.monitor) {
            Ok(()) => {
                self.ticker.reset(Instant::now());
                self.selected_task = 0;
                self.error_message = None;
                self.ui_mode = UiMode::Session;
                true
            }
            Err(e) => {
                warn!("Start rejected: {}", e);
                self.error_message = Some(user_message(&e));
                self.ui_mode = UiMode::Error;
                false
            }
        }
    }

    /// Close the error modal
    pub fn dismiss_error(&mut self) {
        self.error_message = None;
        self.ui_mode = UiMode::Setup;
    }

    // ----- Session screen -----

    pub fn move_selection_up(&mut self) {
        self.selected_task = self.selected_task.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_task + 1 < self.session.tasks.len() {
            self.selected_task += 1;
        }
    }

    /// Check or uncheck the highlighted task (ignored in zen mode)
    pub fn toggle_selected_task(&mut self) {
        if self.session.zen_mode {
            return;
        }
        if let Some(id) = self.session.tasks.get(self.selected_task).map(|t| t.id) {
            self.session.tasks.toggle(id);
        }
    }

    pub fn toggle_zen_mode(&mut self) {
        self.session.toggle_zen_mode();
    }

    /// Ask before ending the session early
    pub fn request_end_early(&mut self) {
        if self.session.phase() == SessionPhase::Running {
            self.ui_mode = UiMode::ConfirmQuit;
        }
    }

    pub fn confirm_end_early(&mut self) {
        self.session.force_quit();
        self.ui_mode = UiMode::Summary;
    }

    pub fn cancel_end_early(&mut self) {
        self.ui_mode = UiMode::Session;
    }

    // ----- Summary screen -----

    /// Back to the setup screen, keeping apps and tasks
    pub fn new_session(&mut self) {
        if !self.session.phase().is_finished() {
            return;
        }
        self.session.reset();
        self.selected_task = 0;
        self.ui_mode = UiMode::Setup;
    }

    /// Advance timers
    pub fn tick(&mut self, now: Instant) {
        let ticks = self.ticker.due(now);
        if ticks == 0 || self.session.phase() != SessionPhase::Running {
            return;
        }

        self.session.tick(&mut self.monitor, ticks);

        if self.session.phase() == SessionPhase::Completed {
            let summary = self.session.summary();
            notifications::notify_session_complete(summary.tasks_done, summary.tasks_total);
            self.ui_mode = UiMode::Summary;
        }
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}
