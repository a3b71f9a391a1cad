use crate::domain::{Countdown, CountdownStatus, Hms, SessionPhase, SuppressedAppSet, TaskList};
use crate::error::{IsoStudyError, Result};
use crate::monitor::{ProcessControl, SuppressionMonitor};
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use tracing::info;

/// Why a suppressed app appears in the event log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressionKind {
    /// Closed when the session started
    AtStart,
    /// Found running during the session
    Reopened,
}

/// A suppressed app the monitor acted on
#[derive(Debug, Clone)]
pub struct SuppressionEvent {
    pub at: DateTime<Local>,
    pub app: String,
    pub kind: SuppressionKind,
}

/// Snapshot of a finished session
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub outcome: SessionPhase,
    pub started_at: Option<DateTime<Local>>,
    pub ended_at: Option<DateTime<Local>>,
    pub planned: Hms,
    pub remaining: Hms,
    pub tasks_done: usize,
    pub tasks_total: usize,
    /// Apps the monitor actually closed after the start
    pub apps_closed: usize,
}

/// One study session: the suppressed apps, the checklist and the countdown
pub struct Session {
    pub apps: SuppressedAppSet,
    pub tasks: TaskList,
    countdown: Countdown,
    phase: SessionPhase,
    /// Reduced display: hides the checklist, task state is untouched
    pub zen_mode: bool,
    started_at: Option<DateTime<Local>>,
    ended_at: Option<DateTime<Local>>,
    events: VecDeque<SuppressionEvent>,
    max_events: usize,
    apps_closed: usize,
}

impl Session {
    pub fn new(apps: SuppressedAppSet, tasks: TaskList, max_events: usize) -> Self {
        Self {
            apps,
            tasks,
            countdown: Countdown::new(),
            phase: SessionPhase::Configuring,
            zen_mode: false,
            started_at: None,
            ended_at: None,
            events: VecDeque::new(),
            max_events: max_events.max(1),
            apps_closed: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn remaining(&self) -> Hms {
        self.countdown.remaining()
    }

    /// Most recent suppression events, newest last
    pub fn events(&self) -> impl Iterator<Item = &SuppressionEvent> {
        self.events.iter()
    }

    /// Begin the session. Closes every suppressed app once, then starts the countdown.
    ///
    /// An invalid duration leaves the session in `Configuring`.
    pub fn start<P: ProcessControl>(
        &mut self,
        duration: Hms,
        monitor: &mut SuppressionMonitor<P>,
    ) -> Result<()> {
        if self.phase != SessionPhase::Configuring {
            return Err(IsoStudyError::AlreadyStarted);
        }

        let mut countdown = Countdown::new();
        countdown.start(duration.hours, duration.minutes, duration.seconds)?;
        self.countdown = countdown;
        self.phase = SessionPhase::Running;
        self.started_at = Some(Local::now());

        info!(
            duration = %duration,
            apps = self.apps.len(),
            tasks = self.tasks.len(),
            "Session started"
        );

        let closed = monitor.silence_all(&self.apps);
        self.record(closed, SuppressionKind::AtStart);
        Ok(())
    }

    /// Process `ticks` whole tick periods: one suppression pass, then one
    /// countdown step per period. Returns the remaining time, or `None` when
    /// the session is not running.
    pub fn tick<P: ProcessControl>(
        &mut self,
        monitor: &mut SuppressionMonitor<P>,
        ticks: u32,
    ) -> Option<Hms> {
        if self.phase != SessionPhase::Running || ticks == 0 {
            return None;
        }

        let closed = monitor.tick(&self.apps);
        self.apps_closed += closed.len();
        self.record(closed, SuppressionKind::Reopened);

        for _ in 0..ticks {
            if self.countdown.tick().is_none() {
                break;
            }
        }

        if self.countdown.status() == CountdownStatus::Expired {
            self.phase = SessionPhase::Completed;
            self.ended_at = Some(Local::now());
            info!(
                tasks_done = self.tasks.completed_count(),
                tasks_total = self.tasks.len(),
                "Session completed"
            );
        }

        Some(self.countdown.remaining())
    }

    /// End the session early
    pub fn force_quit(&mut self) -> bool {
        if self.phase != SessionPhase::Running {
            return false;
        }
        self.countdown.cancel();
        self.phase = SessionPhase::ForceQuit;
        self.ended_at = Some(Local::now());
        info!(remaining = %self.countdown.remaining(), "Session ended early");
        true
    }

    pub fn toggle_zen_mode(&mut self) {
        self.zen_mode = !self.zen_mode;
    }

    /// Go back to `Configuring`, keeping the app set and task titles
    pub fn reset(&mut self) {
        if self.phase == SessionPhase::Running {
            return;
        }
        self.phase = SessionPhase::Configuring;
        self.countdown = Countdown::new();
        self.tasks.reset_progress();
        self.zen_mode = false;
        self.started_at = None;
        self.ended_at = None;
        self.events.clear();
        self.apps_closed = 0;
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            outcome: self.phase,
            started_at: self.started_at,
            ended_at: self.ended_at,
            planned: self.countdown.initial(),
            remaining: self.countdown.remaining(),
            tasks_done: self.tasks.completed_count(),
            tasks_total: self.tasks.len(),
            apps_closed: self.apps_closed,
        }
    }

    fn record(&mut self, apps: Vec<String>, kind: SuppressionKind) {
        let now = Local::now();
        for app in apps {
            self.events.push_back(SuppressionEvent { at: now, app, kind });
            while self.events.len() > self.max_events {
                self.events.pop_front();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::fake::FakeProcesses;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn monitor(running: &[&str]) -> SuppressionMonitor<FakeProcesses> {
        SuppressionMonitor::new(FakeProcesses::with_running(running), Duration::from_secs(1))
    }

    fn session() -> Session {
        Session::new(
            SuppressedAppSet::from_names(["Steam"]),
            TaskList::from_titles(["Read chapter 3", "Problem set"]),
            10,
        )
    }

    #[test]
    fn test_start_invalid_duration_stays_configuring() {
        let mut session = session();
        let mut monitor = monitor(&[]);

        let err = session.start(Hms::ZERO, &mut monitor).unwrap_err();

        assert!(matches!(err, IsoStudyError::InvalidDuration));
        assert_eq!(session.phase(), SessionPhase::Configuring);
        assert!(monitor.control().terminations.is_empty());
    }

    #[test]
    fn test_start_silences_apps() {
        let mut session = session();
        let mut monitor = monitor(&["steam.exe"]);

        session.start(Hms::new(0, 0, 3), &mut monitor).unwrap();

        assert_eq!(session.phase(), SessionPhase::Running);
        assert_eq!(monitor.control().terminations, vec!["Steam".to_string()]);
        let events: Vec<_> = session.events().collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, SuppressionKind::AtStart);
    }

    #[test]
    fn test_tick_runs_to_completion() {
        let mut session = session();
        let mut monitor = monitor(&[]);
        session.start(Hms::new(0, 0, 3), &mut monitor).unwrap();

        assert_eq!(session.tick(&mut monitor, 1), Some(Hms::new(0, 0, 2)));
        assert_eq!(session.tick(&mut monitor, 1), Some(Hms::new(0, 0, 1)));
        assert_eq!(session.tick(&mut monitor, 1), Some(Hms::ZERO));
        assert_eq!(session.phase(), SessionPhase::Completed);
        assert!(session.summary().ended_at.is_some());

        assert_eq!(session.tick(&mut monitor, 1), None);
    }

    #[test]
    fn test_tick_catches_up_but_monitors_once() {
        let mut session = session();
        let mut monitor = monitor(&["SteamService.exe"]);
        session.start(Hms::new(0, 1, 0), &mut monitor).unwrap();

        let remaining = session.tick(&mut monitor, 5);

        assert_eq!(remaining, Some(Hms::new(0, 0, 55)));
        // One at start, one for the tick
        assert_eq!(monitor.control().terminations.len(), 2);
        assert_eq!(session.summary().apps_closed, 1);
    }

    #[test]
    fn test_catch_up_never_underflows() {
        let mut session = session();
        let mut monitor = monitor(&[]);
        session.start(Hms::new(0, 0, 2), &mut monitor).unwrap();

        assert_eq!(session.tick(&mut monitor, 10), Some(Hms::ZERO));
        assert_eq!(session.phase(), SessionPhase::Completed);
    }

    #[test]
    fn test_force_quit() {
        let mut session = session();
        let mut monitor = monitor(&["Steam"]);
        session.start(Hms::new(0, 5, 0), &mut monitor).unwrap();
        session.tick(&mut monitor, 1);

        assert!(session.force_quit());
        assert_eq!(session.phase(), SessionPhase::ForceQuit);
        assert_eq!(session.tick(&mut monitor, 1), None);
        assert_eq!(session.remaining(), Hms::new(0, 4, 59));
        assert!(!session.force_quit());
    }

    #[test]
    fn test_zen_mode_keeps_tasks() {
        let mut session = session();
        let id = session.tasks.get(0).unwrap().id;
        session.tasks.toggle(id);

        session.toggle_zen_mode();
        assert!(session.zen_mode);
        assert_eq!(session.tasks.len(), 2);
        assert_eq!(session.tasks.completed_count(), 1);

        session.toggle_zen_mode();
        assert!(!session.zen_mode);
    }

    #[test]
    fn test_reset_keeps_lists() {
        let mut session = session();
        let mut monitor = monitor(&[]);
        let id = session.tasks.get(0).unwrap().id;
        session.tasks.toggle(id);
        session.start(Hms::new(0, 0, 1), &mut monitor).unwrap();
        session.tick(&mut monitor, 1);

        session.reset();

        assert_eq!(session.phase(), SessionPhase::Configuring);
        assert_eq!(session.apps.len(), 1);
        assert_eq!(session.tasks.len(), 2);
        assert_eq!(session.tasks.completed_count(), 0);
        assert_eq!(session.countdown().status(), CountdownStatus::Idle);
    }

    #[test]
    fn test_event_log_is_bounded() {
        let mut session = Session::new(SuppressedAppSet::from_names(["Steam"]), TaskList::new(), 2);
        let mut monitor = monitor(&["steam"]);
        session.start(Hms::new(1, 0, 0), &mut monitor).unwrap();
        for _ in 0..5 {
            session.tick(&mut monitor, 1);
        }
        assert_eq!(session.events().count(), 2);
        assert_eq!(session.summary().apps_closed, 5);
    }

    #[test]
    fn test_failed_terminations_are_not_counted() {
        let mut fake = FakeProcesses::with_running(&["SteamService.exe"]);
        fake.fail_termination = true;
        let mut monitor = SuppressionMonitor::new(fake, Duration::from_secs(1));
        let mut session = session();
        session.start(Hms::new(0, 1, 0), &mut monitor).unwrap();

        session.tick(&mut monitor, 1);
        session.tick(&mut monitor, 1);

        // Start plus two ticks, all refused
        assert_eq!(monitor.control().terminations.len(), 3);
        assert_eq!(session.events().count(), 0);
        assert_eq!(session.summary().apps_closed, 0);
    }

    #[test]
    fn test_summary_counts() {
        let mut session = session();
        let mut monitor = monitor(&[]);
        let id = session.tasks.get(1).unwrap().id;
        session.tasks.toggle(id);
        session.start(Hms::new(0, 10, 0), &mut monitor).unwrap();
        session.force_quit();

        let summary = session.summary();
        assert_eq!(summary.outcome, SessionPhase::ForceQuit);
        assert_eq!(summary.tasks_done, 1);
        assert_eq!(summary.tasks_total, 2);
        assert_eq!(summary.planned, Hms::new(0, 10, 0));
    }
}
