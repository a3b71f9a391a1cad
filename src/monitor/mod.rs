//! Suppression monitor
//!
//! Each tick lists running process names and asks the process-control
//! collaborator to terminate anything matching a suppressed name. Failures are
//! logged and dropped; the next tick simply checks again.

pub mod system;

use crate::domain::{matches_process, SuppressedAppSet};
use crate::error::Result;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub use system::SystemProcesses;

/// Access to the operating system's process table
pub trait ProcessControl {
    /// Names of every currently running process
    fn list_running_process_names(&mut self) -> Result<Vec<String>>;

    /// Terminate every process whose name contains `name` (case-insensitive).
    /// Returns how many processes were terminated.
    fn terminate_process_by_name(&mut self, name: &str) -> Result<usize>;
}

impl<T: ProcessControl + ?Sized> ProcessControl for Box<T> {
    fn list_running_process_names(&mut self) -> Result<Vec<String>> {
        (**self).list_running_process_names()
    }

    fn terminate_process_by_name(&mut self, name: &str) -> Result<usize> {
        (**self).terminate_process_by_name(name)
    }
}

/// A running process that a suppressed name would match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanMatch {
    pub suppressed: String,
    pub process_name: String,
}

/// Keeps suppressed applications closed
pub struct SuppressionMonitor<P: ProcessControl> {
    control: P,
    /// Time a single pass may take before it counts as an overrun
    budget: Duration,
}

impl<P: ProcessControl> SuppressionMonitor<P> {
    pub fn new(control: P, budget: Duration) -> Self {
        Self { control, budget }
    }

    #[cfg(test)]
    pub fn control(&self) -> &P {
        &self.control
    }

    /// Run one suppression pass.
    ///
    /// Requests termination once per suppressed name that matches at least one
    /// running process. Returns the names whose request closed something;
    /// failed requests are logged and retried on the next pass.
    pub fn tick(&mut self, apps: &SuppressedAppSet) -> Vec<String> {
        if apps.is_empty() {
            return Vec::new();
        }

        let started = Instant::now();
        let running = match self.control.list_running_process_names() {
            Ok(names) => names,
            Err(e) => {
                warn!("Skipping suppression pass: {}", e);
                return Vec::new();
            }
        };

        let mut closed = Vec::new();
        for app in apps.iter() {
            let Some(hit) = running.iter().find(|p| matches_process(app, p)) else {
                continue;
            };

            debug!(app, process = %hit, "Suppressed app is running");
            match self.control.terminate_process_by_name(app) {
                Ok(count) if count > 0 => {
                    info!(app, count, "Terminated suppressed app");
                    closed.push(app.to_string());
                }
                Ok(_) => {}
                Err(e) => debug!(app, "Termination failed: {}", e),
            }
        }

        let elapsed = started.elapsed();
        if elapsed > self.budget {
            warn!(
                elapsed_ms = elapsed.as_millis() as u64,
                budget_ms = self.budget.as_millis() as u64,
                "Suppression pass overran the tick period"
            );
        }

        closed
    }

    /// Request termination of every suppressed name without checking the
    /// process list first. Returns the names that closed at least one process.
    pub fn silence_all(&mut self, apps: &SuppressedAppSet) -> Vec<String> {
        let mut closed = Vec::new();
        for app in apps.iter() {
            match self.control.terminate_process_by_name(app) {
                Ok(count) if count > 0 => {
                    info!(app, count, "Closed app at session start");
                    closed.push(app.to_string());
                }
                Ok(_) => {}
                Err(e) => debug!(app, "Nothing closed at session start: {}", e),
            }
        }
        closed
    }

    /// List running processes the set would suppress, without terminating anything
    pub fn scan(&mut self, apps: &SuppressedAppSet) -> Result<Vec<ScanMatch>> {
        let running = self.control.list_running_process_names()?;

        let mut matches = Vec::new();
        for app in apps.iter() {
            for process in running.iter().filter(|p| matches_process(app, p)) {
                matches.push(ScanMatch {
                    suppressed: app.to_string(),
                    process_name: process.clone(),
                });
            }
        }
        matches.sort_by(|a, b| {
            a.suppressed
                .cmp(&b.suppressed)
                .then_with(|| a.process_name.cmp(&b.process_name))
        });
        Ok(matches)
    }
}

#[cfg(test)]
pub mod fake {
    use super::ProcessControl;
    use crate::domain::matches_process;
    use crate::error::{IsoStudyError, Result};

    /// In-memory process table that records termination requests
    #[derive(Debug, Default)]
    pub struct FakeProcesses {
        pub running: Vec<String>,
        pub terminations: Vec<String>,
        /// Termination requests remove matching processes from `running`
        pub kill_removes: bool,
        pub fail_listing: bool,
        /// Every termination request fails, as if permission were denied
        pub fail_termination: bool,
    }

    impl FakeProcesses {
        pub fn with_running(names: &[&str]) -> Self {
            Self {
                running: names.iter().map(|n| n.to_string()).collect(),
                ..Self::default()
            }
        }
    }

    impl ProcessControl for FakeProcesses {
        fn list_running_process_names(&mut self) -> Result<Vec<String>> {
            if self.fail_listing {
                return Err(IsoStudyError::ProcessEnumeration("access denied".to_string()));
            }
            Ok(self.running.clone())
        }

        fn terminate_process_by_name(&mut self, name: &str) -> Result<usize> {
            self.terminations.push(name.to_string());
            if self.fail_termination {
                return Err(IsoStudyError::TerminationFailed(name.to_string()));
            }
            let count = self.running.iter().filter(|p| matches_process(name, p)).count();
            if self.kill_removes {
                self.running.retain(|p| !matches_process(name, p));
            }
            if count == 0 {
                Err(IsoStudyError::NoMatchingProcess(name.to_string()))
            } else {
                Ok(count)
            }
        }
    }
}
