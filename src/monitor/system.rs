use super::ProcessControl;
use crate::domain::matches_process;
use crate::error::{IsoStudyError, Result};
use sysinfo::{Pid, ProcessesToUpdate, System};
use tracing::debug;

/// Process control backed by the live OS process table
///
/// Never terminates the isostudy process itself, even when its name matches.
pub struct SystemProcesses {
    system: System,
    own_pid: Option<Pid>,
}

impl Default for SystemProcesses {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemProcesses {
    pub fn new() -> Self {
        Self {
            system: System::new(),
            own_pid: sysinfo::get_current_pid().ok(),
        }
    }

    fn refresh(&mut self) {
        self.system.refresh_processes(ProcessesToUpdate::All, true);
    }
}

impl ProcessControl for SystemProcesses {
    fn list_running_process_names(&mut self) -> Result<Vec<String>> {
        self.refresh();

        let processes = self.system.processes();
        if processes.is_empty() {
            return Err(IsoStudyError::ProcessEnumeration(
                "no processes visible".to_string(),
            ));
        }

        // Skip ourselves so listing and termination agree on what can be closed
        Ok(processes
            .iter()
            .filter(|(pid, _)| Some(**pid) != self.own_pid)
            .map(|(_, p)| p.name().to_string_lossy().into_owned())
            .collect())
    }

    fn terminate_process_by_name(&mut self, name: &str) -> Result<usize> {
        self.refresh();

        let mut matched = 0;
        let mut killed = 0;
        for (pid, process) in self.system.processes() {
            if Some(*pid) == self.own_pid {
                continue;
            }
            let process_name = process.name().to_string_lossy();
            if !matches_process(name, &process_name) {
                continue;
            }

            matched += 1;
            if process.kill() {
                killed += 1;
                debug!(pid = pid.as_u32(), process = %process_name, "Killed process");
            } else {
                debug!(pid = pid.as_u32(), process = %process_name, "Kill signal refused");
            }
        }

        match (matched, killed) {
            (0, _) => Err(IsoStudyError::NoMatchingProcess(name.to_string())),
            (_, 0) => Err(IsoStudyError::TerminationFailed(name.to_string())),
            (_, n) => Ok(n),
        }
    }
}
